//! Read-only snarl/chain decomposition capability
//!
//! Only the shape needed to route top-level chains is exposed: the root,
//! the children of a net handle, and the node handles at the leaves.

use crate::shared::models::Handle;

/// Opaque element of the decomposition tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetHandle(pub usize);

pub trait SnarlDecomposition {
    /// Root of the decomposition. Its children are the top-level chains.
    fn root(&self) -> NetHandle;

    /// Visit the children of `parent` in order. Returns `false` if the
    /// iteratee stopped the iteration.
    fn for_each_child(&self, parent: NetHandle, iteratee: &mut dyn FnMut(NetHandle) -> bool)
        -> bool;

    /// Is the element a graph node
    fn is_node(&self, net: NetHandle) -> bool;

    /// Graph handle of a node element. Only meaningful when `is_node(net)`.
    fn node_handle(&self, net: NetHandle) -> Handle;
}
