//! Read-only graph capability

use crate::shared::models::{Handle, NodeId, Orientation};

/// Side of a handle from which edges are followed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Successors: `handle -> next`
    Right,
    /// Predecessors: `prev -> handle`
    Left,
}

/// Bidirected sequence graph
///
/// Iteration uses `&mut dyn FnMut` visitors that return `false` to stop
/// early, which keeps the trait object safe.
pub trait HandleGraph {
    /// Does the node exist in the graph
    fn has_node(&self, id: NodeId) -> bool;

    /// Smallest node identifier. Unspecified for an empty graph.
    fn min_node_id(&self) -> NodeId;

    /// Largest node identifier. Unspecified for an empty graph.
    fn max_node_id(&self) -> NodeId;

    /// Number of nodes
    fn node_count(&self) -> usize;

    /// Handle for the node in the given orientation
    fn get_handle(&self, id: NodeId, orientation: Orientation) -> Handle {
        Handle::new(id, orientation)
    }

    /// Visit the neighbors of `handle` in the given direction. Returns
    /// `false` if the iteratee stopped the iteration.
    fn follow_edges(
        &self,
        handle: Handle,
        direction: EdgeDirection,
        iteratee: &mut dyn FnMut(Handle) -> bool,
    ) -> bool;

    /// Number of edges on the given side of `handle`
    fn degree(&self, handle: Handle, direction: EdgeDirection) -> usize {
        let mut count = 0;
        self.follow_edges(handle, direction, &mut |_| {
            count += 1;
            true
        });
        count
    }

    /// Visit the forward handle of every node in ascending node id order.
    /// Returns `false` if the iteratee stopped the iteration.
    fn for_each_handle(&self, iteratee: &mut dyn FnMut(Handle) -> bool) -> bool;

    /// Collect the neighbors of `handle` in the given direction
    fn neighbors(&self, handle: Handle, direction: EdgeDirection) -> Vec<Handle> {
        let mut result = Vec::new();
        self.follow_edges(handle, direction, &mut |next| {
            result.push(next);
            true
        });
        result
    }
}
