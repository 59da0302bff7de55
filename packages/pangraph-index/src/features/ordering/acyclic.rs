//! Acyclicity and orientation validation of a component
//!
//! A component is "nice" when every node can be given a single orientation
//! such that all edges go forward in the chosen orientations, and the
//! resulting directed graph is acyclic. The walk starts from the forward
//! handles with no predecessors and peels nodes whose in-degree drops to
//! zero, committing each node to the orientation it is first reached in.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::shared::models::{Handle, NodeId, Orientation};
use crate::shared::ports::{EdgeDirection, HandleGraph};

/// Per-node walk state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    /// Not reached from any head yet
    Unvisited,
    /// Reached in `orientation`, with `remaining` unprocessed predecessors
    Pending {
        remaining: usize,
        orientation: Orientation,
    },
}

/// Head nodes of a nice acyclic component
///
/// Returns the nodes whose forward handle has no predecessors, in component
/// order, if the component is acyclic under a single orientation per node.
/// Returns an empty vector otherwise, and for an empty component.
///
/// Component entries that no longer exist in the graph are skipped and not
/// expected to be found. Edges from existing nodes into removed ones are not
/// re-validated; such an edge makes the component fail.
pub fn is_nice_and_acyclic<G>(graph: &G, component: &[NodeId]) -> Vec<NodeId>
where
    G: HandleGraph + ?Sized,
{
    let mut head_nodes = Vec::new();
    if component.is_empty() {
        return head_nodes;
    }

    let mut states: FxHashMap<NodeId, NodeState> = FxHashMap::default();
    states.reserve(component.len());
    let mut active: Vec<Handle> = Vec::new();
    let mut found = 0usize;
    let mut missing_nodes = 0usize;

    for &node in component {
        if !graph.has_node(node) {
            missing_nodes += 1;
            continue;
        }
        let handle = Handle::forward(node);
        if graph.degree(handle, EdgeDirection::Left) == 0 {
            states.insert(
                node,
                NodeState::Pending {
                    remaining: 0,
                    orientation: Orientation::Forward,
                },
            );
            head_nodes.push(node);
            active.push(handle);
            found += 1;
        } else {
            states.insert(node, NodeState::Unvisited);
        }
    }

    let mut ok = true;
    while let Some(curr) = active.pop() {
        graph.follow_edges(curr, EdgeDirection::Right, &mut |next| {
            let Some(state) = states.get_mut(&next.id()) else {
                ok = false;
                return false;
            };
            let remaining = match *state {
                NodeState::Unvisited => graph.degree(next, EdgeDirection::Left),
                NodeState::Pending {
                    remaining,
                    orientation,
                } => {
                    if orientation != next.orientation() {
                        ok = false;
                        return false;
                    }
                    remaining
                }
            };
            if remaining == 0 {
                // More incoming edges than the in-degree: the node was
                // already peeled.
                ok = false;
                return false;
            }
            *state = NodeState::Pending {
                remaining: remaining - 1,
                orientation: next.orientation(),
            };
            if remaining == 1 {
                active.push(next);
                found += 1;
            }
            true
        });
        if !ok {
            break;
        }
    }

    if found != component.len() - missing_nodes {
        ok = false;
    }
    if !ok {
        trace!(
            nodes = component.len(),
            found,
            "component is not nice and acyclic"
        );
        head_nodes.clear();
    }
    head_nodes
}
