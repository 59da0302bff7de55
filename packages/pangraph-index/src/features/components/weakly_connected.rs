//! Weakly connected components
//!
//! Edges are followed in both directions, ignoring orientation, with an
//! explicit stack. Production graphs have millions of nodes, so the walk
//! never recurses.

use tracing::debug;

use super::union_find::DisjointSets;
use crate::shared::models::{Handle, NodeId};
use crate::shared::ports::{EdgeDirection, HandleGraph};

/// Node ids of one weakly connected component, ascending
pub type Component = Vec<NodeId>;

/// Partition the existing nodes into weakly connected components
///
/// Components are listed in the order their union-find representative is
/// first met when scanning node ids in ascending order, so the result only
/// depends on the graph itself.
pub fn weakly_connected_components<G>(graph: &G) -> Vec<Component>
where
    G: HandleGraph + ?Sized,
{
    if graph.node_count() == 0 {
        return Vec::new();
    }
    let (min_id, max_id) = (graph.min_node_id(), graph.max_node_id());
    if max_id < min_id {
        return Vec::new();
    }

    let range = (max_id - min_id + 1) as usize;
    let mut found = vec![false; range];
    let mut components = DisjointSets::new(range, min_id);
    let mut handles: Vec<Handle> = Vec::new();

    graph.for_each_handle(&mut |handle| {
        if found[(handle.id() - min_id) as usize] {
            return true;
        }
        handles.push(handle);
        while let Some(h) = handles.pop() {
            let id = h.id();
            let slot = (id - min_id) as usize;
            if found[slot] {
                continue;
            }
            found[slot] = true;
            for direction in [EdgeDirection::Right, EdgeDirection::Left] {
                graph.follow_edges(h, direction, &mut |next| {
                    if components.contains(next.id()) {
                        components.union(id, next.id());
                        handles.push(next);
                    }
                    true
                });
            }
        }
        true
    });

    let result = components.sets(|node| graph.has_node(node));
    debug!(
        nodes = graph.node_count(),
        components = result.len(),
        "found weakly connected components"
    );
    result
}
