//! Topological order over both orientations of a node subset
//!
//! Kahn's algorithm: compute in-degrees restricted to the subset, seed with
//! the zero in-degree handles, and repeatedly peel successors whose last
//! incoming edge has been consumed. Handles are seeded in ascending handle
//! order so that the output is reproducible.

use rustc_hash::FxHashMap;

use crate::shared::models::{Handle, NodeId};
use crate::shared::ports::{EdgeDirection, HandleGraph};

/// Topological order of the handles of `subgraph`
///
/// Both orientations of every existing node are ordered, so a valid result
/// has exactly `2 * existing nodes` handles. Edges with an endpoint outside
/// the subset are ignored. If the subgraph has a cycle (including a node
/// reachable from its own reverse), the result is empty.
pub fn topological_order<G, I>(graph: &G, subgraph: I) -> Vec<Handle>
where
    G: HandleGraph + ?Sized,
    I: IntoIterator<Item = NodeId>,
{
    let mut nodes: Vec<NodeId> = subgraph
        .into_iter()
        .filter(|&node| graph.has_node(node))
        .collect();
    nodes.sort_unstable();
    nodes.dedup();

    let mut result: Vec<Handle> = Vec::with_capacity(2 * nodes.len());
    if nodes.is_empty() {
        return result;
    }

    let handles: Vec<Handle> = nodes
        .iter()
        .flat_map(|&node| [Handle::forward(node), Handle::reverse(node)])
        .collect();
    let mut indegrees: FxHashMap<Handle, usize> = handles.iter().map(|&h| (h, 0)).collect();

    let mut active: Vec<Handle> = Vec::new();
    for &handle in &handles {
        let mut indegree = 0;
        graph.follow_edges(handle, EdgeDirection::Left, &mut |prev| {
            if indegrees.contains_key(&prev) {
                indegree += 1;
            }
            true
        });
        indegrees.insert(handle, indegree);
        if indegree == 0 {
            active.push(handle);
            result.push(handle);
        }
    }

    while let Some(curr) = active.pop() {
        graph.follow_edges(curr, EdgeDirection::Right, &mut |next| {
            if let Some(indegree) = indegrees.get_mut(&next) {
                *indegree -= 1;
                if *indegree == 0 {
                    active.push(next);
                    result.push(next);
                }
            }
            true
        });
    }

    if result.len() != handles.len() {
        result.clear();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryGraph;
    use pretty_assertions::assert_eq;

    fn assert_valid_order(graph: &MemoryGraph, order: &[Handle]) {
        let rank: FxHashMap<Handle, usize> =
            order.iter().enumerate().map(|(i, &h)| (h, i)).collect();
        for &handle in order {
            graph.follow_edges(handle, EdgeDirection::Right, &mut |next| {
                if let Some(&next_rank) = rank.get(&next) {
                    assert!(rank[&handle] < next_rank, "{} before {}", handle, next);
                }
                true
            });
        }
    }

    #[test]
    fn test_chain_order() {
        let graph = MemoryGraph::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let order = topological_order(&graph, [1, 2, 3]);
        assert_eq!(
            order,
            vec![
                Handle::forward(1),
                Handle::reverse(3),
                Handle::reverse(2),
                Handle::reverse(1),
                Handle::forward(2),
                Handle::forward(3),
            ]
        );
        assert_valid_order(&graph, &order);
    }

    #[test]
    fn test_cycle_gives_empty_order() {
        let graph = MemoryGraph::from_edges(&[(1, 2), (2, 1)]).unwrap();
        assert!(topological_order(&graph, [1, 2]).is_empty());
    }

    #[test]
    fn test_edges_leaving_subset_ignored() {
        let graph = MemoryGraph::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let order = topological_order(&graph, [2, 3]);
        assert_eq!(order.len(), 4);
        assert_valid_order(&graph, &order);
    }

    #[test]
    fn test_missing_and_duplicate_nodes() {
        let graph = MemoryGraph::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let order = topological_order(&graph, [3, 1, 2, 42, 2]);
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn test_self_loop_gives_empty_order() {
        let mut graph = MemoryGraph::new();
        graph.create_node(1);
        graph.create_node(2);
        graph
            .create_edge(Handle::forward(1), Handle::forward(1))
            .unwrap();
        assert!(topological_order(&graph, [1, 2]).is_empty());
    }

    #[test]
    fn test_inversion_edge_is_ordered() {
        // 1+ -> 1- is its own reverse complement, not a cycle
        let mut graph = MemoryGraph::new();
        graph.create_node(1);
        graph
            .create_edge(Handle::forward(1), Handle::reverse(1))
            .unwrap();
        assert_eq!(
            topological_order(&graph, [1]),
            vec![Handle::forward(1), Handle::reverse(1)]
        );
    }

    #[test]
    fn test_empty_subset() {
        let graph = MemoryGraph::from_edges(&[(1, 2)]).unwrap();
        assert!(topological_order(&graph, std::iter::empty()).is_empty());
    }
}
