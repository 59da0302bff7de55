//! In-memory bidirected graph with embedded paths
//!
//! Nodes carry no sequence. Each node stores its edges relative to the
//! forward orientation: `successors` leave the right side of `id+`,
//! `predecessors` enter its left side. An edge is stored once at each
//! endpoint, so both directions of traversal are a single lookup.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::shared::models::{Handle, NodeId, PathHandle, PathMetadata};
use crate::shared::ports::{EdgeDirection, HandleGraph, PathHandleGraph};

/// Errors raised while building a [`MemoryGraph`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node identifier 0 is reserved")]
    InvalidNodeId,

    #[error("Cannot create an edge between nodes {from} and {to}")]
    UnknownEdgeEndpoint { from: NodeId, to: NodeId },

    #[error("Path '{path}' visits missing node {node}")]
    UnknownPathNode { path: String, node: NodeId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NodeEdges {
    predecessors: Vec<Handle>,
    successors: Vec<Handle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredPath {
    metadata: PathMetadata,
    steps: Vec<Handle>,
}

/// Mutable graph implementing [`HandleGraph`] and [`PathHandleGraph`]
///
/// Handle enumeration is in ascending node id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryGraph {
    nodes: BTreeMap<NodeId, NodeEdges>,
    paths: Vec<StoredPath>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from forward-to-forward edges, creating the endpoints
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for &(from, to) in edges {
            graph.try_create_node(from)?;
            graph.try_create_node(to)?;
            graph.create_edge(Handle::forward(from), Handle::forward(to))?;
        }
        Ok(graph)
    }

    /// Create a node if it does not exist yet
    ///
    /// # Panics
    /// Panics on node id 0; use [`MemoryGraph::try_create_node`] for
    /// untrusted input.
    pub fn create_node(&mut self, id: NodeId) {
        assert!(id != 0, "node identifier 0 is reserved");
        self.nodes.entry(id).or_default();
    }

    pub fn try_create_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        if id == 0 {
            return Err(GraphError::InvalidNodeId);
        }
        self.nodes.entry(id).or_default();
        Ok(())
    }

    /// Create the edge `from -> to`, which is also `to.flip() -> from.flip()`
    pub fn create_edge(&mut self, from: Handle, to: Handle) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&from.id()) || !self.nodes.contains_key(&to.id()) {
            return Err(GraphError::UnknownEdgeEndpoint {
                from: from.id(),
                to: to.id(),
            });
        }

        // from -> to
        let from_edges = self.nodes.entry(from.id()).or_default();
        if from.is_reverse() {
            from_edges.predecessors.push(to.flip());
        } else {
            from_edges.successors.push(to);
        }

        // to -> from
        let to_edges = self.nodes.entry(to.id()).or_default();
        if to.is_reverse() {
            to_edges.successors.push(from.flip());
        } else {
            to_edges.predecessors.push(from);
        }

        Ok(())
    }

    /// Drop repeated edges, keeping the first occurrence
    pub fn remove_duplicate_edges(&mut self) {
        for edges in self.nodes.values_mut() {
            dedup_in_order(&mut edges.predecessors);
            dedup_in_order(&mut edges.successors);
        }
    }

    /// Add a path over existing nodes
    pub fn add_path(
        &mut self,
        metadata: PathMetadata,
        steps: Vec<Handle>,
    ) -> Result<PathHandle, GraphError> {
        if let Some(missing) = steps.iter().find(|h| !self.nodes.contains_key(&h.id())) {
            return Err(GraphError::UnknownPathNode {
                path: metadata.to_string(),
                node: missing.id(),
            });
        }
        self.paths.push(StoredPath { metadata, steps });
        Ok(PathHandle(self.paths.len() - 1))
    }

    /// Number of stored edges
    pub fn edge_count(&self) -> usize {
        // Every edge is stored once at each endpoint; self-loops on one side
        // are stored twice at the same node.
        let total: usize = self
            .nodes
            .values()
            .map(|e| e.predecessors.len() + e.successors.len())
            .sum();
        total / 2
    }

    fn edges_of(&self, handle: Handle, direction: EdgeDirection) -> Option<&[Handle]> {
        let edges = self.nodes.get(&handle.id())?;
        let go_left = direction == EdgeDirection::Left;
        Some(if go_left ^ handle.is_reverse() {
            &edges.predecessors
        } else {
            &edges.successors
        })
    }
}

fn dedup_in_order(handles: &mut Vec<Handle>) {
    let mut seen = rustc_hash::FxHashSet::default();
    handles.retain(|h| seen.insert(*h));
}

impl HandleGraph for MemoryGraph {
    fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn min_node_id(&self) -> NodeId {
        self.nodes.keys().next().copied().unwrap_or(0)
    }

    fn max_node_id(&self) -> NodeId {
        self.nodes.keys().next_back().copied().unwrap_or(0)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn follow_edges(
        &self,
        handle: Handle,
        direction: EdgeDirection,
        iteratee: &mut dyn FnMut(Handle) -> bool,
    ) -> bool {
        let Some(edges) = self.edges_of(handle, direction) else {
            return true;
        };
        let flip = handle.is_reverse();
        for &next in edges {
            let actual = if flip { next.flip() } else { next };
            if !iteratee(actual) {
                return false;
            }
        }
        true
    }

    fn degree(&self, handle: Handle, direction: EdgeDirection) -> usize {
        self.edges_of(handle, direction).map_or(0, |edges| edges.len())
    }

    fn for_each_handle(&self, iteratee: &mut dyn FnMut(Handle) -> bool) -> bool {
        for &id in self.nodes.keys() {
            if !iteratee(Handle::forward(id)) {
                return false;
            }
        }
        true
    }
}

impl PathHandleGraph for MemoryGraph {
    fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn for_each_path(&self, iteratee: &mut dyn FnMut(PathHandle) -> bool) -> bool {
        for id in 0..self.paths.len() {
            if !iteratee(PathHandle(id)) {
                return false;
            }
        }
        true
    }

    fn path_metadata(&self, path: PathHandle) -> Option<PathMetadata> {
        self.paths.get(path.0).map(|stored| stored.metadata.clone())
    }

    fn first_step(&self, path: PathHandle) -> Option<Handle> {
        self.paths.get(path.0)?.steps.first().copied()
    }

    fn for_each_step(&self, path: PathHandle, iteratee: &mut dyn FnMut(Handle) -> bool) -> bool {
        let Some(stored) = self.paths.get(path.0) else {
            return true;
        };
        for &handle in &stored.steps {
            if !iteratee(handle) {
                return false;
            }
        }
        true
    }
}
