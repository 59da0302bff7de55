//! Test graph builders and strategies

use pangraph_index::{
    EdgeDirection, Handle, HandleGraph, MemoryGraph, NetHandle, NodeId, PathHandle,
    PathHandleGraph, PathMetadata, SnarlDecomposition, Symbol,
};
use proptest::prelude::*;

/// `(from, from_reverse, to, to_reverse)`
pub type OrientedEdge = (NodeId, bool, NodeId, bool);

/// Random walk: start node index, start orientation, successor choices
pub type Walk = (usize, bool, Vec<usize>);

fn oriented(id: NodeId, is_reverse: bool) -> Handle {
    if is_reverse {
        Handle::reverse(id)
    } else {
        Handle::forward(id)
    }
}

/// Graph over the given nodes with oriented edges between them
pub fn graph_with_edges(
    nodes: impl IntoIterator<Item = NodeId>,
    edges: &[OrientedEdge],
) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    for node in nodes {
        graph.create_node(node);
    }
    for &(from, from_reverse, to, to_reverse) in edges {
        graph
            .create_edge(oriented(from, from_reverse), oriented(to, to_reverse))
            .expect("edge endpoints exist");
    }
    graph
}

/// Graph over nodes `1..=n` with forward edges from smaller to larger ids
pub fn dag_with_edges(n: usize, edges: &[(NodeId, NodeId)]) -> MemoryGraph {
    let oriented: Vec<OrientedEdge> = edges
        .iter()
        .map(|&(from, to)| (from, false, to, false))
        .collect();
    graph_with_edges(1..=n as NodeId, &oriented)
}

/// Add random walks as paths, cycling through reference, generic and
/// haplotype senses
pub fn add_walks(graph: &mut MemoryGraph, walks: &[Walk]) -> Vec<PathHandle> {
    let nodes: Vec<NodeId> = {
        let mut nodes = Vec::new();
        graph.for_each_handle(&mut |handle| {
            nodes.push(handle.id());
            true
        });
        nodes
    };
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::new();
    for (i, (start, is_reverse, choices)) in walks.iter().enumerate() {
        let mut curr = oriented(nodes[start % nodes.len()], *is_reverse);
        let mut steps = vec![curr];
        for choice in choices {
            let next = graph.neighbors(curr, EdgeDirection::Right);
            if next.is_empty() {
                break;
            }
            curr = next[choice % next.len()];
            steps.push(curr);
        }

        let metadata = match i % 3 {
            0 => PathMetadata::reference("GRCh38", format!("chr{}", i)),
            1 => PathMetadata::generic(format!("path{}", i)),
            _ => PathMetadata::haplotype("HG002", format!("chr{}", i), 1, 0),
        };
        result.push(graph.add_path(metadata, steps).expect("walk uses existing nodes"));
    }
    result
}

/// Forward symbols of a path
pub fn path_symbols<G: PathHandleGraph + ?Sized>(graph: &G, path: PathHandle) -> Vec<Symbol> {
    graph
        .scan_path(path)
        .into_iter()
        .map(Handle::to_symbol)
        .collect()
}

/// Reverse-complement symbols of a path
pub fn reverse_symbols<G: PathHandleGraph + ?Sized>(graph: &G, path: PathHandle) -> Vec<Symbol> {
    graph
        .scan_path(path)
        .into_iter()
        .rev()
        .map(|handle| handle.flip().to_symbol())
        .collect()
}

/// Strategy: graph over `1..=n` nodes with random oriented edges
pub fn arb_graph(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = MemoryGraph> {
    (1..=max_nodes).prop_flat_map(move |n| {
        let node = 1..=n as NodeId;
        prop::collection::vec(
            (node.clone(), any::<bool>(), node, any::<bool>()),
            0..=max_edges,
        )
        .prop_map(move |edges| graph_with_edges(1..=n as NodeId, &edges))
    })
}

/// Strategy: forward DAG over `1..=n` nodes
pub fn arb_dag(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = MemoryGraph> {
    (2..=max_nodes).prop_flat_map(move |n| {
        let node = 1..=n as NodeId;
        prop::collection::vec((node.clone(), node), 0..=max_edges).prop_map(move |pairs| {
            let edges: Vec<(NodeId, NodeId)> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect();
            dag_with_edges(n, &edges)
        })
    })
}

/// Strategy: random graph with random-walk paths
pub fn arb_graph_with_paths(
    max_nodes: usize,
    max_edges: usize,
    max_paths: usize,
) -> impl Strategy<Value = MemoryGraph> {
    let walk = (any::<usize>(), any::<bool>(), prop::collection::vec(any::<usize>(), 0..8));
    (
        arb_graph(max_nodes, max_edges),
        prop::collection::vec(walk, 0..=max_paths),
    )
        .prop_map(|(mut graph, walks)| {
            add_walks(&mut graph, &walks);
            graph
        })
}

/// Decomposition whose top-level chains list their node children directly
///
/// Net handle 0 is the root. `None` children stand for snarls.
#[derive(Debug, Clone)]
pub struct ChainDecomposition {
    children: Vec<Vec<NetHandle>>,
    handles: Vec<Option<Handle>>,
}

impl ChainDecomposition {
    pub fn new(chains: &[Vec<Option<Handle>>]) -> Self {
        let mut children: Vec<Vec<NetHandle>> = vec![Vec::new()];
        let mut handles: Vec<Option<Handle>> = vec![None];
        for chain in chains {
            let chain_net = children.len();
            children.push(Vec::new());
            handles.push(None);
            children[0].push(NetHandle(chain_net));
            for &child in chain {
                let net = children.len();
                children.push(Vec::new());
                handles.push(child);
                children[chain_net].push(NetHandle(net));
            }
        }
        Self { children, handles }
    }

    /// One chain per component, over its forward node handles
    pub fn from_components(components: &[Vec<NodeId>]) -> Self {
        let chains: Vec<Vec<Option<Handle>>> = components
            .iter()
            .map(|component| component.iter().map(|&id| Some(Handle::forward(id))).collect())
            .collect();
        Self::new(&chains)
    }
}

impl SnarlDecomposition for ChainDecomposition {
    fn root(&self) -> NetHandle {
        NetHandle(0)
    }

    fn for_each_child(
        &self,
        parent: NetHandle,
        iteratee: &mut dyn FnMut(NetHandle) -> bool,
    ) -> bool {
        let Some(children) = self.children.get(parent.0) else {
            return true;
        };
        for &child in children {
            if !iteratee(child) {
                return false;
            }
        }
        true
    }

    fn is_node(&self, net: NetHandle) -> bool {
        matches!(self.handles.get(net.0), Some(Some(_)))
    }

    fn node_handle(&self, net: NetHandle) -> Handle {
        self.handles[net.0].expect("node child")
    }
}
