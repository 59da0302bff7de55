//! Construction jobs
//!
//! Weakly connected components are independent for path index construction:
//! no path crosses from one to another. Jobs are contiguous runs of
//! components, packed greedily in discovery order so that each job has at
//! most `size_bound` nodes. A component larger than the bound gets a job of
//! its own.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::features::components::{weakly_connected_components, Component};
use crate::shared::models::{NodeId, PathHandle, PathSense};
use crate::shared::ports::{HandleGraph, PathHandleGraph};

/// Partition of the graph into construction jobs
///
/// Every node of the graph belongs to exactly one component, and every
/// component to exactly one job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructionJobs {
    nodes_per_job: Vec<usize>,
    weakly_connected_components: Vec<Component>,
    node_to_component: FxHashMap<NodeId, usize>,
    component_to_job: Vec<usize>,
}

impl ConstructionJobs {
    /// Number of jobs
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes_per_job.len()
    }

    /// Number of weakly connected components
    #[inline]
    pub fn components(&self) -> usize {
        self.weakly_connected_components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes_per_job.is_empty()
    }

    /// Total node count of each job
    pub fn nodes_per_job(&self) -> &[usize] {
        &self.nodes_per_job
    }

    /// Components in discovery order
    pub fn weakly_connected_components(&self) -> &[Component] {
        &self.weakly_connected_components
    }

    /// Job of the component with the given index
    #[inline]
    pub fn job_for_component(&self, component: usize) -> Option<usize> {
        self.component_to_job.get(component).copied()
    }

    /// Component of the node, or `None` if the node was not in the graph
    #[inline]
    pub fn component(&self, node: NodeId) -> Option<usize> {
        self.node_to_component.get(&node).copied()
    }

    /// Job of the node, or `None` if the node was not in the graph
    #[inline]
    pub fn job(&self, node: NodeId) -> Option<usize> {
        self.component(node)
            .and_then(|component| self.job_for_component(component))
    }

    /// Component indexes of each job
    pub fn components_per_job(&self) -> Vec<Vec<usize>> {
        let mut result = vec![Vec::new(); self.size()];
        for (component, &job) in self.component_to_job.iter().enumerate() {
            if let Some(list) = result.get_mut(job) {
                list.push(component);
            }
        }
        result
    }

    /// Contig name for every component
    ///
    /// A component is named after the locus of the first reference path
    /// starting in it, then the first generic path. Components without such
    /// a path are named `component_{i}`.
    pub fn contig_names<G>(
        &self,
        graph: &G,
        filter: Option<&dyn Fn(PathHandle) -> bool>,
    ) -> Vec<String>
    where
        G: PathHandleGraph + ?Sized,
    {
        let mut result: Vec<Option<String>> = vec![None; self.components()];

        for sense in [PathSense::Reference, PathSense::Generic] {
            graph.for_each_path_of_sense(sense, &mut |path| {
                if filter.is_some_and(|accept| !accept(path)) {
                    return true;
                }
                let Some(first) = graph.first_step(path) else {
                    return true;
                };
                let Some(slot) = self
                    .component(first.id())
                    .and_then(|component| result.get_mut(component))
                else {
                    return true;
                };
                if slot.is_none() {
                    *slot = graph.path_metadata(path).and_then(|metadata| metadata.locus);
                }
                true
            });
        }

        result
            .into_iter()
            .enumerate()
            .map(|(i, name)| name.unwrap_or_else(|| format!("component_{}", i)))
            .collect()
    }

    /// Release the tables
    pub fn clear(&mut self) {
        self.nodes_per_job = Vec::new();
        self.weakly_connected_components = Vec::new();
        self.node_to_component = FxHashMap::default();
        self.component_to_job = Vec::new();
    }
}

/// Partition the graph into construction jobs of at most `size_bound` nodes
///
/// Components are packed in the order [`weakly_connected_components`]
/// reports them. A bound of 0 is accepted and puts every component in its
/// own job.
pub fn plan_construction_jobs<G>(graph: &G, size_bound: usize) -> ConstructionJobs
where
    G: HandleGraph + ?Sized,
{
    let components = weakly_connected_components(graph);

    let mut nodes_per_job: Vec<usize> = Vec::new();
    let mut node_to_component = FxHashMap::default();
    node_to_component.reserve(graph.node_count());
    let mut component_to_job = Vec::with_capacity(components.len());

    for (i, component) in components.iter().enumerate() {
        match nodes_per_job.last_mut() {
            Some(nodes) if *nodes + component.len() <= size_bound => *nodes += component.len(),
            _ => nodes_per_job.push(component.len()),
        }
        for &node in component {
            node_to_component.insert(node, i);
        }
        component_to_job.push(nodes_per_job.len() - 1);
    }

    let oversized = components.iter().filter(|c| c.len() > size_bound).count();
    if oversized > 0 {
        debug!(
            oversized,
            size_bound, "components larger than the bound got jobs of their own"
        );
    }
    info!(
        nodes = graph.node_count(),
        components = components.len(),
        jobs = nodes_per_job.len(),
        size_bound,
        "planned construction jobs"
    );

    ConstructionJobs {
        nodes_per_job,
        weakly_connected_components: components,
        node_to_component,
        component_to_job,
    }
}
