//! Routing top-level chains to construction jobs
//!
//! Each top-level chain of a snarl decomposition lies within one weakly
//! connected component. The first node child of the chain decides its job.

use tracing::{debug, warn};

use super::jobs::ConstructionJobs;
use crate::shared::models::Handle;
use crate::shared::ports::{HandleGraph, NetHandle, SnarlDecomposition};

/// A top-level chain routed to a job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLevelChain {
    pub chain: NetHandle,
    /// Handle of the first node in the chain
    pub handle: Handle,
    /// Ordinal of the chain among all top-level chains
    pub offset: usize,
}

/// Top-level chains per job, with the anomalies met while routing them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainPartition {
    pub chains: Vec<Vec<TopLevelChain>>,
    /// Chains without a node child, or whose node has no job
    pub unassigned: usize,
    /// Number of top-level chains in the decomposition
    pub discovered: usize,
    /// Number of weakly connected components in the jobs
    pub expected: usize,
}

impl ChainPartition {
    /// A decomposition should have one top-level chain per component
    pub fn has_count_mismatch(&self) -> bool {
        self.discovered != self.expected
    }

    pub fn assigned(&self) -> usize {
        self.chains.iter().map(Vec::len).sum()
    }
}

/// Assign every top-level chain to the job of its first node
pub fn assign_chains<S, G>(snarls: &S, graph: &G, jobs: &ConstructionJobs) -> ChainPartition
where
    S: SnarlDecomposition + ?Sized,
    G: HandleGraph + ?Sized,
{
    let mut chains: Vec<Vec<TopLevelChain>> = vec![Vec::new(); jobs.size()];
    let mut unassigned = 0usize;
    let mut offset = 0usize;

    snarls.for_each_child(snarls.root(), &mut |chain| {
        let mut assigned = false;
        snarls.for_each_child(chain, &mut |child| {
            if !snarls.is_node(child) {
                return true;
            }
            let handle = snarls.node_handle(child);
            let job = Some(handle.id())
                .filter(|&id| graph.has_node(id))
                .and_then(|id| jobs.job(id))
                .filter(|&job| job < chains.len());
            if let Some(job) = job {
                chains[job].push(TopLevelChain {
                    chain,
                    handle,
                    offset,
                });
                assigned = true;
            }
            false
        });
        if !assigned {
            unassigned += 1;
        }
        offset += 1;
        true
    });

    let partition = ChainPartition {
        chains,
        unassigned,
        discovered: offset,
        expected: jobs.components(),
    };
    if partition.has_count_mismatch() {
        warn!(
            chains = partition.discovered,
            components = partition.expected,
            "number of top-level chains differs from the number of components"
        );
    }
    if partition.unassigned > 0 {
        warn!(
            unassigned = partition.unassigned,
            "could not assign top-level chains to jobs"
        );
    }
    debug!(
        assigned = partition.assigned(),
        jobs = partition.chains.len(),
        "assigned top-level chains"
    );
    partition
}
