//! Partitioned parallel index construction
//!
//! ```text
//! graph ─▶ plan jobs ─▶ assign paths ──▶ job 0: insert ─▶ finish ─┐
//!                          │         ├─▶ job 1: insert ─▶ finish ─┼─▶ merge
//!                          ▼         └─▶ ...                      ┘
//!                       metadata
//! ```
//!
//! Jobs share nothing mutable: each owns its builder and its statistics.
//! The merge runs after every job has finished, and a single failed job
//! fails the whole run.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{PartitionConfig, Validatable};
use crate::errors::{PangraphError, Result};
use crate::features::partition::{
    assign_paths, insert_paths, plan_construction_jobs, ConstructionJobs, Metadata,
    MetadataBuilder,
};
use crate::shared::models::PathHandle;
use crate::shared::ports::{IndexBuilder, IndexMerge, MetadataRecorder, PathHandleGraph};

type PathFilter = Box<dyn Fn(PathHandle) -> bool + Send + Sync>;

/// Statistics of one construction job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStats {
    pub job: usize,
    pub nodes: usize,
    pub paths: usize,
    pub symbols: usize,
    pub elapsed: Duration,
}

/// Statistics of a construction run
#[derive(Debug, Clone, Default)]
pub struct ConstructionStats {
    /// Per-job statistics in job order
    pub jobs: Vec<JobStats>,
    pub planning: Duration,
    pub building: Duration,
    pub merging: Duration,
}

impl ConstructionStats {
    pub fn total_paths(&self) -> usize {
        self.jobs.iter().map(|job| job.paths).sum()
    }

    pub fn total_symbols(&self) -> usize {
        self.jobs.iter().map(|job| job.symbols).sum()
    }

    pub fn total_duration(&self) -> Duration {
        self.planning + self.building + self.merging
    }
}

/// Result of a construction run
#[derive(Debug)]
pub struct ConstructionOutcome<I> {
    /// Merged index. Path `i` of `metadata` is sequences `2i` and `2i + 1`.
    pub index: I,
    pub metadata: Metadata,
    pub jobs: ConstructionJobs,
    pub stats: ConstructionStats,
}

/// Builds a path index job by job on a dedicated thread pool
pub struct ConstructionPipeline {
    config: PartitionConfig,
    path_filter: Option<PathFilter>,
}

impl ConstructionPipeline {
    /// Create a pipeline with a validated configuration
    pub fn new(config: PartitionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            path_filter: None,
        })
    }

    /// Builder: Only index the paths accepted by `filter`
    pub fn with_path_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(PathHandle) -> bool + Send + Sync + 'static,
    {
        self.path_filter = Some(Box::new(filter));
        self
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Build the index of the generic and reference paths of `graph`
    ///
    /// `factory` creates the builder of each job from its job id.
    pub fn run<G, B, F>(&self, graph: &G, factory: F) -> Result<ConstructionOutcome<B::Index>>
    where
        G: PathHandleGraph + Sync + ?Sized,
        B: IndexBuilder,
        B::Index: IndexMerge + Send,
        F: Fn(usize) -> B + Sync,
    {
        let mut stats = ConstructionStats::default();

        // 1. Plan jobs and route paths
        let start = Instant::now();
        let size_bound = self.config.size_bound(graph.node_count());
        let jobs = plan_construction_jobs(graph, size_bound);
        let mut metadata = MetadataBuilder::with_jobs(jobs.size());
        let filter = self
            .path_filter
            .as_deref()
            .map(|filter| filter as &dyn Fn(PathHandle) -> bool);
        let assigned = assign_paths(
            graph,
            &jobs,
            Some(&mut metadata as &mut dyn MetadataRecorder),
            filter,
        );
        stats.planning = start.elapsed();

        // 2. Build partial indexes in parallel
        let start = Instant::now();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads())
            .thread_name(|i| format!("pangraph-job-{}", i))
            .build()?;
        let show_progress = self.config.show_progress;
        let built: Vec<(B::Index, JobStats)> = pool.install(|| {
            assigned
                .par_iter()
                .enumerate()
                .map(|(job, paths)| {
                    let job_start = Instant::now();
                    let mut builder = factory(job);
                    let symbols = insert_paths(graph, paths, &mut builder, job)
                        .map_err(|e| PangraphError::job(job, e))?;
                    let index = builder.finish().map_err(|e| PangraphError::job(job, e))?;
                    let job_stats = JobStats {
                        job,
                        nodes: jobs.nodes_per_job()[job],
                        paths: paths.len(),
                        symbols,
                        elapsed: job_start.elapsed(),
                    };
                    if show_progress {
                        info!(job, paths = job_stats.paths, elapsed = ?job_stats.elapsed, "finished job");
                    } else {
                        debug!(job, paths = job_stats.paths, elapsed = ?job_stats.elapsed, "finished job");
                    }
                    Ok((index, job_stats))
                })
                .collect::<Result<Vec<_>>>()
        })?;
        stats.building = start.elapsed();

        // 3. Merge after the barrier
        let start = Instant::now();
        let (parts, job_stats): (Vec<B::Index>, Vec<JobStats>) = built.into_iter().unzip();
        stats.jobs = job_stats;
        let index = <B::Index as IndexMerge>::merge(parts)?;
        stats.merging = start.elapsed();

        info!(
            jobs = jobs.size(),
            threads = self.config.threads(),
            paths = stats.total_paths(),
            symbols = stats.total_symbols(),
            elapsed = ?stats.total_duration(),
            "built path index"
        );

        Ok(ConstructionOutcome {
            index,
            metadata: metadata.finish(),
            jobs,
            stats,
        })
    }
}
