//! Path metadata of the merged index
//!
//! Paths are recorded per job while they are routed and laid out job-major
//! when the builder finishes. The merged index stores the paths of job `j`
//! after those of jobs `0..j`, so path `i` of the metadata is the path stored
//! as sequences `2i` and `2i + 1`.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::shared::models::PathMetadata;
use crate::shared::ports::MetadataRecorder;

/// Sample name given to generic paths
pub use gbwt::REF_SAMPLE;

/// Contig name for paths without a locus
pub const UNKNOWN_CONTIG: &str = "unknown";

/// Structured name of a stored path, as ids into the sample and contig lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathName {
    pub sample: usize,
    pub contig: usize,
    pub phase: usize,
    pub fragment: usize,
}

/// Names of the paths stored in an index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    samples: Vec<String>,
    contigs: Vec<String>,
    haplotypes: usize,
    paths: Vec<PathName>,
    paths_per_job: Vec<usize>,
}

impl Metadata {
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn contigs(&self) -> &[String] {
        &self.contigs
    }

    /// Number of distinct `(sample, phase)` pairs
    pub fn haplotypes(&self) -> usize {
        self.haplotypes
    }

    pub fn paths(&self) -> &[PathName] {
        &self.paths
    }

    pub fn path(&self, id: usize) -> Option<&PathName> {
        self.paths.get(id)
    }

    /// Number of paths routed to each job
    pub fn paths_per_job(&self) -> &[usize] {
        &self.paths_per_job
    }

    pub fn sample_id(&self, name: &str) -> Option<usize> {
        self.samples.iter().position(|sample| sample == name)
    }

    pub fn contig_id(&self, name: &str) -> Option<usize> {
        self.contigs.iter().position(|contig| contig == name)
    }

    /// Path id of the named path
    pub fn find_path(
        &self,
        sample: &str,
        contig: &str,
        phase: usize,
        fragment: usize,
    ) -> Option<usize> {
        let target = PathName {
            sample: self.sample_id(sample)?,
            contig: self.contig_id(contig)?,
            phase,
            fragment,
        };
        self.paths.iter().position(|name| *name == target)
    }

    /// `sample#phase#contig#fragment`
    pub fn full_name(&self, id: usize) -> Option<String> {
        let name = self.path(id)?;
        Some(format!(
            "{}#{}#{}#{}",
            self.samples.get(name.sample)?,
            name.phase,
            self.contigs.get(name.contig)?,
            name.fragment
        ))
    }
}

/// Collects path names while paths are assigned to jobs
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    sample_ids: FxHashMap<String, usize>,
    samples: Vec<String>,
    contig_ids: FxHashMap<String, usize>,
    contigs: Vec<String>,
    haplotypes: FxHashSet<(usize, usize)>,
    per_job: Vec<Vec<PathName>>,
}

fn intern(ids: &mut FxHashMap<String, usize>, names: &mut Vec<String>, name: &str) -> usize {
    if let Some(&id) = ids.get(name) {
        return id;
    }
    let id = names.len();
    names.push(name.to_string());
    ids.insert(name.to_string(), id);
    id
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for `jobs` jobs. Every job gets an entry in
    /// `paths_per_job`, including jobs that receive no paths.
    pub fn with_jobs(jobs: usize) -> Self {
        Self {
            per_job: vec![Vec::new(); jobs],
            ..Self::default()
        }
    }

    /// Number of paths recorded so far
    pub fn len(&self) -> usize {
        self.per_job.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lay out the paths job-major
    pub fn finish(self) -> Metadata {
        let paths_per_job: Vec<usize> = self.per_job.iter().map(Vec::len).collect();
        let paths: Vec<PathName> = self.per_job.into_iter().flatten().collect();

        let distinct: FxHashSet<&PathName> = paths.iter().collect();
        if distinct.len() != paths.len() {
            warn!(
                duplicates = paths.len() - distinct.len(),
                "metadata contains duplicate path names"
            );
        }
        debug!(
            paths = paths.len(),
            samples = self.samples.len(),
            contigs = self.contigs.len(),
            "finished path metadata"
        );

        Metadata {
            samples: self.samples,
            contigs: self.contigs,
            haplotypes: self.haplotypes.len(),
            paths,
            paths_per_job,
        }
    }
}

impl MetadataRecorder for MetadataBuilder {
    fn add_path(&mut self, metadata: &PathMetadata, job: usize) {
        let sample = metadata.sample.as_deref().unwrap_or(REF_SAMPLE);
        let contig = metadata.locus.as_deref().unwrap_or(UNKNOWN_CONTIG);
        let phase = metadata.haplotype.unwrap_or(0);
        let fragment = metadata
            .subrange
            .map(|range| range.start)
            .or(metadata.phase_block)
            .unwrap_or(0);

        let sample = intern(&mut self.sample_ids, &mut self.samples, sample);
        let contig = intern(&mut self.contig_ids, &mut self.contigs, contig);
        self.haplotypes.insert((sample, phase));

        if self.per_job.len() <= job {
            self.per_job.resize_with(job + 1, Vec::new);
        }
        self.per_job[job].push(PathName {
            sample,
            contig,
            phase,
            fragment,
        });
    }
}
