//! Partitioning a graph into independent construction jobs
//!
//! - `jobs`: component bin packing and the node → component → job tables
//! - `paths`: routing paths to jobs and feeding them to index builders
//! - `chains`: routing top-level chains of a snarl decomposition
//! - `metadata`: path names of the merged index, in job-major order

mod chains;
mod jobs;
mod metadata;
mod paths;

pub use chains::{assign_chains, ChainPartition, TopLevelChain};
pub use jobs::{plan_construction_jobs, ConstructionJobs};
pub use metadata::{Metadata, MetadataBuilder, PathName, REF_SAMPLE, UNKNOWN_CONTIG};
pub use paths::{assign_paths, insert_paths};
