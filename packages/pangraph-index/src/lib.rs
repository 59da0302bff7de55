/*
 * pangraph-index - Partitioned construction and cached traversal of
 * haplotype path indexes over pangenome graphs
 *
 * Feature-First Architecture:
 * - shared/      : Handles, path metadata, and the capability traits (ports)
 * - features/    : components → ordering → partition → index → cache
 * - pipeline/    : Parallel per-job construction and merge
 * - adapters/    : In-memory graph backend
 * - config/      : Versioned YAML configuration
 *
 * Performance:
 * - Explicit-stack traversals (no recursion on million-node graphs)
 * - Rayon thread pool for independent construction jobs
 * - Read-only record cache shared across extraction threads
 */

#![allow(clippy::new_without_default)] // Builders expose explicit constructors
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and capability traits
pub mod shared;

/// Feature modules (components, ordering, partition, index, cache)
pub mod features;

/// Construction pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Graph backends
pub mod adapters;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use adapters::{GraphError, MemoryGraph};
pub use config::{ConfigError, PartitionConfig};
pub use errors::{PangraphError, Result};
pub use features::cache::{build_record_cache, PositionSamples, RecordCache};
pub use features::components::{weakly_connected_components, Component, DisjointSets};
pub use features::index::{RunLengthIndex, RunLengthIndexBuilder};
pub use features::ordering::{is_nice_and_acyclic, topological_order};
pub use features::partition::{
    assign_chains, assign_paths, insert_paths, plan_construction_jobs, ChainPartition,
    ConstructionJobs, Metadata, MetadataBuilder, PathName, TopLevelChain,
};
pub use pipeline::{ConstructionOutcome, ConstructionPipeline, ConstructionStats, JobStats};
pub use shared::models::{
    Handle, NodeId, Orientation, PathHandle, PathMetadata, PathSense, Pos, Symbol, ENDMARKER,
};
pub use shared::ports::{
    EdgeDirection, HandleGraph, IndexBuilder, IndexMerge, IndexQuery, MetadataRecorder,
    NetHandle, PathHandleGraph, SnarlDecomposition,
};
