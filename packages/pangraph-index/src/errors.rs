//! Error types for pangraph-index
//!
//! Provides unified error handling across the crate. Only structural
//! inconsistencies travel through these types: a component that is not a
//! DAG or a path that cannot be routed is reported through empty results and
//! warning counts instead.

use thiserror::Error;

use crate::adapters::GraphError;
use crate::config::ConfigError;

/// Main error type for pangraph-index operations
#[derive(Debug, Error)]
pub enum PangraphError {
    /// Input violates an invariant the algorithms rely on
    #[error("Structural inconsistency: {0}")]
    Structure(String),

    /// In-memory graph construction error
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A construction job failed; the whole run is aborted
    #[error("Construction job {job} failed: {reason}")]
    Job { job: usize, reason: String },

    /// Partial indexes could not be merged
    #[error("Merge error: {0}")]
    Merge(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Thread pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PangraphError {
    /// Create a structural inconsistency error
    pub fn structure(msg: impl Into<String>) -> Self {
        PangraphError::Structure(msg.into())
    }

    /// Create a merge error
    pub fn merge(msg: impl Into<String>) -> Self {
        PangraphError::Merge(msg.into())
    }

    /// Wrap an error raised inside a construction job
    pub fn job(job: usize, reason: impl ToString) -> Self {
        PangraphError::Job {
            job,
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for pangraph operations
pub type Result<T> = std::result::Result<T, PangraphError>;
