//! Feature modules
//!
//! - `components`: union-find and weakly connected components
//! - `ordering`: acyclicity/orientation validation, topological order
//! - `partition`: construction jobs, path and chain assignment, metadata
//! - `index`: run-length compressed path index (reference implementation)
//! - `cache`: decompressed record cache for hot regions of an index

pub mod cache;
pub mod components;
pub mod index;
pub mod ordering;
pub mod partition;
