//! Graph backends
//!
//! The algorithms only see the capability traits in `shared::ports`; this
//! module holds the in-memory backend used for small graphs, tests and
//! benchmarks.

mod memory_graph;

pub use memory_graph::{GraphError, MemoryGraph};
