//! Capability traits consumed by the algorithms
//!
//! Every algorithm in `features/` is generic over these traits, so the
//! in-memory backend used by tests and any production backend satisfy the
//! same contract. All capabilities are read-only from the algorithms' side.

pub mod graph;
pub mod index;
pub mod metadata;
pub mod paths;
pub mod snarls;

pub use graph::{EdgeDirection, HandleGraph};
pub use index::{IndexBuilder, IndexMerge, IndexQuery};
pub use metadata::MetadataRecorder;
pub use paths::PathHandleGraph;
pub use snarls::{NetHandle, SnarlDecomposition};
