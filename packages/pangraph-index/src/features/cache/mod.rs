//! Caching for hot regions of a compressed index

mod record_cache;

pub use record_cache::{build_record_cache, PositionSamples, RecordCache};
