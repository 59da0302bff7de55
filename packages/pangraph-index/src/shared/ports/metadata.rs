//! Build metadata sink

use crate::shared::models::PathMetadata;

/// Receives the identity of every path routed to a construction job
pub trait MetadataRecorder {
    fn add_path(&mut self, metadata: &PathMetadata, job: usize);
}
