//! Construction pipeline orchestration

mod construction;

pub use construction::{
    ConstructionOutcome, ConstructionPipeline, ConstructionStats, JobStats,
};
