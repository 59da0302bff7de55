//! Configuration system
//!
//! A single [`PartitionConfig`] controls how a graph is split into
//! construction jobs, how many jobs run at once, and which records the
//! record cache decompresses. It can be built in code or loaded from a
//! versioned YAML file:
//!
//! ```yaml
//! version: 1
//! partition:
//!   approximate_num_jobs: 32
//!   parallel_jobs: 0        # all CPUs
//!   record_cache_bytes: 4096
//! ```

pub mod error;
pub mod io;
pub mod partition_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, CONFIG_VERSION};
pub use partition_config::PartitionConfig;
pub use validation::Validatable;
