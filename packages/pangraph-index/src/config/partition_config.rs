//! Partitioning and construction settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, CONFIG_VERSION};
use super::validation::{check_range, Validatable};

/// Settings for partitioned index construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartitionConfig {
    /// Target number of construction jobs (1..=1048576, 0 is read as 1).
    /// The node bound of a job is the node count divided by this.
    pub approximate_num_jobs: usize,

    /// Jobs built concurrently (0=all CPUs, 0..=1024)
    pub parallel_jobs: usize,

    /// Records longer than this many bytes are decompressed by the record
    /// cache (0..=1 GiB)
    pub record_cache_bytes: usize,

    /// Log per-job progress at info level instead of debug
    pub show_progress: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            approximate_num_jobs: 32,
            parallel_jobs: 1,
            record_cache_bytes: 4096,
            show_progress: false,
        }
    }
}

impl PartitionConfig {
    pub const MAX_JOBS: usize = 1 << 20;
    pub const MAX_PARALLEL_JOBS: usize = 1024;
    pub const MAX_RECORD_CACHE_BYTES: usize = 1 << 30;

    /// Builder: Set approximate job count
    pub fn with_approximate_num_jobs(mut self, jobs: usize) -> Self {
        self.approximate_num_jobs = jobs;
        self
    }

    /// Builder: Set concurrent job count (0 = all CPUs)
    pub fn with_parallel_jobs(mut self, jobs: usize) -> Self {
        self.parallel_jobs = jobs;
        self
    }

    /// Builder: Set record cache threshold
    pub fn with_record_cache_bytes(mut self, bytes: usize) -> Self {
        self.record_cache_bytes = bytes;
        self
    }

    /// Builder: Enable progress logging
    pub fn with_show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Node bound of a construction job for a graph with `node_count` nodes
    pub fn size_bound(&self, node_count: usize) -> usize {
        node_count / self.approximate_num_jobs.max(1)
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        match self.parallel_jobs {
            0 => num_cpus::get(),
            n => n,
        }
    }

    /// Load from a versioned YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse versioned YAML
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        // Version check
        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        file.partition.validate()?;
        Ok(file.partition)
    }

    /// Export as versioned YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(CONFIG_VERSION),
            partition: self.clone(),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

impl Validatable for PartitionConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "approximate_num_jobs",
            self.approximate_num_jobs,
            0,
            Self::MAX_JOBS,
            "Job count must be reasonable",
        )?;
        check_range(
            "parallel_jobs",
            self.parallel_jobs,
            0,
            Self::MAX_PARALLEL_JOBS,
            "Number of concurrent jobs must be reasonable (0=all CPUs)",
        )?;
        check_range(
            "record_cache_bytes",
            self.record_cache_bytes,
            0,
            Self::MAX_RECORD_CACHE_BYTES,
            "Records above 1 GiB are never cached",
        )?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "PartitionConfig"
    }
}
