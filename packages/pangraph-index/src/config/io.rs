//! Configuration file schema
//!
//! Every configuration file carries an explicit `version`. A file without it
//! is rejected instead of being read with guessed semantics.

use serde::{Deserialize, Serialize};

use super::partition_config::PartitionConfig;

/// Current schema version
pub const CONFIG_VERSION: u32 = 1;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Partitioning and construction settings
    #[serde(default)]
    pub partition: PartitionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_yaml_loading() {
        let temp_file = write_temp(
            r#"
version: 1
partition:
  approximate_num_jobs: 8
  parallel_jobs: 4
"#,
        );

        let config = PartitionConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.approximate_num_jobs, 8);
        assert_eq!(config.parallel_jobs, 4);
        assert_eq!(config.record_cache_bytes, 4096);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_yaml_missing_version() {
        let temp_file = write_temp(
            r#"
partition:
  parallel_jobs: 2
"#,
        );

        let result = PartitionConfig::from_yaml(temp_file.path());
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let temp_file = write_temp("version: 2\n");

        let result = PartitionConfig::from_yaml(temp_file.path());
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = PartitionConfig::from_yaml_str("version: 1\nthreads: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_out_of_range() {
        let result = PartitionConfig::from_yaml_str(
            "version: 1\npartition:\n  parallel_jobs: 100000\n",
        );
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = PartitionConfig::from_yaml("/nonexistent/pangraph.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
