//! SQL shard emitter configuration.
//!
//! Extracts the `sql` section of [`AppConfig`]: input path, source dataset,
//! and table name root.

use std::path::PathBuf;

use symshard_core::config::AppConfig;

/// Parsed SQL shard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlShardConfig {
    /// Symbol list to read.
    pub input: PathBuf,

    /// Dataset referenced in every `from` clause.
    pub dataset_path: String,

    /// Root joined with the boundary symbol to name each table.
    pub table_prefix: String,
}

impl SqlShardConfig {
    pub fn from_app(cfg: &AppConfig) -> Self {
        Self {
            input: cfg.sql.effective_input().to_path_buf(),
            dataset_path: cfg.sql.effective_dataset_path().to_string(),
            table_prefix: cfg.sql.effective_table_prefix().to_string(),
        }
    }
}

impl Default for SqlShardConfig {
    fn default() -> Self {
        Self::from_app(&AppConfig::default())
    }
}
