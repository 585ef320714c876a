//! Configuration parsing for symshard.
//!
//! A run can be driven entirely by compiled-in defaults, but every literal the
//! generator depends on (input paths, dataset path, table prefix, partition
//! count) may be overridden from a single JSON file. Each mode has its own
//! section because the two modes read their input relative to different
//! working directory conventions.
//!
//! # Example config
//!
//! ```json
//! {
//!   "partition_count": 12,
//!   "trailing_boundary": "literal",
//!   "missing_placeholder": "",
//!   "skip_blank_lines": false,
//!   "boundaries": { "input": "symbols_only.tsv" },
//!   "sql": {
//!     "input": "src/test/resources/symbols_only.tsv",
//!     "dataset_path": "eoddata/2015-05-18/",
//!     "table_prefix": "s20150518"
//!   },
//!   "log": { "module_name": "symshard", "log_path": "/tmp/log" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::ShardError,
    partition::DEFAULT_PARTITION_COUNT,
    types::{LoadOptions, TrailingBoundary},
};

/// Default Mode A input, relative to the working directory.
pub const DEFAULT_BOUNDARIES_INPUT: &str = "symbols_only.tsv";

/// Default Mode B input, relative to a project root.
pub const DEFAULT_SQL_INPUT: &str = "src/test/resources/symbols_only.tsv";

/// Default source dataset referenced by generated statements.
pub const DEFAULT_DATASET_PATH: &str = "eoddata/2015-05-18/";

/// Default root for generated table names.
pub const DEFAULT_TABLE_PREFIX: &str = "s20150518";

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Number of partitions to split the sorted list into (default: 12).
    pub partition_count: Option<usize>,

    /// Treatment of a walk step that lands on the list length.
    pub trailing_boundary: Option<TrailingBoundary>,

    /// Text rendered in place of a missing boundary symbol (default: empty).
    pub missing_placeholder: Option<String>,

    /// Drop blank input lines instead of keeping them as empty symbols.
    pub skip_blank_lines: Option<bool>,

    /// Boundary-list mode settings.
    #[serde(default)]
    pub boundaries: BoundariesConfig,

    /// SQL shard mode settings.
    #[serde(default)]
    pub sql: SqlConfig,

    /// Logging metadata.
    pub log: Option<LogMeta>,
}

impl AppConfig {
    pub fn effective_partition_count(&self) -> usize {
        self.partition_count.unwrap_or(DEFAULT_PARTITION_COUNT)
    }

    pub fn effective_trailing_boundary(&self) -> TrailingBoundary {
        self.trailing_boundary.unwrap_or_default()
    }

    pub fn effective_missing_placeholder(&self) -> &str {
        self.missing_placeholder.as_deref().unwrap_or("")
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            skip_blank_lines: self.skip_blank_lines.unwrap_or(false),
        }
    }

    /// Returns the module name used as the log file prefix.
    pub fn module_name(&self) -> String {
        self.log.as_ref().and_then(|m| m.module_name.clone()).unwrap_or_else(|| "symshard".to_string())
    }

    /// Returns the log directory, if file logging is configured.
    pub fn log_path(&self) -> Option<String> {
        self.log.as_ref().and_then(|m| m.log_path.clone())
    }
}

/// Boundary-list mode section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundariesConfig {
    /// Symbol list path (default: `symbols_only.tsv`).
    pub input: Option<PathBuf>,
}

impl BoundariesConfig {
    pub fn effective_input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new(DEFAULT_BOUNDARIES_INPUT))
    }
}

/// SQL shard mode section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SqlConfig {
    /// Symbol list path (default: `src/test/resources/symbols_only.tsv`).
    pub input: Option<PathBuf>,

    /// Source dataset in the `from` clause (default: `eoddata/2015-05-18/`).
    pub dataset_path: Option<String>,

    /// Root of every generated table name (default: `s20150518`).
    pub table_prefix: Option<String>,
}

impl SqlConfig {
    pub fn effective_input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new(DEFAULT_SQL_INPUT))
    }

    pub fn effective_dataset_path(&self) -> &str {
        self.dataset_path.as_deref().unwrap_or(DEFAULT_DATASET_PATH)
    }

    pub fn effective_table_prefix(&self) -> &str {
        self.table_prefix.as_deref().unwrap_or(DEFAULT_TABLE_PREFIX)
    }
}

/// Logging metadata block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogMeta {
    pub module_name: Option<String>,
    pub log_path: Option<String>,
}

/// Load and parse a JSON config file.
pub fn load_config(path: &Path) -> Result<AppConfig, ShardError> {
    let content = std::fs::read_to_string(path).map_err(|e| ShardError::file_access(path, e))?;
    parse_config(&content).map_err(|e| ShardError::config(format!("{}: {e}", path.display())))
}

/// Parse config JSON from a string.
pub fn parse_config(content: &str) -> Result<AppConfig, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = parse_config("{}").unwrap();
        assert_eq!(cfg.effective_partition_count(), 12);
        assert_eq!(cfg.effective_trailing_boundary(), TrailingBoundary::Literal);
        assert_eq!(cfg.effective_missing_placeholder(), "");
        assert!(!cfg.load_options().skip_blank_lines);
        assert_eq!(cfg.boundaries.effective_input(), Path::new("symbols_only.tsv"));
        assert_eq!(cfg.sql.effective_input(), Path::new("src/test/resources/symbols_only.tsv"));
        assert_eq!(cfg.sql.effective_dataset_path(), "eoddata/2015-05-18/");
        assert_eq!(cfg.sql.effective_table_prefix(), "s20150518");
        assert_eq!(cfg.module_name(), "symshard");
        assert_eq!(cfg.log_path(), None);
    }

    #[test]
    fn full_config() {
        let cfg = parse_config(
            r#"{
                "partition_count": 4,
                "trailing_boundary": "skip",
                "missing_placeholder": "nil",
                "skip_blank_lines": true,
                "boundaries": { "input": "a.tsv" },
                "sql": { "input": "b.tsv", "dataset_path": "eoddata/2016-01-04/", "table_prefix": "s20160104" },
                "log": { "module_name": "shards", "log_path": "/tmp/log" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.effective_partition_count(), 4);
        assert_eq!(cfg.effective_trailing_boundary(), TrailingBoundary::Skip);
        assert_eq!(cfg.effective_missing_placeholder(), "nil");
        assert!(cfg.load_options().skip_blank_lines);
        assert_eq!(cfg.boundaries.effective_input(), Path::new("a.tsv"));
        assert_eq!(cfg.sql.effective_input(), Path::new("b.tsv"));
        assert_eq!(cfg.sql.effective_dataset_path(), "eoddata/2016-01-04/");
        assert_eq!(cfg.sql.effective_table_prefix(), "s20160104");
        assert_eq!(cfg.module_name(), "shards");
        assert_eq!(cfg.log_path().as_deref(), Some("/tmp/log"));
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(parse_config(r#"{ "cores": 12 }"#).is_err());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("symshard.json")).unwrap_err();
        assert!(matches!(err, ShardError::FileAccess { .. }));
    }

    #[test]
    fn load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"partition_count\": \"twelve\" }}").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ShardError::Configuration(_)), "{err:?}");
    }
}
