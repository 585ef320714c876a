//! # symshard
//!
//! Splits a sorted ticker list into roughly equal partitions and prints either
//! the partition boundaries or one SQL shard statement per partition.
//!
//! Generated text goes to stdout; logs go to stderr (and optionally a daily
//! log file).
//!
//! # Usage
//!
//! ```bash
//! symshard boundaries --partitions 12
//! symshard sql --config symshard.json --log-level debug > shards.sql
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use symshard_core::{
    config::{AppConfig, load_config},
    types::{OutputMode, TrailingBoundary},
};
use symshard_emit::{pipeline, registry};
use tracing::info;

/// Partition a symbol list and emit boundaries or SQL shard statements.
#[derive(Parser)]
#[command(name = "symshard", about = "Partition a symbol list and emit boundaries or SQL shard statements")]
struct Cli {
    /// Output mode: `boundaries` or `sql`.
    mode: OutputMode,

    /// Configuration file path (JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Symbol list to read (overrides the mode's configured input).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of partitions (default: 12).
    #[arg(short, long)]
    partitions: Option<usize>,

    /// Trailing boundary policy for the boundary list: `literal` or `skip`.
    #[arg(long)]
    trailing: Option<TrailingBoundary>,

    /// Text rendered for a missing boundary under the `literal` policy.
    #[arg(long)]
    placeholder: Option<String>,

    /// Source dataset referenced by generated SQL.
    #[arg(long)]
    dataset_path: Option<String>,

    /// Root of generated SQL table names.
    #[arg(long)]
    table_prefix: Option<String>,

    /// Drop blank input lines instead of keeping them as empty symbols.
    #[arg(long, default_value_t = false)]
    skip_blank_lines: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,
}

impl Cli {
    /// Layer command-line overrides on top of the file config.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(n) = self.partitions {
            config.partition_count = Some(n);
        }
        if let Some(policy) = self.trailing {
            config.trailing_boundary = Some(policy);
        }
        if let Some(text) = &self.placeholder {
            config.missing_placeholder = Some(text.clone());
        }
        if self.skip_blank_lines {
            config.skip_blank_lines = Some(true);
        }
        if let Some(input) = &self.input {
            match self.mode {
                OutputMode::Boundaries => config.boundaries.input = Some(input.clone()),
                OutputMode::Sql => config.sql.input = Some(input.clone()),
            }
        }
        if let Some(path) = &self.dataset_path {
            config.sql.dataset_path = Some(path.clone());
        }
        if let Some(prefix) = &self.table_prefix {
            config.sql.table_prefix = Some(prefix.clone());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 2. Initialize logging
    let log_dir = cli.log_dir.clone().or_else(|| config.log_path());
    symshard_core::logging::init_logging(&cli.log_level, log_dir.as_deref(), &config.module_name());

    // 3. Build the emitter and run it against stdout
    let emitter = registry::create_emitter(cli.mode, &config);
    let opts = registry::run_options(&config);
    info!(
        mode = %cli.mode,
        input = %emitter.input_path().display(),
        partitions = opts.partition_count,
        "symshard starting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pipeline::run(emitter.as_ref(), &opts, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_win_over_file() {
        let cli = Cli::parse_from([
            "symshard",
            "sql",
            "--input",
            "in.tsv",
            "--partitions",
            "4",
            "--table-prefix",
            "s20160104",
            "--trailing",
            "skip",
        ]);
        let mut config = symshard_core::config::parse_config(
            r#"{ "partition_count": 12, "sql": { "input": "file.tsv", "dataset_path": "eoddata/x/" } }"#,
        )
        .unwrap();
        cli.apply_overrides(&mut config);

        assert_eq!(config.effective_partition_count(), 4);
        assert_eq!(config.effective_trailing_boundary(), TrailingBoundary::Skip);
        assert_eq!(config.sql.effective_input(), Path::new("in.tsv"));
        assert_eq!(config.sql.effective_dataset_path(), "eoddata/x/");
        assert_eq!(config.sql.effective_table_prefix(), "s20160104");
        assert_eq!(config.boundaries.effective_input(), Path::new("symbols_only.tsv"));
    }

    #[test]
    fn input_override_targets_selected_mode() {
        let cli = Cli::parse_from(["symshard", "boundaries", "-i", "in.tsv"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.boundaries.effective_input(), Path::new("in.tsv"));
        assert_eq!(config.sql.effective_input(), Path::new("src/test/resources/symbols_only.tsv"));
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["symshard", "csv"]).is_err());
    }
}
