//! Typed error definitions for symshard.
//!
//! Provides [`ShardError`] for the failures a run can hit before any output is
//! written. All variants implement `std::error::Error` via `thiserror`, so they
//! integrate seamlessly with `anyhow::Result` in the emit and runner crates.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific errors for symshard.
#[derive(Debug, Error)]
pub enum ShardError {
    /// Input or config file absent, unreadable, or not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Partition count, policy text, or config file content is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ShardError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_access_names_the_path() {
        let err = ShardError::file_access(
            "symbols_only.tsv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("symbols_only.tsv"), "{msg}");
        assert!(msg.contains("No such file"), "{msg}");
    }

    #[test]
    fn configuration_message() {
        let err = ShardError::config("partition count exceeds available symbols");
        assert_eq!(err.to_string(), "configuration error: partition count exceeds available symbols");
    }
}
