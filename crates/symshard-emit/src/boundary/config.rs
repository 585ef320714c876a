//! Boundary-list emitter configuration.
//!
//! Flattens the top-level options and the `boundaries` section of
//! [`AppConfig`] into the values the emitter needs.

use std::path::PathBuf;

use symshard_core::{config::AppConfig, types::TrailingBoundary};

/// Parsed boundary-list configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Symbol list to read.
    pub input: PathBuf,

    /// Whether a step at the list length is rendered or dropped.
    pub trailing: TrailingBoundary,

    /// Text rendered between the quotes of a missing boundary.
    pub placeholder: String,
}

impl BoundaryConfig {
    pub fn from_app(cfg: &AppConfig) -> Self {
        Self {
            input: cfg.boundaries.effective_input().to_path_buf(),
            trailing: cfg.effective_trailing_boundary(),
            placeholder: cfg.effective_missing_placeholder().to_string(),
        }
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self::from_app(&AppConfig::default())
    }
}
