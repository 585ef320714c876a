//! Enumerations shared by the config layer, the emitters and the CLI.
//!
//! Both enums deserialize from lowercase JSON strings and parse from the same
//! text via `FromStr`, so a value reads identically in a config file and on
//! the command line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShardError;

// ---------------------------------------------------------------------------
// Output modes
// ---------------------------------------------------------------------------

/// What a run produces from the partition plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One-line literal list of boundary symbols.
    Boundaries,
    /// One `create table ... as select` statement per partition.
    Sql,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boundaries => write!(f, "boundaries"),
            Self::Sql => write!(f, "sql"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = ShardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boundaries" => Ok(Self::Boundaries),
            "sql" => Ok(Self::Sql),
            other => Err(ShardError::config(format!(
                "unknown output mode '{other}' (expected boundaries or sql)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Trailing boundary policy
// ---------------------------------------------------------------------------

/// How the boundary list treats a walk step that lands exactly on the list
/// length, where no boundary symbol exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBoundary {
    /// Keep the step and render the missing-value placeholder.
    #[default]
    Literal,
    /// Drop the step.
    Skip,
}

impl std::fmt::Display for TrailingBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for TrailingBoundary {
    type Err = ShardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "skip" => Ok(Self::Skip),
            other => Err(ShardError::config(format!(
                "unknown trailing boundary policy '{other}' (expected literal or skip)"
            ))),
        }
    }
}
