//! # symshard-core
//!
//! Core crate for symshard, providing:
//!
//! - **Types** (`types`) — symbol list loading, output modes, trailing policy
//! - **Partitioning** (`partition`) — fixed-step walk over the sorted list
//! - **Configuration** (`config`) — JSON config deserialization with defaults
//! - **Error types** (`error`) — domain-specific `ShardError` via thiserror
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod partition;
pub mod types;

// Re-export types at crate root for convenience.
pub use error::ShardError;
pub use partition::{Partition, PartitionPlan};
pub use types::*;
