//! # symshard-emit
//!
//! Output modes built on the shared partition plan.
//!
//! ## Architecture
//!
//! Each mode implements [`Emitter`]: it names its input file and renders a
//! [`PartitionPlan`] to text. The [`pipeline`] loads the input, builds the
//! plan, and writes the rendered text in one piece.
//!
//! - [`boundary`] — one-line literal list of boundary symbols
//! - [`sql`] — one `create table ... as select` statement per partition
//! - [`registry`] — mode → emitter factory
//! - [`sql_util`] — SQL quoting and identifier helpers

pub mod boundary;
pub mod pipeline;
pub mod registry;
pub mod sql;
pub mod sql_util;

#[cfg(test)]
mod test_log;

use std::path::Path;

use symshard_core::partition::PartitionPlan;

/// Trait implemented by every output mode.
pub trait Emitter {
    /// Human-readable mode name.
    fn name(&self) -> &str;
    /// Symbol list this mode reads.
    fn input_path(&self) -> &Path;
    /// Render the full output for `plan`.
    fn render(&self, plan: &PartitionPlan) -> String;
}
