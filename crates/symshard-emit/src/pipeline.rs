//! Load → plan → render → write.
//!
//! ```text
//! input file ──► SymbolList::load ──► PartitionPlan::new ──► Emitter::render ──► out
//! ```
//!
//! Output is rendered in full before anything is written, so a run that fails
//! while loading or planning leaves `out` untouched.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use symshard_core::{
    partition::PartitionPlan,
    types::{LoadOptions, SymbolList},
};
use tracing::info;

use crate::Emitter;

/// Settings shared by every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub partition_count: usize,
    pub load: LoadOptions,
}

/// Read `input` and build the partition plan for it.
pub fn load_plan(input: &Path, opts: &RunOptions) -> Result<PartitionPlan> {
    let symbols = SymbolList::load(input, &opts.load)?;
    info!(input = %input.display(), symbols = symbols.len(), "symbols loaded");

    let plan = PartitionPlan::new(symbols, opts.partition_count)
        .with_context(|| format!("cannot partition {}", input.display()))?;
    info!(
        step = plan.step(),
        partitions = plan.partitions().count(),
        trailing_step = plan.has_trailing_step(),
        "partition plan ready"
    );
    Ok(plan)
}

/// Run `emitter` against its configured input and write the result to `out`.
///
/// Returns the number of bytes written.
pub fn run(emitter: &dyn Emitter, opts: &RunOptions, out: &mut dyn Write) -> Result<usize> {
    let plan = load_plan(emitter.input_path(), opts)?;
    let text = emitter.render(&plan);

    out.write_all(text.as_bytes()).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    info!(emitter = emitter.name(), bytes = text.len(), "output written");
    Ok(text.len())
}
