//! Fixed-step partitioning of a sorted symbol list.
//!
//! A [`PartitionPlan`] sorts the list once and walks start indices
//! `0, step, 2*step, ...` up to and including the list length, where
//! `step = len / partition_count`. Each start index defines a [`Partition`]:
//! its boundary symbol is the symbol at the start index and its members are
//! the symbols in `[start, start + step)` that exist.
//!
//! Because the walk is inclusive of the length, a list whose length is a
//! multiple of the step produces one final partition that starts past the end:
//! it has no boundary symbol and no members. Callers decide what to do with it
//! through [`TrailingBoundary`] or [`PartitionPlan::in_range_partitions`].

use tracing::debug;

use crate::{
    error::ShardError,
    types::{Symbol, SymbolList, TrailingBoundary},
};

/// Partition count used when neither the CLI nor the config file sets one.
pub const DEFAULT_PARTITION_COUNT: usize = 12;

/// One step of the partition walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Position of this partition in the walk (0-based).
    pub index: usize,
    /// Start index into the sorted list.
    pub start: usize,
    /// Symbol at `start`, or `None` when `start == len`.
    pub boundary: Option<&'a str>,
    /// Symbols at `start..min(start + step, len)`.
    pub members: &'a [Symbol],
}

impl Partition<'_> {
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        self.boundary.is_none()
    }
}

/// A sorted symbol list plus the step size derived from a partition count.
#[derive(Debug, Clone)]
pub struct PartitionPlan {
    symbols: SymbolList,
    partition_count: usize,
    step: usize,
}

impl PartitionPlan {
    /// Sort `symbols` and compute the step for `partition_count`.
    ///
    /// Fails with [`ShardError::Configuration`] when the count is zero or
    /// larger than the number of symbols, since the step would be zero and
    /// the walk would never advance.
    pub fn new(mut symbols: SymbolList, partition_count: usize) -> Result<Self, ShardError> {
        if partition_count == 0 {
            return Err(ShardError::config("partition count must be positive"));
        }
        if symbols.len() < partition_count {
            return Err(ShardError::config(format!(
                "partition count exceeds available symbols ({partition_count} partitions, {} symbols)",
                symbols.len()
            )));
        }

        symbols.sort();
        let step = symbols.len() / partition_count;
        debug!(symbols = symbols.len(), partition_count, step, "partition plan built");

        Ok(Self {
            symbols,
            partition_count,
            step,
        })
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline]
    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The sorted list.
    pub fn symbols(&self) -> &SymbolList {
        &self.symbols
    }

    /// Start indices `0, step, 2*step, ...` while `<= len`.
    pub fn start_indices(&self) -> impl Iterator<Item = usize> {
        // step >= 1 is guaranteed by `new`.
        (0..=self.symbols.len()).step_by(self.step)
    }

    /// Every step of the walk, including a trailing out-of-range one.
    pub fn partitions(&self) -> impl Iterator<Item = Partition<'_>> {
        let all = self.symbols.as_slice();
        let len = all.len();
        self.start_indices().enumerate().map(move |(index, start)| Partition {
            index,
            start,
            boundary: self.symbols.get(start),
            members: &all[start.min(len)..(start + self.step).min(len)],
        })
    }

    /// Partitions that start inside the list.
    pub fn in_range_partitions(&self) -> impl Iterator<Item = Partition<'_>> {
        self.partitions().filter(|p| !p.is_out_of_range())
    }

    /// Boundary symbols in walk order. Under [`TrailingBoundary::Literal`] the
    /// out-of-range step yields `None`; under [`TrailingBoundary::Skip`] it is
    /// omitted.
    pub fn boundaries(&self, policy: TrailingBoundary) -> impl Iterator<Item = Option<&str>> {
        self.partitions()
            .filter(move |p| policy == TrailingBoundary::Literal || !p.is_out_of_range())
            .map(|p| p.boundary)
    }

    /// Whether the walk ends with a step exactly at the list length.
    pub fn has_trailing_step(&self) -> bool {
        self.symbols.len() % self.step == 0
    }
}
