//! SQL shard statement generator.
//!
//! Emits one `create table ... as (select ...)` statement per partition that
//! starts inside the sorted list. Each statement copies the rows of the
//! partition's member symbols out of the source dataset into a table named
//! `<table_prefix>_<boundary>`, ordered by timestamp. Statements are written
//! one per line in ascending boundary order and are independent of each
//! other.
//!
//! The walk's out-of-range final step has no members and is never emitted.
//!
//! Duplicate input symbols are kept, so two partitions can start on the same
//! symbol and share a table name. Both statements are still emitted; the
//! collision is logged with both partition indices.

pub mod config;

use std::{
    collections::{HashMap, hash_map::Entry},
    path::Path,
};

use symshard_core::partition::{Partition, PartitionPlan};
use tracing::{debug, warn};

use crate::{
    Emitter,
    sql_util::{is_identifier_fragment, quoted_list, table_name},
};

pub use config::SqlShardConfig;

/// Column list shared by every statement.
const SELECT_COLUMNS: &str = "t.symbol.Symbol as symbol, t.`timestamp`, t.`open` as `open`,t.high as high, \
                              t.low as low, t.`close` as `close`, t.volume as volume";

/// One generated statement plus the values it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardStatement {
    /// Position of the source partition in the walk.
    pub partition: usize,
    pub table: String,
    pub members: Vec<String>,
    pub sql: String,
}

pub struct SqlEmitter {
    config: SqlShardConfig,
}

impl SqlEmitter {
    pub fn new(config: SqlShardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SqlShardConfig {
        &self.config
    }

    /// Build the statement for one in-range partition.
    ///
    /// Returns `None` for the out-of-range trailing step.
    pub fn statement(&self, part: &Partition<'_>) -> Option<ShardStatement> {
        let boundary = part.boundary?;
        if boundary.is_empty() {
            warn!(partition = part.index, "empty boundary symbol; table name is the bare prefix");
        } else if !is_identifier_fragment(boundary) {
            warn!(boundary, "boundary symbol is not a plain identifier; table name may need quoting");
        }

        let table = table_name(&self.config.table_prefix, boundary);
        let members: Vec<String> = part.members.to_vec();
        let sql = format!(
            "create table {table} as (select {SELECT_COLUMNS} from `{dataset}` t where t.symbol.Symbol in ( {list} ) \
             order by `timestamp` asc);",
            dataset = self.config.dataset_path,
            list = quoted_list(part.members.iter().map(String::as_str)),
        );
        debug!(table = %table, members = members.len(), "shard statement built");

        Some(ShardStatement {
            partition: part.index,
            table,
            members,
            sql,
        })
    }

    /// All statements for `plan`, in walk order.
    ///
    /// Logs a warning for every statement whose table name was already used
    /// by an earlier partition.
    pub fn statements<'a>(&'a self, plan: &'a PartitionPlan) -> impl Iterator<Item = ShardStatement> + 'a {
        let mut seen: HashMap<String, usize> = HashMap::new();
        plan.in_range_partitions().filter_map(move |part| {
            let stmt = self.statement(&part)?;
            match seen.entry(stmt.table.clone()) {
                Entry::Occupied(first) => warn!(
                    table = %stmt.table,
                    boundary = part.boundary.unwrap_or_default(),
                    first_partition = *first.get(),
                    partition = stmt.partition,
                    "duplicate table name: boundary symbol starts more than one partition"
                ),
                Entry::Vacant(slot) => {
                    slot.insert(stmt.partition);
                }
            }
            Some(stmt)
        })
    }
}

impl Emitter for SqlEmitter {
    fn name(&self) -> &str {
        "sql"
    }

    fn input_path(&self) -> &Path {
        &self.config.input
    }

    fn render(&self, plan: &PartitionPlan) -> String {
        let mut out = String::new();
        for stmt in self.statements(plan) {
            out.push_str(&stmt.sql);
            out.push('\n');
        }
        out
    }
}
