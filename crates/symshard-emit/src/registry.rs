//! Emitter registry — factory for creating an emitter from config.

use symshard_core::{config::AppConfig, types::OutputMode};

use crate::{
    Emitter,
    boundary::{BoundaryConfig, BoundaryEmitter},
    pipeline::RunOptions,
    sql::{SqlEmitter, SqlShardConfig},
};

/// Create an `Emitter` for `mode`, configured from `config`.
pub fn create_emitter(mode: OutputMode, config: &AppConfig) -> Box<dyn Emitter> {
    match mode {
        OutputMode::Boundaries => Box::new(BoundaryEmitter::new(BoundaryConfig::from_app(config))),
        OutputMode::Sql => Box::new(SqlEmitter::new(SqlShardConfig::from_app(config))),
    }
}

/// Mode-independent run settings from `config`.
pub fn run_options(config: &AppConfig) -> RunOptions {
    RunOptions {
        partition_count: config.effective_partition_count(),
        load: config.load_options(),
    }
}
