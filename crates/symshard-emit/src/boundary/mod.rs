//! Boundary-list emitter.
//!
//! Renders the boundary symbol of every walk step as a one-line literal array:
//! `['AAPL','GOOG','MSFT',]`. Every element, including the last, is followed
//! by a comma, and no newline is written after the closing bracket.
//!
//! A step that lands on the list length has no boundary symbol. Under
//! [`TrailingBoundary::Literal`] it renders as the configured placeholder
//! between quotes (empty by default, giving `''`) and logs a warning; under
//! [`TrailingBoundary::Skip`] it is left out.

pub mod config;

use std::path::Path;

use symshard_core::{partition::PartitionPlan, types::TrailingBoundary};
use tracing::warn;

use crate::Emitter;

pub use config::BoundaryConfig;

pub struct BoundaryEmitter {
    config: BoundaryConfig,
}

impl BoundaryEmitter {
    pub fn new(config: BoundaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }
}

impl Emitter for BoundaryEmitter {
    fn name(&self) -> &str {
        "boundaries"
    }

    fn input_path(&self) -> &Path {
        &self.config.input
    }

    fn render(&self, plan: &PartitionPlan) -> String {
        let mut out = String::from("[");
        for (step, boundary) in plan.boundaries(self.config.trailing).enumerate() {
            let text = match boundary {
                Some(sym) => sym,
                None => {
                    warn!(
                        step,
                        start = step * plan.step(),
                        len = plan.len(),
                        placeholder = %self.config.placeholder,
                        "undefined boundary: walk step lands on list length"
                    );
                    self.config.placeholder.as_str()
                }
            };
            out.push('\'');
            out.push_str(text);
            out.push_str("',");
        }
        out.push(']');
        out
    }
}
