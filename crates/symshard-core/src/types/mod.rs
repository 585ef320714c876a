//! Core data types: symbols, output modes, and the trailing-boundary policy.

pub mod enums;
pub mod symbol;

pub use enums::*;
pub use symbol::*;
