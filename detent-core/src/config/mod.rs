//! Configuration types
//!
//! Board configuration is fixed at build time (see `board.toml` in the
//! firmware crate) and validated into these types at start-up.

pub mod types;

pub use types::*;
