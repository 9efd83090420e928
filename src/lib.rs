//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under stable module names
//! (`blockfall::{core, engine, input, term, types}`) and holds the pieces of
//! the terminal shell that are not tied to a single crate: run configuration
//! and log setup.

pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::RunConfig;
