//! CLI command implementations.

pub mod common;
pub mod run;
pub mod state;
pub mod tutorials;
pub mod version;
