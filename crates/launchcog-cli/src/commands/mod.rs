//! CLI command implementations

pub mod tools;
pub mod update;
