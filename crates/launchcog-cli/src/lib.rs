//! launchcog CLI library.
//!
//! This crate provides the command implementations behind the `launchcog`
//! binary: file location, the per-file cog invocation wrapper, the parallel
//! task runner, console reporting, and the activation-hook extension point.

pub mod cogger;
pub mod commands;
pub mod console;
pub mod hooks;
pub mod locator;
pub mod runner;
pub mod table;
