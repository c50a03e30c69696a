//! launchcog core library.
//!
//! This crate implements the marker-region substitution engine used to
//! regenerate `launch.json` debug configurations, along with the cog tools
//! that produce the generated content.
//!
//! # Overview
//!
//! A `launch.json` file opts into regeneration with a marker pair:
//!
//! ```text
//! // [[[cog import PopulateTests]]]
//! // [[[end]]]
//! ```
//!
//! Running the engine replaces the interior of the pair with the named
//! tool's rendered output and records a checksum on the closing marker so
//! that hand edits to generated content are detected on the next run.
//!
//! # Modules
//!
//! - [`error`]: Engine and render error types
//! - [`marker`]: Marker-pair scanning and directive parsing
//! - [`engine`]: Region regeneration, checksum guard, in-place rewrite
//! - [`tool`]: The [`CogTool`](tool::CogTool) trait and [`ToolRegistry`](tool::ToolRegistry)
//! - [`launch`]: Typed debug-configuration records and block rendering
//! - [`populate_tests`]: The built-in `PopulateTests` tool

pub mod engine;
pub mod error;
pub mod launch;
pub mod marker;
pub mod tool;

pub use engine::{Engine, EngineOutcome, EngineStatus};
pub use error::{EngineError, RenderError};
pub use marker::{MarkerError, MarkerRegion};
pub use tool::{CogTool, RegistryError, RenderContext, ToolRegistry};
