//! The per-file cog invocation wrapper.
//!
//! Runs the engine over one file, captures its log, and classifies the
//! result. A file with no marker pair is escalated to an advisory failure:
//! a run that rewrote nothing almost always means a missing or malformed
//! marker pair, so the captured log is augmented with the table of
//! available tools to point at the fix.

use std::path::Path;

use launchcog_core::{Engine, EngineStatus, ToolRegistry};

use crate::runner::{Severity, TaskFailure};
use crate::table::tool_table;

/// Cogs a single file, returning its log or a classified failure.
pub fn cog_file(
    path: &Path,
    registry: &ToolRegistry,
    hyperlinks: bool,
) -> Result<String, TaskFailure> {
    let engine = Engine::new(registry);

    match engine.process_file(path) {
        Ok(outcome) => match outcome.status {
            EngineStatus::Regenerated | EngineStatus::Clean => Ok(outcome.log),
            EngineStatus::NoMarkers => Err(TaskFailure {
                severity: Severity::Advisory,
                log: format!(
                    "{}\n\nThe following cog tools are available:\n\n{}",
                    outcome.log,
                    tool_table(registry, hyperlinks)
                ),
            }),
        },
        Err(err) => Err(TaskFailure {
            severity: Severity::Fatal,
            log: format!("Cogging '{}' failed: {}", path.display(), err),
        }),
    }
}
