//! Error types for the substitution engine and cog tools.

use std::path::PathBuf;
use thiserror::Error;

use crate::marker::MarkerError;

/// Errors raised while regenerating a file.
///
/// Every variant carries the file being processed so that failures remain
/// attributable when many files run in parallel.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The opening marker names a tool that is not registered.
    #[error("unknown cog tool '{name}' in '{}'", .file.display())]
    UnknownTool { file: PathBuf, name: String },

    /// The marker structure of the file is invalid.
    #[error("invalid cog markers in '{}': {source}", .file.display())]
    InvalidMarkers {
        file: PathBuf,
        #[source]
        source: MarkerError,
    },

    /// A generated region no longer matches its recorded checksum.
    #[error(
        "generated region in '{}' (line {line}) was edited by hand; \
         revert the edits or delete the checksum to force regeneration",
        .file.display()
    )]
    TamperedOutput { file: PathBuf, line: usize },

    /// The named tool failed to render its output.
    #[error("cog tool '{tool}' failed for '{}': {message}", .file.display())]
    RenderFailed {
        file: PathBuf,
        tool: String,
        message: String,
    },

    /// The file could not be read.
    #[error("failed to read '{}': {source}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The regenerated file could not be written back.
    #[error("failed to write '{}': {source}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a cog tool while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The render context is unusable for this tool.
    #[error("{0}")]
    Context(String),

    /// A configuration record could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem access failed during rendering.
    #[error("i/o error while rendering: {0}")]
    Io(#[from] std::io::Error),
}
