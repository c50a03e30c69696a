//! Marker-region regeneration.
//!
//! The engine rewrites a file in place: each marker region's interior is
//! replaced by its tool's rendered output, every generated line is tagged
//! with a suffix so readers can tell generated lines from hand-written
//! ones, and a checksum of the interior is recorded on the closing marker.
//! If the current interior no longer matches a recorded checksum, the
//! region was edited by hand and the run fails rather than clobbering the
//! edits.

use std::fs;
use std::path::Path;

use crate::error::EngineError;
use crate::marker::{self, MarkerRegion};
use crate::tool::{RenderContext, ToolRegistry};

/// Suffix appended to every non-blank generated line.
pub const GENERATED_LINE_SUFFIX: &str = " // COGGED";

/// Hex digits of the blake3 digest recorded on the closing marker.
const CHECKSUM_LEN: usize = 32;

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// Regions were regenerated and the file was rewritten.
    Regenerated,
    /// Regenerated content was identical; the file was left untouched.
    Clean,
    /// The file contains no marker pair, so there was nothing to do.
    NoMarkers,
}

/// Per-file result of a run, with the captured log.
#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub status: EngineStatus,
    pub log: String,
}

/// The substitution engine, borrowing the registry it resolves tools from.
pub struct Engine<'a> {
    registry: &'a ToolRegistry,
}

impl<'a> Engine<'a> {
    pub fn new(registry: &'a ToolRegistry) -> Self {
        Self { registry }
    }

    /// Regenerates every marker region in `path`.
    ///
    /// The file is rewritten only when the regenerated content differs from
    /// what is on disk, so a second run over unchanged inputs is a no-op.
    pub fn process_file(&self, path: &Path) -> Result<EngineOutcome, EngineError> {
        let original = fs::read_to_string(path).map_err(|source| EngineError::Read {
            file: path.to_path_buf(),
            source,
        })?;

        let had_trailing_newline = original.ends_with('\n');
        let lines: Vec<&str> = original.lines().collect();

        let regions = marker::scan(&lines).map_err(|source| EngineError::InvalidMarkers {
            file: path.to_path_buf(),
            source,
        })?;

        if regions.is_empty() {
            return Ok(EngineOutcome {
                status: EngineStatus::NoMarkers,
                log: format!("Warning: no cog code found in '{}'", path.display()),
            });
        }

        let mut output: Vec<String> = Vec::with_capacity(lines.len());
        let mut cursor = 0;

        for region in &regions {
            self.check_tamper(path, &lines, region)?;

            let rendered = self.render_region(path, region)?;

            // Copy through the opening marker line.
            for line in &lines[cursor..=region.open_line] {
                output.push((*line).to_string());
            }

            let generated = suffix_lines(&rendered);
            let checksum = interior_checksum(&generated);
            output.extend(generated);
            output.push(marker::end_line(&region.end_prefix, &checksum));

            cursor = region.end_line + 1;
        }

        for line in &lines[cursor..] {
            output.push((*line).to_string());
        }

        let mut updated = output.join("\n");
        if had_trailing_newline {
            updated.push('\n');
        }

        if updated == original {
            return Ok(EngineOutcome {
                status: EngineStatus::Clean,
                log: format!("'{}' is up to date", path.display()),
            });
        }

        fs::write(path, &updated).map_err(|source| EngineError::Write {
            file: path.to_path_buf(),
            source,
        })?;

        Ok(EngineOutcome {
            status: EngineStatus::Regenerated,
            log: format!(
                "Regenerated {} in '{}'",
                plural(regions.len(), "region"),
                path.display()
            ),
        })
    }

    fn render_region(&self, path: &Path, region: &MarkerRegion) -> Result<String, EngineError> {
        let tool = self
            .registry
            .get(&region.tool)
            .ok_or_else(|| EngineError::UnknownTool {
                file: path.to_path_buf(),
                name: region.tool.clone(),
            })?;

        tool.render(&RenderContext { target: path })
            .map_err(|err| EngineError::RenderFailed {
                file: path.to_path_buf(),
                tool: region.tool.clone(),
                message: err.to_string(),
            })
    }

    fn check_tamper(
        &self,
        path: &Path,
        lines: &[&str],
        region: &MarkerRegion,
    ) -> Result<(), EngineError> {
        let Some(recorded) = &region.checksum else {
            return Ok(());
        };

        let interior: Vec<String> = lines[region.open_line + 1..region.end_line]
            .iter()
            .map(|line| (*line).to_string())
            .collect();

        if interior_checksum(&interior) != *recorded {
            return Err(EngineError::TamperedOutput {
                file: path.to_path_buf(),
                line: region.open_line + 2,
            });
        }

        Ok(())
    }
}

/// Splits rendered output into lines and tags the non-blank ones.
fn suffix_lines(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", line, GENERATED_LINE_SUFFIX)
            }
        })
        .collect()
}

/// Checksum over the generated interior, as written to disk.
fn interior_checksum(lines: &[String]) -> String {
    let joined = lines.join("\n");
    blake3::hash(joined.as_bytes()).to_hex().as_str()[..CHECKSUM_LEN].to_string()
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
