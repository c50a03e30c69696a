//! Marker-pair scanning and directive parsing.
//!
//! The marker grammar is deliberately small. An opening marker is a single
//! line containing `[[[cog import <Name>]]]`, and the matching close is a
//! line containing `[[[end]]]`, optionally followed by a recorded checksum:
//!
//! ```text
//! // [[[cog import PopulateTests]]]
//! ...generated interior...
//! // [[[end]]] (checksum: 3f29c1...)
//! ```
//!
//! Everything on the line before the markers (typically a `//` comment
//! prefix) is preserved verbatim when the region is rewritten.

use thiserror::Error;

const COG_OPEN: &str = "[[[cog";
const COG_CLOSE: &str = "]]]";
const COG_END: &str = "[[[end]]]";
const CHECKSUM_OPEN: &str = "(checksum:";

/// A marker pair located in a file, with 0-based line indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Name of the tool the opening directive imports.
    pub tool: String,
    /// Line index of the opening marker.
    pub open_line: usize,
    /// Line index of the `[[[end]]]` marker.
    pub end_line: usize,
    /// Text preceding `[[[end]]]` on the closing line (comment prefix).
    pub end_prefix: String,
    /// Checksum recorded on the closing marker, if any.
    pub checksum: Option<String>,
}

/// Structural errors found while scanning markers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// An opening marker was never closed.
    #[error("marker opened on line {line} has no matching [[[end]]]")]
    Unterminated { line: usize },

    /// An `[[[end]]]` appeared with no open marker.
    #[error("[[[end]]] on line {line} has no matching opening marker")]
    UnexpectedEnd { line: usize },

    /// A second opening marker appeared inside an open region.
    #[error("marker opened on line {line} inside an unclosed region")]
    NestedMarker { line: usize },

    /// The directive inside `[[[cog ...]]]` is not `import <Name>`.
    #[error("malformed directive on line {line}: {directive:?} (expected 'import <ToolName>')")]
    MalformedDirective { line: usize, directive: String },
}

/// Scans `lines` for marker regions, in file order.
///
/// Line numbers in errors are 1-based for display; the indexes stored in
/// [`MarkerRegion`] are 0-based.
pub fn scan(lines: &[&str]) -> Result<Vec<MarkerRegion>, MarkerError> {
    let mut regions = Vec::new();
    let mut open: Option<(String, usize)> = None;

    for (index, line) in lines.iter().enumerate() {
        if let Some(start) = line.find(COG_OPEN) {
            if open.is_some() {
                return Err(MarkerError::NestedMarker { line: index + 1 });
            }
            let tool = parse_directive(line, start, index + 1)?;
            open = Some((tool, index));
        } else if let Some(end_start) = line.find(COG_END) {
            let (tool, open_line) = open
                .take()
                .ok_or(MarkerError::UnexpectedEnd { line: index + 1 })?;
            let end_prefix = line[..end_start].to_string();
            let checksum = parse_checksum(&line[end_start + COG_END.len()..]);
            regions.push(MarkerRegion {
                tool,
                open_line,
                end_line: index,
                end_prefix,
                checksum,
            });
        }
    }

    if let Some((_, line)) = open {
        return Err(MarkerError::Unterminated { line: line + 1 });
    }

    Ok(regions)
}

/// Builds the closing-marker line for a freshly generated region.
pub fn end_line(prefix: &str, checksum: &str) -> String {
    format!("{}{} {} {})", prefix, COG_END, CHECKSUM_OPEN, checksum)
}

fn parse_directive(line: &str, start: usize, display_line: usize) -> Result<String, MarkerError> {
    let after_open = &line[start + COG_OPEN.len()..];
    let body = after_open
        .find(COG_CLOSE)
        .map(|close| &after_open[..close])
        .ok_or_else(|| MarkerError::MalformedDirective {
            line: display_line,
            directive: after_open.trim().to_string(),
        })?
        .trim();

    let mut tokens = body.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("import"), Some(name), None) => Ok(name.to_string()),
        _ => Err(MarkerError::MalformedDirective {
            line: display_line,
            directive: body.to_string(),
        }),
    }
}

fn parse_checksum(rest: &str) -> Option<String> {
    let rest = rest.trim();
    let inner = rest.strip_prefix(CHECKSUM_OPEN)?;
    let (digest, _) = inner.split_once(')')?;
    let digest = digest.trim();
    if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(digest.to_string())
}
