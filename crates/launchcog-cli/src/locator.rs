//! Locating `launch.json` files under an input path.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use walkdir::WalkDir;

use crate::console::Console;

/// The filename this tool operates on.
pub const SEARCH_FILENAME: &str = "launch.json";

/// Resolves an input path to the list of files to process.
///
/// A file argument must be literally named `launch.json`; anything else is a
/// caller contract violation, not a recoverable condition. A directory is
/// walked depth-first and every match is collected.
pub fn locate(console: &Console, input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        ensure!(
            input
                .file_name()
                .is_some_and(|name| name == SEARCH_FILENAME),
            "'{}' is not a '{}' file",
            input.display(),
            SEARCH_FILENAME
        );
        return Ok(vec![input.to_path_buf()]);
    }

    console.status(&format!(
        "Searching for '{}' files in '{}'...",
        SEARCH_FILENAME,
        input.display()
    ));

    let mut found: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(input)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if entry.file_type().is_file() && entry.file_name() == SEARCH_FILENAME {
            console.verbose(&format!("'{}' found.", entry.path().display()));
            found.push(entry.into_path());
        }
    }

    console.status(&format!("{} found\n", plural_files(found.len())));

    Ok(found)
}

fn plural_files(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}
