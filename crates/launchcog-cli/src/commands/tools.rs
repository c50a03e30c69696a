//! Tools command implementation
//!
//! Lists the registered cog tools, using the same table that is appended
//! to a "no markers found" failure.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use launchcog_core::ToolRegistry;

use crate::table::tool_table;

/// Run the tools command
pub fn run() -> Result<ExitCode> {
    let registry = ToolRegistry::builtin();
    let hyperlinks = std::io::stdout().is_terminal();

    println!("{}", "Available cog tools:".cyan().bold());
    println!();
    print!("{}", tool_table(&registry, hyperlinks));
    println!();
    println!(
        "Import one from a marker pair, e.g.: {}",
        "// [[[cog import PopulateTests]]]".dimmed()
    );

    Ok(ExitCode::SUCCESS)
}
