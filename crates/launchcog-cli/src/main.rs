//! launchcog - regenerates marked regions in VS Code launch.json files
//!
//! This binary scans for `launch.json` files and re-runs the cog tool named
//! by each file's marker pair, rewriting the generated region in place.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use launchcog_cli::commands;

const UPDATE_HELP: &str = "\
Edit 'launch.json' with a marker pair importing the cog tool you want
(`launchcog tools` lists them):

    {
        ...
        \"configurations\": [
            ...

            // [[[cog import PopulateTests]]]
            // [[[end]]]

            ...
        ]
    }

Then run `launchcog update <path>` to fill the region in.";

/// launchcog - launch.json region generator
#[derive(Parser)]
#[command(name = "launchcog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Update launch.json files using their cog markers
    #[command(after_help = UPDATE_HELP)]
    Update {
        /// Input filename or directory to search for files
        path: String,

        /// Execute with a single thread
        #[arg(long)]
        single_threaded: bool,

        /// Reduce the amount of information written to the terminal
        #[arg(short, long)]
        quiet: bool,

        /// Write verbose information to the terminal
        #[arg(short, long)]
        verbose: bool,

        /// Write debug information to the terminal
        #[arg(long)]
        debug: bool,
    },

    /// List the available cog tools
    Tools,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Update {
            path,
            single_threaded,
            quiet,
            verbose,
            debug,
        } => commands::update::run(&path, single_threaded, quiet, verbose, debug),
        Commands::Tools => commands::tools::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
