//! Update command implementation
//!
//! The orchestrator: resolves the input path, builds one task per located
//! `launch.json`, fans the tasks out over the runner, and reports the
//! aggregate result. Finding nothing to do is a successful no-op.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use colored::Colorize;
use launchcog_core::ToolRegistry;

use crate::cogger::cog_file;
use crate::console::{Console, Verbosity};
use crate::hooks::{builtin_hooks, run_actions, HookContext};
use crate::locator::{self, SEARCH_FILENAME};
use crate::runner::{run_tasks, RunOutcome, Severity, Task, TaskReport};

/// Resolved options for one update pass.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub input: PathBuf,
    pub single_threaded: bool,
    pub verbosity: Verbosity,
}

/// What an update pass did, for callers that need more than an exit code.
#[derive(Debug)]
pub struct UpdateSummary {
    pub outcome: RunOutcome,
    pub reports: Vec<TaskReport>,
}

/// Run the update command
///
/// # Returns
/// Exit code: 0 on success or when no files were found, 1 on a fatal
/// failure, 2 when only advisory failures (missing markers) occurred.
pub fn run(
    path: &str,
    single_threaded: bool,
    quiet: bool,
    verbose: bool,
    debug: bool,
) -> Result<ExitCode> {
    let options = UpdateOptions {
        input: PathBuf::from(path),
        single_threaded,
        verbosity: Verbosity::from_flags(quiet, verbose, debug),
    };

    let summary = execute(&options)?;
    Ok(summary.outcome.exit_code())
}

/// Runs the update pass and returns the full summary.
pub fn execute(options: &UpdateOptions) -> Result<UpdateSummary> {
    let console = Console::new(options.verbosity);

    ensure!(
        options.input.exists(),
        "input path '{}' does not exist",
        options.input.display()
    );
    let input = options
        .input
        .canonicalize()
        .with_context(|| format!("failed to resolve '{}'", options.input.display()))?;

    console.debug(&format!("resolved input to '{}'", input.display()));

    let filenames = locator::locate(&console, &input)?;
    if filenames.is_empty() {
        console.status(&format!("No '{}' files were found.", SEARCH_FILENAME));
        return Ok(UpdateSummary {
            outcome: RunOutcome::Success,
            reports: Vec::new(),
        });
    }

    let hooks = builtin_hooks();
    let hook_ctx = HookContext { input: &input };
    for hook in &hooks {
        console.debug(&format!("running '{}' hook actions", hook.name()));
        run_actions(&console, hook.actions(&hook_ctx));
    }

    let registry = ToolRegistry::builtin();
    let hyperlinks = std::io::stdout().is_terminal();

    let tasks: Vec<Task> = filenames
        .iter()
        .map(|file| Task {
            name: file.display().to_string(),
            path: file.clone(),
        })
        .collect();

    let (outcome, reports) = run_tasks(&tasks, options.single_threaded, |task| {
        cog_file(&task.path, &registry, hyperlinks)
    })?;

    report_tasks(&console, &reports);

    for hook in &hooks {
        run_actions(&console, hook.epilogue_actions(&hook_ctx));
    }

    Ok(UpdateSummary { outcome, reports })
}

/// Per-task reporting, plus the full-log echo when a lone task failed.
fn report_tasks(console: &Console, reports: &[TaskReport]) {
    for report in reports {
        match &report.result {
            Ok(log) => {
                console.status(&format!("{} {}", "ok".green(), report.name));
                console.verbose(log);
            }
            Err(failure) => match failure.severity {
                Severity::Advisory => {
                    console.status(&format!("{} {}", "!!".yellow(), report.name));
                }
                Severity::Fatal => {
                    console.status(&format!("{} {}", "!!".red(), report.name));
                }
            },
        }
    }

    // With exactly one task there is no summary worth compressing; echo the
    // captured log in full, as an error or a warning by severity.
    if let [report] = reports {
        if let Err(failure) = &report.result {
            match failure.severity {
                Severity::Fatal => console.error(&failure.log),
                Severity::Advisory => console.warning(&failure.log),
            }
        }
    }
}
