//! Parallel per-file task execution.
//!
//! Each matched file becomes one task. Tasks are independent (the engine
//! only touches its own file), so they fan out over a rayon pool;
//! `--single-threaded` pins the pool to one worker. Each task captures its
//! own log so output from concurrent workers never interleaves.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rayon::prelude::*;

/// A unit of work: one file to cog.
#[derive(Debug, Clone)]
pub struct Task {
    /// Display name (the file path as given).
    pub name: String,
    pub path: PathBuf,
}

/// How bad a task failure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth surfacing, but not a hard failure (e.g. no markers found).
    Advisory,
    /// A hard failure.
    Fatal,
}

/// A failed task with its captured log.
#[derive(Debug, Clone)]
pub struct TaskFailure {
    pub severity: Severity,
    pub log: String,
}

/// Result of one task: the captured log on success, a failure otherwise.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub name: String,
    pub result: Result<String, TaskFailure>,
}

impl TaskReport {
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Aggregate result over all tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    /// Only advisory failures occurred.
    Advisory,
    /// At least one fatal failure occurred.
    Fatal,
}

impl RunOutcome {
    /// Process exit code: 0 success, 1 fatal, 2 advisory.
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Success => ExitCode::SUCCESS,
            RunOutcome::Fatal => ExitCode::from(1),
            RunOutcome::Advisory => ExitCode::from(2),
        }
    }
}

/// Runs `worker` over every task, optionally on a single worker thread.
///
/// Reports come back in task order regardless of scheduling.
pub fn run_tasks<F>(
    tasks: &[Task],
    single_threaded: bool,
    worker: F,
) -> Result<(RunOutcome, Vec<TaskReport>)>
where
    F: Fn(&Task) -> Result<String, TaskFailure> + Sync,
{
    // num_threads(0) lets rayon pick its default.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(if single_threaded { 1 } else { 0 })
        .build()
        .context("failed to build worker thread pool")?;

    let reports: Vec<TaskReport> = pool.install(|| {
        tasks
            .par_iter()
            .map(|task| TaskReport {
                name: task.name.clone(),
                result: worker(task),
            })
            .collect()
    });

    Ok((aggregate(&reports), reports))
}

fn aggregate(reports: &[TaskReport]) -> RunOutcome {
    let mut outcome = RunOutcome::Success;
    for report in reports {
        if let Err(failure) = &report.result {
            match failure.severity {
                Severity::Fatal => return RunOutcome::Fatal,
                Severity::Advisory => outcome = RunOutcome::Advisory,
            }
        }
    }
    outcome
}
