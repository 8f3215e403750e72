use crate::error::{FlowMessageError, Result};
use crate::git::{GitOutput, GitRunner};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the real `git` executable as a child process.
///
/// Each [run](GitRunner::run) call spawns one process with the requested
/// working directory, blocks until it exits, and captures both output
/// streams in full. Output is decoded lossily, so invalid UTF-8 from git
/// never aborts a query.
pub struct CliGitRunner {
    program: PathBuf,
}

impl CliGitRunner {
    /// Create a runner that resolves `git` through PATH
    pub fn new() -> Self {
        CliGitRunner {
            program: PathBuf::from("git"),
        }
    }

    /// Create a runner for a specific git executable
    ///
    /// Used when the host configuration points at a bundled or
    /// non-default git installation.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        CliGitRunner {
            program: program.into(),
        }
    }
}

impl Default for CliGitRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for CliGitRunner {
    fn run(&self, args: &[&str], cwd: &Path) -> Result<GitOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| {
                FlowMessageError::process(format!(
                    "Failed to run {} {}: {}",
                    self.program.display(),
                    args.join(" "),
                    e
                ))
            })?;

        Ok(GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            success: output.status.success(),
        })
    }
}
