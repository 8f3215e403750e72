//! Git process abstraction layer
//!
//! This module provides a trait-based abstraction over invocations of the
//! `git` executable, allowing for a real implementation that spawns child
//! processes and a mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [GitRunner] trait, which exposes the single
//! narrow operation this crate needs: run `git` with some arguments in some
//! working directory and collect its output. The concrete implementations are:
//!
//! - [runner::CliGitRunner]: spawns the real `git` executable
//! - [mock::MockGitRunner]: a scripted implementation for testing
//!
//! Most code should depend on the [GitRunner] trait rather than concrete
//! implementations so it can be exercised without a repository on disk.

pub mod mock;
pub mod runner;

pub use mock::MockGitRunner;
pub use runner::CliGitRunner;

use crate::error::Result;
use std::path::Path;

/// Captured output of one git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// Trimmed standard output
    pub stdout: String,
    /// Trimmed standard error
    pub stderr: String,
    /// Whether the process exited with status zero
    pub success: bool,
}

impl GitOutput {
    /// A successful invocation that printed `stdout`
    pub fn ok(stdout: impl Into<String>) -> Self {
        GitOutput {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// A failed invocation that printed `stderr`
    pub fn err(stderr: impl Into<String>) -> Self {
        GitOutput {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// The last non-empty line of stdout, or `""` if there is none.
    ///
    /// Git prints the answer on the final line for the queries this crate
    /// runs, with any chatter (advice, hints) before it.
    pub fn last_line(&self) -> &str {
        self.stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(str::trim)
            .unwrap_or("")
    }
}

/// Narrow process-invocation trait for git
///
/// Implementors must be `Send + Sync` so a runner can be shared freely.
/// Each call is synchronous and blocking: the child process is spawned,
/// drained to completion, and reaped before the call returns. There is no
/// shared state between calls.
///
/// A non-zero exit status is NOT an error at this layer; it is reported
/// through [GitOutput::success] so callers can decide (an unset config key
/// exits non-zero, which is an ordinary answer, not a failure). `Err` is
/// reserved for not being able to run the tool at all.
pub trait GitRunner: Send + Sync {
    /// Run git with `args` inside the working directory `cwd`
    fn run(&self, args: &[&str], cwd: &Path) -> Result<GitOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_line_single() {
        let out = GitOutput::ok("main");
        assert_eq!(out.last_line(), "main");
    }

    #[test]
    fn test_last_line_takes_final_line() {
        let out = GitOutput::ok("hint: something\nfeature/login");
        assert_eq!(out.last_line(), "feature/login");
    }

    #[test]
    fn test_last_line_skips_trailing_blanks() {
        let out = GitOutput::ok("develop\n\n  \n");
        assert_eq!(out.last_line(), "develop");
    }

    #[test]
    fn test_last_line_empty_output() {
        let out = GitOutput::err("fatal: not a git repository");
        assert_eq!(out.last_line(), "");
    }
}
