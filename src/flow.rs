//! Branch name resolution against git-flow conventions
//!
//! Wraps a [GitRunner] with the handful of queries this crate needs: the
//! current branch, git config values, and the git-flow prefixes used to
//! trim branch names down to bare feature/release/hotfix names.

use crate::error::{FlowMessageError, Result};
use crate::git::GitRunner;
use std::path::PathBuf;

/// Branch names and prefixes configured by git-flow
///
/// Fetched fresh from `git config` for a single resolution call and then
/// discarded; values are empty strings when the repository has no git-flow
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowOptions {
    pub master_branch: String,
    pub develop_branch: String,
    pub feature_prefix: String,
    pub release_prefix: String,
    pub hotfix_prefix: String,
}

/// Resolves branch state for one repository directory
///
/// Holds a borrowed runner and the repository location. A `None` location
/// means the host has no open solution/workspace: every query then
/// short-circuits to an empty answer without spawning a process.
pub struct GitFlow<'a> {
    runner: &'a dyn GitRunner,
    repo_dir: Option<PathBuf>,
}

impl<'a> GitFlow<'a> {
    pub fn new(runner: &'a dyn GitRunner, repo_dir: Option<PathBuf>) -> Self {
        GitFlow { runner, repo_dir }
    }

    /// Resolve the current branch name
    ///
    /// Runs `symbolic-ref -q --short HEAD` in the repository directory and
    /// takes the last line of output. With `trim_prefix` set, the configured
    /// feature, release and hotfix prefixes are checked in that fixed order;
    /// the first one the branch name starts with is stripped together with
    /// the single separator character after it. A branch name exactly equal
    /// to a prefix is returned unchanged.
    ///
    /// # Returns
    /// * `Ok(name)` - the (possibly trimmed) branch name; empty when no
    ///   repository directory is known or HEAD is detached
    /// * `Err` - the process could not be spawned, or it failed with a
    ///   non-empty error stream (e.g. not a git repository)
    pub fn current_branch_name(&self, trim_prefix: bool) -> Result<String> {
        let Some(repo_dir) = self.repo_dir.as_deref() else {
            return Ok(String::new());
        };

        let output = self
            .runner
            .run(&["symbolic-ref", "-q", "--short", "HEAD"], repo_dir)?;

        let branch = output.last_line().to_string();
        if branch.is_empty() {
            if !output.stderr.is_empty() {
                return Err(FlowMessageError::branch(output.stderr));
            }
            // -q: detached HEAD exits non-zero without a message
            return Ok(String::new());
        }

        if !trim_prefix {
            return Ok(branch);
        }

        let options = self.flow_options();
        for prefix in [
            &options.feature_prefix,
            &options.release_prefix,
            &options.hotfix_prefix,
        ] {
            if let Some(trimmed) = strip_flow_prefix(&branch, prefix) {
                return Ok(trimmed.to_string());
            }
        }
        Ok(branch)
    }

    /// Read a git config value, e.g. `"gitflow.prefix.feature"`
    ///
    /// Returns the trimmed value, or an empty string when the key is unset
    /// or the tool call fails. Never an error.
    pub fn option(&self, key: &str) -> String {
        let Some(repo_dir) = self.repo_dir.as_deref() else {
            return String::new();
        };
        match self.runner.run(&["config", "--get", key], repo_dir) {
            Ok(output) if output.success => output.stdout,
            _ => String::new(),
        }
    }

    /// Fetch the git-flow branch names and prefixes from git config
    pub fn flow_options(&self) -> FlowOptions {
        FlowOptions {
            master_branch: self.option("gitflow.branch.master"),
            develop_branch: self.option("gitflow.branch.develop"),
            feature_prefix: self.option("gitflow.prefix.feature"),
            release_prefix: self.option("gitflow.prefix.release"),
            hotfix_prefix: self.option("gitflow.prefix.hotfix"),
        }
    }

    /// Whether the repository is initialized for git-flow
    pub fn is_git_flow(&self) -> bool {
        !self.option("gitflow.branch.master").is_empty()
    }

    /// Whether the repository follows plain GitHub flow (no git-flow config)
    pub fn is_github_flow(&self) -> bool {
        !self.is_git_flow()
    }

    /// Whether the current branch is a feature branch
    pub fn is_feature_branch(&self) -> Result<bool> {
        self.on_prefixed_branch("gitflow.prefix.feature")
    }

    /// Whether the current branch is a release branch
    pub fn is_release_branch(&self) -> Result<bool> {
        self.on_prefixed_branch("gitflow.prefix.release")
    }

    /// Whether the current branch is a hotfix branch
    pub fn is_hotfix_branch(&self) -> Result<bool> {
        self.on_prefixed_branch("gitflow.prefix.hotfix")
    }

    fn on_prefixed_branch(&self, key: &str) -> Result<bool> {
        let prefix = self.option(key);
        if prefix.is_empty() {
            return Ok(false);
        }
        Ok(self.current_branch_name(false)?.starts_with(&prefix))
    }
}

/// Strip `prefix` plus the single separator character after it.
///
/// Returns `None` (no match) when the prefix is empty, the branch does not
/// start with it, or the branch name is exactly the prefix with nothing
/// after it.
fn strip_flow_prefix<'b>(branch: &'b str, prefix: &str) -> Option<&'b str> {
    if prefix.is_empty() || !branch.starts_with(prefix) {
        return None;
    }
    let rest = &branch[prefix.len()..];
    let mut chars = rest.chars();
    chars.next()?;
    Some(chars.as_str())
}
