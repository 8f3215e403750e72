use crate::error::Result;
use crate::git::{GitOutput, GitRunner};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Mock runner for testing without spawning git
///
/// Responses are keyed on the space-joined argument list. Every invocation
/// is recorded so tests can assert which commands ran (or that none did).
/// An argument list with no scripted response behaves like an unset config
/// key: non-zero exit, empty output.
pub struct MockGitRunner {
    responses: HashMap<String, GitOutput>,
    calls: Mutex<Vec<String>>,
}

impl MockGitRunner {
    /// Create a new mock with no scripted responses
    pub fn new() -> Self {
        MockGitRunner {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script a response for an argument list, e.g. `"config --get user.name"`
    pub fn respond(&mut self, args: impl Into<String>, output: GitOutput) {
        self.responses.insert(args.into(), output);
    }

    /// The argument lists of all invocations so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of invocations so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for MockGitRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for MockGitRunner {
    fn run(&self, args: &[&str], _cwd: &Path) -> Result<GitOutput> {
        let key = args.join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }
        Ok(self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| GitOutput::err("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_scripted_response() {
        let mut runner = MockGitRunner::new();
        runner.respond(
            "symbolic-ref -q --short HEAD",
            GitOutput::ok("feature/login"),
        );

        let output = runner
            .run(&["symbolic-ref", "-q", "--short", "HEAD"], Path::new("."))
            .unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "feature/login");
    }

    #[test]
    fn test_mock_unscripted_args_fail_quietly() {
        let runner = MockGitRunner::new();
        let output = runner
            .run(&["config", "--get", "no.such.key"], Path::new("."))
            .unwrap();
        assert!(!output.success);
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_mock_records_calls() {
        let runner = MockGitRunner::new();
        runner.run(&["--version"], Path::new(".")).unwrap();
        runner
            .run(&["config", "--get", "user.name"], Path::new("."))
            .unwrap();

        assert_eq!(runner.call_count(), 2);
        assert_eq!(
            runner.calls(),
            vec!["--version".to_string(), "config --get user.name".to_string()]
        );
    }

    #[test]
    fn test_mock_default() {
        let runner = MockGitRunner::default();
        assert_eq!(runner.call_count(), 0);
    }
}
