//! Host environment snapshot
//!
//! The IDE-side state this crate reads, reduced to the handful of string
//! fields the templating actually uses. The snapshot is plain data: it can
//! be deserialized from the configuration file or constructed directly by
//! an embedding host.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host environment fields consumed by template expansion
///
/// Every field is optional; a missing field substitutes as an empty string.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct HostContext {
    /// Path to the open solution/workspace file
    #[serde(default)]
    pub solution: Option<PathBuf>,

    /// Active build configuration name (e.g. "Debug")
    #[serde(default)]
    pub configuration: Option<String>,

    /// Development environment directory
    #[serde(default)]
    pub dev_env_dir: Option<String>,

    /// IDE install directory
    #[serde(default)]
    pub install_dir: Option<String>,

    /// FxCop tool directory
    #[serde(default)]
    pub fxcop_dir: Option<String>,
}

impl HostContext {
    /// Directory branch resolution runs in: the solution's parent directory
    pub fn repo_dir(&self) -> Option<PathBuf> {
        self.solution
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Directory containing the solution file, or `""`
    pub fn solution_dir(&self) -> String {
        self.repo_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Full path of the solution file, or `""`
    pub fn solution_path(&self) -> String {
        self.solution
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Solution name without extension, or `""`
    pub fn solution_name(&self) -> String {
        self.solution
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Solution file name with extension, or `""`
    pub fn solution_file_name(&self) -> String {
        self.solution
            .as_deref()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Solution file extension including the dot, or `""`
    pub fn solution_ext(&self) -> String {
        self.solution
            .as_deref()
            .and_then(Path::extension)
            .map(|s| format!(".{}", s.to_string_lossy()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_host() -> HostContext {
        HostContext {
            solution: Some(PathBuf::from("/work/acme/Acme.sln")),
            configuration: Some("Debug".to_string()),
            ..HostContext::default()
        }
    }

    #[test]
    fn test_solution_derivations() {
        let host = sample_host();
        assert_eq!(host.solution_dir(), "/work/acme");
        assert_eq!(host.solution_path(), "/work/acme/Acme.sln");
        assert_eq!(host.solution_name(), "Acme");
        assert_eq!(host.solution_file_name(), "Acme.sln");
        assert_eq!(host.solution_ext(), ".sln");
    }

    #[test]
    fn test_repo_dir_is_solution_parent() {
        let host = sample_host();
        assert_eq!(host.repo_dir(), Some(PathBuf::from("/work/acme")));
    }

    #[test]
    fn test_empty_host_yields_empty_strings() {
        let host = HostContext::default();
        assert_eq!(host.repo_dir(), None);
        assert_eq!(host.solution_dir(), "");
        assert_eq!(host.solution_path(), "");
        assert_eq!(host.solution_name(), "");
        assert_eq!(host.solution_file_name(), "");
        assert_eq!(host.solution_ext(), "");
    }

    #[test]
    fn test_solution_without_extension() {
        let host = HostContext {
            solution: Some(PathBuf::from("/work/acme/Makefile")),
            ..HostContext::default()
        };
        assert_eq!(host.solution_name(), "Makefile");
        assert_eq!(host.solution_ext(), "");
    }

    #[test]
    fn test_bare_relative_solution_has_no_repo_dir() {
        let host = HostContext {
            solution: Some(PathBuf::from("Acme.sln")),
            ..HostContext::default()
        };
        assert_eq!(host.repo_dir(), None);
    }
}
