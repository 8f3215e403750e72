//! Commit message template expansion
//!
//! Templates use `$(Name)` placeholder tokens. Expansion is a fixed,
//! ordered sequence of literal replacements; tokens are distinct strings,
//! so the order cannot change the result. Unavailable values substitute
//! as empty strings and unrecognized tokens pass through untouched, so
//! expansion never fails.

use crate::host::HostContext;

/// All recognized placeholder tokens, in substitution order
pub const TOKENS: [&str; 11] = [
    "$(BranchName)",
    "$(FeatureName)",
    "$(Configuration)",
    "$(DevEnvDir)",
    "$(SolutionDir)",
    "$(SolutionPath)",
    "$(SolutionName)",
    "$(SolutionFileName)",
    "$(SolutionExt)",
    "$(VSInstallDir)",
    "$(FxCopDir)",
];

/// Replacement values for one expansion call
///
/// Built fresh per request from the branch resolution result and the host
/// snapshot, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub branch_name: String,
    pub feature_name: String,
    pub configuration: String,
    pub dev_env_dir: String,
    pub solution_dir: String,
    pub solution_path: String,
    pub solution_name: String,
    pub solution_file_name: String,
    pub solution_ext: String,
    pub install_dir: String,
    pub fxcop_dir: String,
}

impl Substitutions {
    /// Build the substitution table from a host snapshot and resolved
    /// branch names
    ///
    /// `branch_name` is the raw branch, `feature_name` the prefix-trimmed
    /// one; both may be empty when no repository is available.
    pub fn from_host(host: &HostContext, branch_name: &str, feature_name: &str) -> Self {
        Substitutions {
            branch_name: branch_name.to_string(),
            feature_name: feature_name.to_string(),
            configuration: host.configuration.clone().unwrap_or_default(),
            dev_env_dir: host.dev_env_dir.clone().unwrap_or_default(),
            solution_dir: host.solution_dir(),
            solution_path: host.solution_path(),
            solution_name: host.solution_name(),
            solution_file_name: host.solution_file_name(),
            solution_ext: host.solution_ext(),
            install_dir: host.install_dir.clone().unwrap_or_default(),
            fxcop_dir: host.fxcop_dir.clone().unwrap_or_default(),
        }
    }
}

/// Expand every recognized token in `template`
pub fn expand(template: &str, subs: &Substitutions) -> String {
    template
        .replace("$(BranchName)", &subs.branch_name)
        .replace("$(FeatureName)", &subs.feature_name)
        .replace("$(Configuration)", &subs.configuration)
        .replace("$(DevEnvDir)", &subs.dev_env_dir)
        .replace("$(SolutionDir)", &subs.solution_dir)
        .replace("$(SolutionPath)", &subs.solution_path)
        .replace("$(SolutionName)", &subs.solution_name)
        .replace("$(SolutionFileName)", &subs.solution_file_name)
        .replace("$(SolutionExt)", &subs.solution_ext)
        .replace("$(VSInstallDir)", &subs.install_dir)
        .replace("$(FxCopDir)", &subs.fxcop_dir)
}

/// Placeholder-looking tokens in `template` that are not recognized
///
/// Deduplicated, in order of first appearance. Used by the CLI to warn
/// before expanding.
pub fn unrecognized_tokens(template: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    if let Ok(re) = regex::Regex::new(r"\$\([A-Za-z]+\)") {
        for m in re.find_iter(template) {
            let token = m.as_str();
            if !TOKENS.contains(&token) && !found.iter().any(|t| t == token) {
                found.push(token.to_string());
            }
        }
    }
    found
}
