use crate::host::HostContext;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete configuration for git-flow-message.
///
/// Carries the host environment snapshot plus runner settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub host: HostContext,

    #[serde(default)]
    pub git: GitConfig,
}

/// Settings for the git child process.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct GitConfig {
    /// Path to the git executable; PATH lookup when unset
    #[serde(default)]
    pub program: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `flowmessage.toml` in current directory
/// 3. `.flowmessage.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./flowmessage.toml").exists() {
        fs::read_to_string("./flowmessage.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".flowmessage.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert_eq!(config.host, HostContext::default());
        assert_eq!(config.git.program, None);
    }

    #[test]
    fn test_parse_full_snapshot() {
        let config: Config = toml::from_str(
            r#"
[host]
solution = "/work/acme/Acme.sln"
configuration = "Release"

[git]
program = "/usr/local/bin/git"
"#,
        )
        .unwrap();

        assert_eq!(
            config.host.solution,
            Some(PathBuf::from("/work/acme/Acme.sln"))
        );
        assert_eq!(config.host.configuration, Some("Release".to_string()));
        assert_eq!(
            config.git.program,
            Some(PathBuf::from("/usr/local/bin/git"))
        );
    }

    #[test]
    fn test_parse_partial_snapshot() {
        let config: Config = toml::from_str(
            r#"
[host]
configuration = "Debug"
"#,
        )
        .unwrap();

        assert_eq!(config.host.solution, None);
        assert_eq!(config.host.configuration, Some("Debug".to_string()));
        assert_eq!(config.git.program, None);
    }
}
