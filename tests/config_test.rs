// tests/config_test.rs
use git_flow_message::config::{load_config, Config};
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.host.solution, None);
    assert_eq!(config.host.configuration, None);
    assert_eq!(config.git.program, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[host]
solution = "/work/acme/Acme.sln"
configuration = "Debug"
install_dir = "/opt/ide/bin"

[git]
program = "/usr/bin/git"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.host.solution,
        Some(PathBuf::from("/work/acme/Acme.sln"))
    );
    assert_eq!(config.host.configuration, Some("Debug".to_string()));
    assert_eq!(config.host.install_dir, Some("/opt/ide/bin".to_string()));
    assert_eq!(config.git.program, Some(PathBuf::from("/usr/bin/git")));
}

#[test]
fn test_load_missing_explicit_path_is_an_error() {
    let result = load_config(Some("/no/such/flowmessage.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[host\nbroken").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    // load_config(None) probes ./flowmessage.toml, so the working
    // directory is switched for the duration of this test
    let original_dir = std::env::current_dir().unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("flowmessage.toml"),
        r#"
[host]
configuration = "Release"
"#,
    )
    .unwrap();

    std::env::set_current_dir(temp_dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.host.configuration, Some("Release".to_string()));
}
