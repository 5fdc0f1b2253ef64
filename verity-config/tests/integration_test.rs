//! Integration tests for verity-config

use std::io::Write;
use verity_config::*;

fn policy_file(extension: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_policy_from_toml_file() {
    let file = policy_file(
        "toml",
        r#"
            max_url_length = 8192
            allow_unicode_hosts = false
        "#,
    );

    let policy = Policy::from_file(file.path()).unwrap();
    assert_eq!(policy.max_url_length, 8192);
    assert!(!policy.allow_unicode_hosts);
    assert_eq!(policy.max_windows_path_length, 32767);
}

#[test]
fn test_policy_from_json_file() {
    let file = policy_file("json", r#"{"max_windows_path_length": 260}"#);

    let policy = Policy::from_file(file.path()).unwrap();
    assert_eq!(policy.max_windows_path_length, 260);
    assert_eq!(policy.max_url_length, 2083);
}

#[test]
fn test_policy_from_env_file() {
    let file = policy_file(
        "env",
        "# limits\nVERITY_MAX_DNS_NAME_LENGTH=127\nVERITY_ALLOW_UNICODE_HOSTS='false'\n",
    );

    let policy = Policy::from_file(file.path()).unwrap();
    assert_eq!(policy.max_dns_name_length, 127);
    assert!(!policy.allow_unicode_hosts);
}

#[test]
fn test_policy_from_dotenv_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(
        &path,
        "export VERITY_MAX_URL_LENGTH=4096 # long query strings\nUNRELATED=1\n",
    )
    .unwrap();

    let policy = Policy::from_file(&path).unwrap();
    assert_eq!(policy.max_url_length, 4096);
    assert_eq!(policy.min_url_length, 3);
}

#[test]
fn test_policy_file_errors() {
    assert!(matches!(
        Policy::from_file("/nonexistent/verity/policy.toml"),
        Err(ConfigError::IoError(_))
    ));

    let file = policy_file("yaml", "max_url_length: 1");
    assert!(matches!(
        Policy::from_file(file.path()),
        Err(ConfigError::LoadError(_))
    ));

    let file = policy_file("toml", "max_url_length = [");
    assert!(matches!(
        Policy::from_file(file.path()),
        Err(ConfigError::ParseError(_))
    ));

    let file = policy_file("json", r#"{"min_url_length": 10, "max_url_length": 5}"#);
    assert!(matches!(
        Policy::from_file(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn test_policy_from_env_keeps_defaults_without_variables() {
    // No VERITY_* variables are set in the test environment.
    let policy = Policy::from_env().unwrap();
    assert_eq!(policy, Policy::default());
}

#[test]
fn test_policy_serializes() {
    let text = serde_json::to_string(&Policy::default()).unwrap();
    assert!(text.contains("\"max_url_length\":2083"));
}
