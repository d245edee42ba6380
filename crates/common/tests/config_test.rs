use syntria_common::config::SystemConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("test_config.toml");

    let config_content = r#"
[server]
host = "0.0.0.0"
port = 9000

[risk]
model = "gemini-2.0-flash-exp"
request_timeout_secs = 15
max_reasons = 3
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = SystemConfig::from_file(config_path.to_str().unwrap()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.risk.model, "gemini-2.0-flash-exp");
    assert_eq!(config.risk.request_timeout_secs, 15);
    assert_eq!(config.risk.max_reasons, 3);
}

#[test]
fn test_config_defaults_for_missing_sections() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("minimal.toml");

    fs::write(&config_path, "[server]\nport = 8080\n").unwrap();

    let config = SystemConfig::from_file(config_path.to_str().unwrap()).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.risk.request_timeout_secs, 20);
    assert_eq!(config.risk.max_reasons, 5);
}

#[test]
fn test_config_validation_invalid_timeout() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid_timeout.toml");

    let config_content = r#"
[risk]
request_timeout_secs = 0
"#;

    fs::write(&config_path, config_content).unwrap();

    let result = SystemConfig::from_file(config_path.to_str().unwrap());
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("request_timeout_secs"));
}

#[test]
fn test_config_validation_invalid_max_reasons() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid_reasons.toml");

    let config_content = r#"
[risk]
max_reasons = 0
"#;

    fs::write(&config_path, config_content).unwrap();

    let result = SystemConfig::from_file(config_path.to_str().unwrap());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("max_reasons"));
}

#[test]
fn test_config_validation_empty_model() {
    let mut config = SystemConfig::default();
    config.risk.model = "  ".to_string();

    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("risk.model"));
}

#[test]
fn test_bind_addr() {
    let config = SystemConfig::default();
    assert_eq!(config.bind_addr(), "127.0.0.1:8787");
}
