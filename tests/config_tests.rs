use std::fs;

use newslog::config::Config;
use newslog::error::{ConfigError, Error};

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("newslog.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(
        &dir,
        r#"
[database]
url = "postgres://vagrant@localhost:5432/news"

[logging]
level = "warn"
format = "json"
"#,
    );

    let config = Config::load(&path).expect("valid config");
    std::env::var("DATABASE_URL").map_or_else(
        |_| assert_eq!(config.database.url, "postgres://vagrant@localhost:5432/news"),
        |url| assert_eq!(config.database.url, url),
    );
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_unknown_log_format() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(&dir, "[logging]\nformat = \"syslog\"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid log format error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid format to be rejected, got {}",
            config.logging.format
        ),
    }
}

#[test]
fn config_rejects_wrong_types() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_config(&dir, "[database]\nurl = 5432\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_reports_unreadable_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.toml");

    let err = Config::load(&missing).expect_err("missing file must fail");
    assert!(err.to_string().starts_with("failed to read config file"));
}
