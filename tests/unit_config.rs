use std::fs;
use std::path::PathBuf;

use taskdeck::config::{resolve_data_dir, Config};

#[test]
fn config_defaults_when_missing() {
    let config = Config::default();

    assert!(config.storage.dir.is_none());
    assert_eq!(config.timer.minutes, 25);
    assert_eq!(config.session_seconds(), 1500);
}

#[test]
fn config_overrides_from_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.toml");
    let toml = r#"
[storage]
dir = "/tmp/taskdeck-data"

[timer]
minutes = 50
"#;

    fs::write(&config_path, toml)?;

    let config = Config::load(&config_path)?;

    assert_eq!(
        config.storage.dir.as_deref(),
        Some(std::path::Path::new("/tmp/taskdeck-data"))
    );
    assert_eq!(config.timer.minutes, 50);
    assert_eq!(config.session_seconds(), 3000);

    Ok(())
}

#[test]
fn config_load_rejects_invalid_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "this = [not valid").expect("write config");

    let result = Config::load(&config_path);
    assert!(result.is_err());
}

#[test]
fn data_dir_resolution_prefers_explicit_override() {
    let mut config = Config::default();
    config.storage.dir = Some(PathBuf::from("/from/config"));

    let explicit = resolve_data_dir(Some(PathBuf::from("/explicit")), &config).expect("dir");
    assert_eq!(explicit, PathBuf::from("/explicit"));

    let from_config = resolve_data_dir(None, &config).expect("dir");
    assert_eq!(from_config, PathBuf::from("/from/config"));
}
