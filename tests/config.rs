use std::fs;

use pushkind_pager::models::config::ServerConfig;
use tempfile::TempDir;

fn config_dir(default: &str, overrides: Option<(&str, &str)>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.yaml"), default).unwrap();
    if let Some((env, contents)) = overrides {
        fs::write(dir.path().join(format!("{env}.yaml")), contents).unwrap();
    }
    dir
}

#[test]
fn loads_defaults_and_fills_pager_settings() {
    let dir = config_dir(
        "address: 0.0.0.0\nport: 9000\ntemplates_dir: ./templates/**/*\n",
        None,
    );

    let config = ServerConfig::load(dir.path().to_str().unwrap(), "missing").unwrap();

    assert_eq!(config.address, "0.0.0.0");
    assert_eq!(config.port, 9000);
    assert_eq!(config.assets_dir, "./assets");
    assert_eq!(config.pager.default_page_size, 10);
    assert_eq!(config.pager.group_size, 5);
}

#[test]
fn environment_file_overrides_defaults() {
    let dir = config_dir(
        "address: 0.0.0.0\nport: 9000\ntemplates_dir: ./templates/**/*\npager:\n  group_size: 5\n",
        Some(("staging", "pager:\n  group_size: 7\n  page_size_options: [25, 50]\n")),
    );

    let config = ServerConfig::load(dir.path().to_str().unwrap(), "staging").unwrap();

    assert_eq!(config.pager.group_size, 7);
    assert_eq!(config.pager.page_size_options, vec![25, 50]);
    assert_eq!(config.pager.default_page_size, 10);
}

#[test]
fn missing_default_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = ServerConfig::load(dir.path().to_str().unwrap(), "local");

    assert!(result.is_err());
}

#[test]
fn invalid_pager_settings_abort_loading() {
    for pager in [
        "pager:\n  group_size: 0\n",
        "pager:\n  default_page_size: 5000\n",
        "pager:\n  page_size_options: [0, 10]\n",
    ] {
        let dir = config_dir(
            &format!("address: 0.0.0.0\nport: 9000\ntemplates_dir: ./templates/**/*\n{pager}"),
            None,
        );

        let result = ServerConfig::load(dir.path().to_str().unwrap(), "local");

        assert!(result.is_err(), "{pager}");
    }
}
