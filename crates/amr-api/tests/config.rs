use std::collections::HashMap;
use std::path::PathBuf;

use amr_api::config::{
    ApiConfig, apply_overrides, config_path, load_config, load_regions, save_config,
};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.top_limit, 12);
    assert_eq!(config.default_selection, 3);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amr-api.json");
    std::fs::write(&path, r#"{ "bind_addr": "127.0.0.1:9000", "top_limit": 5 }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.bind_addr, "127.0.0.1:9000");
    assert_eq!(config.top_limit, 5);
    assert_eq!(config.default_selection, 3);
}

#[test]
fn migration_keeps_an_explicit_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amr-api.json");
    std::fs::write(&path, r#"{ "request_timeout_secs": 5 }"#).unwrap();

    assert_eq!(load_config(&path).unwrap().request_timeout_secs, 5);
}

#[test]
fn newer_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amr-api.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer"));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("amr-api.json");
    let config = ApiConfig {
        config_version: 0,
        backend_token: Some("secret".to_string()),
        regions_path: Some(PathBuf::from("/data/regions.json")),
        ..ApiConfig::default()
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.backend_token.as_deref(), Some("secret"));
    assert_eq!(loaded.regions_path, config.regions_path);
}

#[test]
fn environment_overrides_file_values() {
    let config = apply_overrides(
        ApiConfig::default(),
        env(&[
            ("AMR_BIND_ADDR", "127.0.0.1:1"),
            ("AMR_BACKEND_URL", "https://amr.example.org/api/v1"),
        ]),
    );
    assert_eq!(config.bind_addr, "127.0.0.1:1");
    assert_eq!(config.backend_base_url, "https://amr.example.org/api/v1");
    assert_eq!(config.backend_token, None);
}

#[test]
fn config_path_prefers_environment() {
    assert_eq!(config_path(env(&[])), PathBuf::from("amr-api.json"));
    assert_eq!(
        config_path(env(&[("AMR_API_CONFIG", "/etc/amr.json")])),
        PathBuf::from("/etc/amr.json")
    );
    assert_eq!(
        config_path(env(&[("AMR_API_CONFIG", " ")])),
        PathBuf::from("amr-api.json")
    );
}

#[test]
fn regions_file_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regions.json");
    std::fs::write(
        &path,
        r#"[{ "id": "dharwad", "name": "Dharwad", "kind": "district",
              "children": [{ "id": "hubli", "name": "Hubli", "kind": "taluk" }] }]"#,
    )
    .unwrap();

    let regions = load_regions(&path).unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].children[0].id, "hubli");
    assert!(load_regions(&dir.path().join("missing.json")).is_err());
}

#[test]
fn out_of_range_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amr-api.json");
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
