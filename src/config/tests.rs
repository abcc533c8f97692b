//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Verify that the serialized template parses back into the file layer.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), env_from(&[])).unwrap();
    assert_eq!(resolved.api_url, DEFAULT_API_URL);
    assert_eq!(resolved.backend.bind_addr, BackendConfig::default().bind_addr);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), env_from(&[])).unwrap();
    assert_eq!(config.api_url, "http://127.0.0.1:8000/translate");
    assert_eq!(config.request_timeout_secs, 60);
    assert_eq!(config.theme, "Legalis");
    assert!(!config.demo_mode);
    assert_eq!(config.backend.space, "ranveer0323/legalis-engine");
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "http://file.example/translate"
theme = "Dark"

[backend]
bind_addr = "0.0.0.0:9000"
space = "someone/engine"
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("LEGALIS_API_URL", "https://legalis.example/translate"),
            ("LEGALIS_DEMO", "true"),
            ("LEGALIS_BIND", "127.0.0.1:7000"),
        ]),
    )
    .unwrap();

    assert_eq!(config.api_url, "https://legalis.example/translate");
    assert_eq!(config.theme, "Dark");
    assert!(config.demo_mode);
    assert_eq!(config.backend.bind_addr.port(), 7000);
    assert_eq!(config.backend.space, "someone/engine");
}

#[test]
fn test_invalid_bind_address_is_an_error() {
    let result = Config::resolve(
        FileConfig::default(),
        env_from(&[("LEGALIS_BIND", "not-an-address")]),
    );
    assert!(result.is_err());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_space_url_resolution() {
    assert_eq!(
        space_url("ranveer0323/legalis-engine"),
        "https://ranveer0323-legalis-engine.hf.space"
    );
    assert_eq!(
        space_url("Some_User/Legal.Model"),
        "https://some-user-legal-model.hf.space"
    );
    assert_eq!(
        space_url("http://127.0.0.1:7860/"),
        "http://127.0.0.1:7860"
    );
}
