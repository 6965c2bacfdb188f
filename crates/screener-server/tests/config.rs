use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use screener_server::config::{ConfigError, DEFAULT_PORT, ServerConfig};

fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_without_ai() {
    let config = load(&[("SCREENER_DATA_DIR", "/tmp/screener")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.data_dir, PathBuf::from("/tmp/screener"));
    assert!(config.ai.is_none());
    assert!(!config.engine.top_up_goals);
}

#[test]
fn gemini_settings() {
    let config = load(&[
        ("SCREENER_DATA_DIR", "/data"),
        ("PORT", "8080"),
        ("GEMINI_API_KEY", "abc"),
        ("GEMINI_MODEL", "gemini-1.5-flash"),
        ("SCREENER_AI_TIMEOUT_SECS", "5"),
        ("SCREENER_TOP_UP_GOALS", "true"),
    ])
    .unwrap();

    assert_eq!(config.port, 8080);
    let ai = config.ai.unwrap();
    assert_eq!(ai.api_key, "abc");
    assert_eq!(ai.model, "gemini-1.5-flash");
    assert_eq!(ai.timeout, Duration::from_secs(5));
    assert!(config.engine.top_up_goals);
}

#[test]
fn openai_key_is_accepted_and_blank_values_ignored() {
    let config = load(&[
        ("SCREENER_DATA_DIR", "/data"),
        ("GEMINI_API_KEY", "  "),
        ("OPENAI_API_KEY", "xyz"),
        ("PORT", ""),
    ])
    .unwrap();
    assert_eq!(config.ai.unwrap().api_key, "xyz");
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn bad_values_are_reported() {
    let err = load(&[("SCREENER_DATA_DIR", "/data"), ("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

    let err = load(&[("SCREENER_DATA_DIR", "/data"), ("SCREENER_TOP_UP_GOALS", "maybe")])
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { name: "SCREENER_TOP_UP_GOALS", .. }));
}
