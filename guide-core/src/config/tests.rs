use super::config::{AppConfig, ConfigError};
use std::collections::HashMap;
use std::io::Write;

const FULL: &str = r#"
[model]
model_name = "llama-3.1-8b-instant"
temperature = 0.7
"#;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_load_model_settings() {
    let config = AppConfig::from_toml(FULL, env(&[("GROQ_API_KEY", "gsk_test")])).expect("valid config");
    assert_eq!(config.model.model_name, "llama-3.1-8b-instant");
    assert!((config.model.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.provider.name, "groq");
    assert_eq!(config.provider.base_url, None);
}

#[test]
fn test_missing_temperature_fails_fast() {
    let content = "[model]\nmodel_name = \"llama-3.1-8b-instant\"\n";
    let err = AppConfig::from_toml(content, env(&[("GROQ_API_KEY", "gsk_test")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
    assert!(err.to_string().contains("temperature"), "got {}", err);
}

#[test]
fn test_missing_model_table_fails_fast() {
    let err = AppConfig::from_toml("", env(&[("GROQ_API_KEY", "gsk_test")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
}

#[test]
fn test_missing_api_key() {
    let err = AppConfig::from_toml(FULL, env(&[])).unwrap_err();
    match &err {
        ConfigError::MissingApiKey { var } => assert_eq!(var, "GROQ_API_KEY"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.to_string(), "GROQ_API_KEY not found. Please set it in the .env file.");
}

#[test]
fn test_blank_api_key_is_missing() {
    let err = AppConfig::from_toml(FULL, env(&[("GROQ_API_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey { .. }));
}

#[test]
fn test_unknown_provider() {
    let content = format!("{}\n[provider]\nname = \"carrier-pigeon\"\n", FULL);
    let err = AppConfig::from_toml(&content, env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProvider(ref name) if name == "carrier-pigeon"));
}

#[test]
fn test_ollama_needs_no_key_and_takes_base_url() {
    let content = format!("{}\n[provider]\nname = \"ollama\"\nbase_url = \"http://10.0.0.2:11434/v1\"\n", FULL);
    let config = AppConfig::from_toml(&content, env(&[])).expect("ollama config");
    assert_eq!(config.provider.base_url.as_deref(), Some("http://10.0.0.2:11434/v1"));

    let llm = config.build_llm().expect("ollama client");
    assert_eq!(llm.provider_name(), "ollama");
}

#[test]
fn test_build_groq_client() {
    let config = AppConfig::from_toml(FULL, env(&[("GROQ_API_KEY", "gsk_test")])).expect("valid config");
    let llm = config.build_llm().expect("groq client");
    assert_eq!(llm.provider_name(), "groq");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FULL.as_bytes()).expect("write config");

    let config = AppConfig::load_with(file.path(), env(&[("GROQ_API_KEY", "gsk_test")])).expect("valid config");
    assert_eq!(config.model.model_name, "llama-3.1-8b-instant");

    let err = AppConfig::load_with(file.path(), env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey { ref var } if var == "GROQ_API_KEY"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
