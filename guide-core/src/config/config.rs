use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use guide_llm::LlmClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "PROMPT_GUIDE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("{var} not found. Please set it in the .env file.")]
    MissingApiKey { var: String },
    #[error("failed to create {provider} client: {message}")]
    Client { provider: String, message: String },
}

/// `[model]` table, both keys are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    pub model_name: String,
    pub temperature: f32,
}

/// Optional `[provider]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_provider")]
    pub name: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_provider() -> String {
    "groq".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: default_provider(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    model: ModelSettings,
    #[serde(default)]
    provider: ProviderSettings,
}

/// Everything read once at startup: config file plus the provider credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelSettings,
    pub provider: ProviderSettings,
    env_vars: HashMap<String, String>,
}

impl AppConfig {
    /// `PROMPT_GUIDE_CONFIG` if set, `config.toml` in the working directory otherwise
    pub fn config_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Reads the config file and the provider environment from the process.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Reads the config file and resolves provider variables through `lookup`.
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(target: "config", "loaded {}", path.display());
        Self::from_toml(&content, lookup)
    }

    /// Parses `content` and resolves provider variables through `lookup`.
    pub fn from_toml<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: ConfigFile = toml::from_str(content)?;
        let provider = file.provider;

        let info = LlmClient::provider_info(&provider.name)
            .ok_or_else(|| ConfigError::UnknownProvider(provider.name.clone()))?;

        let mut env_vars: HashMap<String, String> = info
            .env_vars
            .iter()
            .filter_map(|var| lookup(&var.name).map(|value| (var.name.clone(), value)))
            .collect();

        if let Some(key) = info.key_var() {
            match env_vars.get(key) {
                Some(value) if !value.trim().is_empty() => {}
                _ => return Err(ConfigError::MissingApiKey { var: key.to_string() }),
            }
        }

        if let Some(base_url) = &provider.base_url {
            match info.env_vars.iter().find(|var| var.name.ends_with("_BASE_URL")) {
                Some(var) => {
                    env_vars.insert(var.name.clone(), base_url.clone());
                }
                None => debug!(target: "config", "provider {} ignores base_url", provider.name),
            }
        }

        Ok(Self {
            model: file.model,
            provider,
            env_vars,
        })
    }

    /// Builds the chat client for the configured provider.
    pub fn build_llm(&self) -> Result<LlmClient, ConfigError> {
        LlmClient::create_provider(&self.provider.name, &self.env_vars).map_err(|e| ConfigError::Client {
            provider: self.provider.name.clone(),
            message: e.to_string(),
        })
    }
}
