pub mod config;

pub use config::{AppConfig, ConfigError, ModelSettings, ProviderSettings, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};

#[cfg(test)]
mod tests;
