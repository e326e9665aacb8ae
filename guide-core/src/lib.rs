pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod prompts;

pub use config::{AppConfig, ConfigError, ModelSettings, ProviderSettings};
pub use error::GuideError;
pub use generator::{GeneratedPrompt, PromptGenerator};
pub use logging::LoggingConfig;
pub use prompts::{Category, PromptKind, PromptRequest};
