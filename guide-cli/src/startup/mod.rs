//! Process startup: config and key checks first, then the selected command.

use std::path::Path;
use std::sync::Arc;

use guide_core::{AppConfig, ConfigError, PromptGenerator};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::headless::AppHeadless;
use crate::server::{self, AppState};

/// Loads the config, checks the provider key and builds the generator.
pub fn build_generator<F>(path: &Path, lookup: F) -> Result<PromptGenerator, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = AppConfig::load_with(path, lookup)?;
    let llm = config.build_llm()?;
    info!(
        target: "config",
        "using {} on {} (temperature {})",
        config.model.model_name,
        llm.provider_name(),
        config.model.temperature
    );

    Ok(PromptGenerator::new(Arc::new(llm), config.model))
}

/// Nothing is served or generated until [`build_generator`] succeeds.
pub async fn run<F>(cli: Cli, lookup: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let path = cli.config.unwrap_or_else(AppConfig::config_path);
    let generator = build_generator(&path, lookup)?;

    match cli.command.unwrap_or(Commands::Serve(cli.serve)) {
        Commands::Serve(args) => {
            let state = Arc::new(AppState::new(generator)?);
            server::serve(&args.host, args.port, state).await?;
        }
        Commands::Generate(args) => {
            AppHeadless::new(generator).run(&args).await?;
        }
    }
    Ok(())
}
