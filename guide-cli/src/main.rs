mod cli;
mod error;
mod headless;
mod server;
mod startup;
#[cfg(test)]
mod testing;

use clap::Parser;
use guide_core::LoggingConfig;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = startup::run(cli, |name| std::env::var(name).ok()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
