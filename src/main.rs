use anyhow::{Context, Result};
use beachcomber::config::Config;
use beachcomber::logger::Logger;
use beachcomber::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    let logger = Logger::from_config(&config.logging).context("Failed to initialize logging")?;

    if config.map.access_token().is_none() {
        eprintln!(
            "⚠️  {} is not set: map tiles will be requested without an access token",
            config.map.access_token_env
        );
    }

    // Run the TUI application
    ui::run_app(config, logger, arg).await?;

    Ok(())
}
