//! Logo Lab Server - Headless Gateway
//!
//! A pure Rust HTTP server that:
//! - Proxies design analysis to the text provider on `POST /generate-analysis`
//! - Generates preview images with fallback on `POST /generate-image`
//! - Rate limits both per client over a trailing window
//!
//! Also a CLI for one-shot generation and config inspection.
//!
//! Access via: http://localhost:8045

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

mod api;
mod cli;
mod config_commands;
mod generate_command;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands, ConfigCommands};
use logolab_core::modules::{config as core_config, logger};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_tracing(&cli.log_level).map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        None => serve(cli.config.as_deref(), None, false).await,
        Some(Commands::Serve { port, lan }) => serve(cli.config.as_deref(), port, lan).await,
        Some(Commands::Generate { project, description, gateway, direct, json }) => {
            let options = generate_command::GenerateOptions { project, description, gateway, direct, json };
            generate_command::run(cli.config.as_deref(), options).await
        }
        Some(Commands::Config(ConfigCommands::Show { json })) => {
            config_commands::show_config(cli.config.as_deref(), json)
        }
    }
}

async fn serve(config_path: Option<&Path>, port: Option<u16>, lan: bool) -> Result<()> {
    let mut config = core_config::load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    config.allow_lan_access |= lan;
    core_config::validate_config(&config)?;

    info!("🚀 Logo Lab gateway starting on port {}...", config.port);

    let state = AppState::from_config(config)?;
    let limits = state.config().rate_limits;
    info!(
        "✅ Rate limits: analysis {}/{}s, image {}/{}s",
        limits.text_limit, limits.window_secs, limits.image_limit, limits.window_secs
    );

    let listener = server_utils::create_listener(state.config()).await?;
    let addr = listener.local_addr()?;
    let app = router::build_router(state);

    info!("🌐 Server listening on http://{}", addr);
    info!("🔀 Endpoints: POST /generate-analysis, POST /generate-image");

    axum::serve(listener, app)
        .with_graceful_shutdown(server_utils::shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}
