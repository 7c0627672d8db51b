mod args;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use skydesk_console::{BookingConsole, ViewState};
use skydesk_core::StaticSession;
use skydesk_remote::{Config, HttpBookingBackend};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skydesk=info,skydesk_console=debug,skydesk_remote=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load_from(&cli.config_dir).context("Failed to load config")?;
    tracing::info!("Using bookings API at {}", config.api.base_url);

    let backend = HttpBookingBackend::from_config(&config.api)?;
    let session = StaticSession::new(config.auth.token.clone());
    let view = ViewState::with_page_size(config.view.page_size)
        .context("Invalid view.page_size in config")?;

    let console = BookingConsole::with_view(Arc::new(backend), Arc::new(session), view);
    let outcome = commands::run(&console, cli.command).await;
    console.teardown();
    outcome
}
