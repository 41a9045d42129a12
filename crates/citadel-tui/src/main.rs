//! citadel-tui: terminal browser for the Rick and Morty character
//! catalog.
//!
//! Logs go to a file rather than stderr; anything printed while the
//! alternate screen is active would corrupt the interface.

mod action;
mod app;
mod event;
mod fetch;
mod screen;
mod screens;
mod theme;
mod tui;
mod view;
mod widgets;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use citadel_core::{CatalogService, Client, TransportConfig};

use crate::app::App;

/// Terminal browser for the Rick and Morty character catalog.
#[derive(Parser, Debug)]
#[command(name = "citadel-tui", version, about)]
struct Cli {
    /// Starting location, e.g. "#183" to open a character directly
    fragment: Option<String>,

    /// Catalog API base URL (overrides config file and environment)
    #[arg(short = 'u', long, env = "CITADEL_API_URL")]
    api_url: Option<Url>,

    /// Log file path
    #[arg(long, default_value = "/tmp/citadel-tui.log")]
    log_file: PathBuf,

    /// More logging per repeat: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "citadel_tui={level},citadel_core={level},citadel_api={level}"
        ))
    });

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(Path::new("/tmp")),
        log_file.file_name().unwrap_or(OsStr::new("citadel-tui.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();
    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli.log_file, cli.verbose);

    let mut config = citadel_config::load_config_or_default();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    info!(api_url = %config.api_url, "starting citadel-tui");

    let transport = TransportConfig {
        timeout: Duration::from_secs(config.timeout_secs),
        ..TransportConfig::default()
    };
    let client = Client::new(config.api_url.as_str(), &transport)?;
    let service = CatalogService::new(client);

    let api_host = config
        .api_url
        .host_str()
        .map_or_else(|| config.api_url.to_string(), str::to_owned);

    let mut app = App::new(service, cli.fragment, api_host);
    app.run().await
}
