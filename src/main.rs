use album_dashboard::app::ViewOptions;
use album_dashboard::data;
use album_dashboard::server::{AppState, DashboardHandler, DashboardServer};
use album_dashboard::settings::{Settings, SettingsOverrides};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "album-dashboard")]
#[command(version, about = "Interactive album sales dashboard", long_about = None)]
struct Cli {
    /// Dataset file (CSV or TSV)
    #[arg(long, env = "ALBUM_DASHBOARD_DATA")]
    data: Option<PathBuf>,

    /// Port to serve on
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    bind: Option<String>,

    /// Do not open a browser window
    #[arg(long)]
    no_open: bool,

    /// Settings file to use instead of the default location
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .apply_overrides(SettingsOverrides {
        data_path: cli.data,
        bind_address: cli.bind,
        port: cli.port,
        no_open: cli.no_open,
    });

    info!("Loading dataset from {}", settings.data_path.display());
    let load = data::load(&settings.data_path);
    if let Err(e) = &load {
        error!("Dataset failed to load: {}", e);
    }

    let handler = DashboardHandler::new(
        AppState::from_load(load),
        ViewOptions::from_settings(&settings),
    );
    let server = DashboardServer::bind(&settings.socket_address(), handler)
        .context("Dashboard could not start; try another --port")?;

    if settings.open_browser {
        if let Err(e) = open::that(server.url()) {
            warn!("Could not open browser: {}", e);
        }
    }

    let shutdown = AtomicBool::new(false);
    server.run(&shutdown);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
