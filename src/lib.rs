pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod models;
pub mod normalize;
pub mod services;
pub mod state;
pub mod views;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, cmd_list_orders, cmd_normalize, cmd_submit_order};
pub use config::Config;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve => {
            let prometheus_handle = install_metrics_recorder(&config)?;
            run_server(config, prometheus_handle).await
        }

        Commands::Orders => cmd_list_orders(&config).await,

        Commands::Submit { username, brands } => {
            cmd_submit_order(&config, &username, &brands).await
        }

        Commands::Normalize => cmd_normalize(&config).await,

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists, leaving it untouched.");
            }
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn install_metrics_recorder(
    config: &Config,
) -> anyhow::Result<Option<metrics_exporter_prometheus::PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");
    Ok(Some(handle))
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("repairdesk v{} starting...", env!("CARGO_PKG_VERSION"));

    if !config.server.enabled {
        warn!("Web server is disabled in config, nothing to run");
        return Ok(());
    }

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    let app = api::router(state).await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Web server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
