use clap::Parser;
use forecast_core::config::Config;
use forecast_proxy::{router, AppState};
use forecast_upstream::CwaClient;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forecast-proxy", about = "CWA county forecast as flat JSON")]
struct Cli {
    /// TOML file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default the log filter to `debug` instead of `info` (RUST_LOG wins).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing .env is normal outside development.
    dotenv::dotenv().ok();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load(cli.config.as_deref())?;
    if !config.has_api_key() {
        tracing::warn!("CWA_API_KEY is not set; /api/weather requests will return 500");
    }

    let source = CwaClient::new(&config.upstream)?;
    let addr = config.bind_addr();
    let app = router(AppState::new(config, source));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "forecast-proxy listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
    }
}
