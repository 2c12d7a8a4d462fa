//! rinkside-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads the
//! roster seed into memory, and serves the JSON API over HTTP under `/api`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use rinkside_api::ServerConfig;
use rinkside_store_mem::MemRoster;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Rinkside hall-of-fame API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("RINKSIDE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Load the roster: a configured seed file, or the embedded one.
  let roster = match &server_cfg.seed_path {
    Some(path) => MemRoster::load(path)
      .with_context(|| format!("failed to load seed from {path:?}"))?,
    None => MemRoster::builtin().context("failed to load builtin seed")?,
  };
  tracing::info!("Loaded {} players", roster.len());

  let app = axum::Router::new()
    .nest("/api", rinkside_api::api_router(Arc::new(roster)))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
