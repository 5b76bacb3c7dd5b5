//! mailguess-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), builds the
//! EmailDetective adapter and serves the API under `/api`.
//!
//! The provider key is taken from the `EMAILDETECTIVE_API_KEY` environment
//! variable only. Without it the server still starts, and `/api/verify`
//! answers 500.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use mailguess_provider::{EmailDetective, detective::API_KEY_ENV};
use mailguess_server::ServerConfig;
use secrecy::SecretString;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "mailguess verification proxy")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let api_key = std::env::var(API_KEY_ENV)
    .ok()
    .filter(|k| !k.trim().is_empty())
    .map(SecretString::from);
  if api_key.is_none() {
    tracing::warn!("{API_KEY_ENV} is not set; verification requests will fail");
  }

  let verifier = EmailDetective::new(&server_cfg.provider, api_key)
    .context("failed to build verification client")?;
  tracing::info!(upstream = %server_cfg.provider.base_url, "verification provider ready");

  let app = mailguess_server::app(Arc::new(verifier));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
