//! HTTP front end for mailguess.
//!
//! Mounts the [`mailguess_api`] router under `/api` behind request tracing.
//! Configuration is layered with the `config` crate: an optional TOML file,
//! then `MAILGUESS_*` environment variables (`__` separates nested keys, e.g.
//! `MAILGUESS_PROVIDER__TIMEOUT_SECS`).

use std::{path::Path, sync::Arc};

use axum::Router;
use config::{Config, ConfigError, Environment, File};
use mailguess_core::verify::Verifier;
use mailguess_provider::ProviderConfig;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration. Every field has a default, so an absent
/// config file is not an error.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:     String,
  #[serde(default = "default_port")]
  pub port:     u16,
  #[serde(default)]
  pub provider: ProviderConfig,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 8080 }

impl ServerConfig {
  /// Read `path` (if it exists) and overlay `MAILGUESS_*` variables.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Config::builder()
      .add_source(File::from(path).required(false))
      .add_source(
        Environment::with_prefix("MAILGUESS")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The complete application: the API under `/api`, traced.
pub fn app<V>(verifier: Arc<V>) -> Router
where
  V: Verifier + 'static,
{
  Router::new()
    .nest("/api", mailguess_api::api_router(verifier))
    .layer(TraceLayer::new_for_http())
}
