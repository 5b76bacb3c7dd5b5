//! Connection settings: CLI flags over the config file over defaults.

use std::path::Path;

use anyhow::{Context, Result};
use mailguess_provider::dns::DEFAULT_RESOLVER;
use serde::Deserialize;

pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
  #[serde(default)]
  pub url:          String,
  #[serde(default)]
  pub dns_resolver: String,
}

impl ConfigFile {
  pub fn read(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")
  }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub url:          String,
  pub dns_resolver: String,
}

impl Settings {
  pub fn resolve(url: Option<String>, dns_resolver: Option<String>, file: &ConfigFile) -> Self {
    Self {
      url:          pick(url, &file.url, DEFAULT_URL),
      dns_resolver: pick(dns_resolver, &file.dns_resolver, DEFAULT_RESOLVER),
    }
  }
}

fn pick(flag: Option<String>, file: &str, default: &str) -> String {
  flag
    .or_else(|| (!file.is_empty()).then(|| file.to_owned()))
    .unwrap_or_else(|| default.to_owned())
}
