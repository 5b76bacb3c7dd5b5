//! Mail-exchanger lookup over DNS-over-HTTPS (JSON API).

use std::time::Duration;

use reqwest::{Client, header};
use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_RESOLVER: &str = "https://dns.google/resolve";

/// Whether a domain publishes MX records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxStatus {
  /// At least one MX answer; `exchangers` holds the raw record data
  /// (`"<preference> <host>"`).
  Active { exchangers: Vec<String> },
  /// The query succeeded but returned no usable answer.
  NoRecords,
}

impl MxStatus {
  pub fn can_receive_mail(&self) -> bool { matches!(self, Self::Active { .. }) }
}

#[derive(Debug, Deserialize)]
struct DohResponse {
  #[serde(rename = "Status")]
  status: u32,
  #[serde(rename = "Answer", default)]
  answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
  data: String,
}

/// `NOERROR` in the resolver's `Status` field.
const RCODE_NOERROR: u32 = 0;

pub struct MxChecker {
  client:   Client,
  resolver: String,
}

impl MxChecker {
  pub fn new(resolver: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .map_err(Error::Client)?;
    Ok(Self {
      client,
      resolver: resolver.into(),
    })
  }

  /// Query MX records for `domain`.
  ///
  /// A non-`NOERROR` status or an empty answer section is
  /// [`MxStatus::NoRecords`]; transport and HTTP failures are errors.
  pub async fn check(&self, domain: &str) -> Result<MxStatus> {
    let resp = self
      .client
      .get(&self.resolver)
      .query(&[("name", domain), ("type", "MX")])
      .header(header::ACCEPT, "application/dns-json")
      .send()
      .await
      .map_err(Error::Transport)?;

    if !resp.status().is_success() {
      return Err(Error::Upstream(resp.status()));
    }

    let body: DohResponse = resp.json().await.map_err(Error::Payload)?;
    tracing::debug!(domain, rcode = body.status, answers = body.answer.len(), "mx lookup");

    if body.status != RCODE_NOERROR || body.answer.is_empty() {
      return Ok(MxStatus::NoRecords);
    }
    Ok(MxStatus::Active {
      exchangers: body.answer.into_iter().map(|a| a.data).collect(),
    })
  }
}
