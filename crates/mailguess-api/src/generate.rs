//! Handler for `GET /generate`.
//!
//! Runs the same validation and expansion as the CLI and returns the
//! candidate set as JSON, or as the CSV export when `format=csv`.

use axum::{
  Json,
  extract::Query,
  http::header,
  response::{IntoResponse, Response},
};
use chrono::Utc;
use mailguess_core::{
  CandidateSet, expand,
  export::{export_file_name, to_csv},
  input::NameInput,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  #[default]
  Json,
  Csv,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
  #[serde(default)]
  pub first:  String,
  #[serde(default)]
  pub middle: String,
  #[serde(default)]
  pub last:   String,
  #[serde(default)]
  pub domain: String,
  #[serde(default)]
  pub format: Format,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
  pub count:      usize,
  pub candidates: CandidateSet,
}

/// `GET /generate?first=...&last=...&domain=...[&middle=...][&format=csv]`
pub async fn handler(Query(params): Query<GenerateParams>) -> Result<Response, ApiError> {
  let input = NameInput {
    first:  params.first,
    middle: params.middle,
    last:   params.last,
    domain: params.domain,
  };
  let name = input.validate()?;
  let candidates = expand(&name);
  tracing::debug!(domain = %name.domain, count = candidates.len(), "generated candidates");

  let response = match params.format {
    Format::Json => Json(GenerateResponse {
      count: candidates.len(),
      candidates,
    })
    .into_response(),
    Format::Csv => {
      let disposition = format!("attachment; filename=\"{}\"", export_file_name(Utc::now()));
      (
        [
          (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
          (header::CONTENT_DISPOSITION, disposition),
        ],
        to_csv(&candidates),
      )
        .into_response()
    }
  };
  Ok(response)
}
