//! JSON HTTP API for mailguess.
//!
//! Exposes an axum [`Router`] backed by any [`mailguess_core::verify::Verifier`].
//! The router answers CORS for any origin; TLS and tracing are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", mailguess_api::api_router(verifier.clone()))
//! ```

pub mod error;
pub mod generate;
pub mod verify;

use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use mailguess_core::verify::Verifier;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;

/// Build a fully-materialised API router for `verifier`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<V>(verifier: Arc<V>) -> Router<()>
where
  V: Verifier + 'static,
{
  Router::new()
    .route("/verify", get(verify::handler::<V>).options(verify::preflight))
    .route("/generate", get(generate::handler))
    .layer(cors())
    .with_state(verifier)
}

fn cors() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::OPTIONS])
    .allow_headers(Any)
}
