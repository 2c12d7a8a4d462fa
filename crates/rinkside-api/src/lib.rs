//! JSON REST API for the Rinkside hall-of-fame roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rinkside_core::store::RosterStore`]. Transport concerns (listener,
//! shutdown) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rinkside_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod players;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use rinkside_core::store::RosterStore;
use serde::Deserialize;

pub use error::ApiError;

#[cfg(test)]
mod tests;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `RINKSIDE_*` environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  /// Path to a seed JSON file; the embedded seed is used when absent.
  pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self { host: "127.0.0.1".into(), port: 8080, seed_path: None }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RosterStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/players", get(players::all::<S>))
    .route("/players/list", get(players::list::<S>))
    .route("/players/latest", get(players::latest::<S>))
    .route("/players/{id}", get(players::get_one::<S>))
    .route("/players/{id}/career", get(players::career::<S>))
    .route("/players/related/{id}", get(players::related::<S>))
    .with_state(store)
}
