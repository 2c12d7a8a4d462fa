//! The `RosterStore` trait.
//!
//! Implemented by storage backends (e.g. `rinkside-store-mem`). Higher
//! layers (`rinkside-api`) depend on this abstraction, not on any concrete
//! backend. The roster is read-only for the life of the process; a future
//! persistent backend only has to guarantee that each call observes a
//! consistent snapshot.

use std::future::Future;

use crate::{
  player::{Player, PlayerId},
  query::{RosterPage, RosterQuery},
};

/// Abstraction over a read-only roster backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RosterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The full roster in seed order.
  fn all_players(
    &self,
  ) -> impl Future<Output = Result<Vec<Player>, Self::Error>> + Send + '_;

  /// One filtered/sorted/paginated listing pass (see [`crate::query`]).
  fn list<'a>(
    &'a self,
    query: &'a RosterQuery,
  ) -> impl Future<Output = Result<RosterPage, Self::Error>> + Send + 'a;

  /// Retrieve a player by id. Returns `None` if not found — a distinct
  /// outcome from failure, surfaced to HTTP callers as a 404.
  fn player_by_id(
    &self,
    id: PlayerId,
  ) -> impl Future<Output = Result<Option<Player>, Self::Error>> + Send + '_;

  /// The most recently inducted player; `None` on an empty roster.
  /// Identical induction dates tie-break to the lowest id.
  fn latest_inductee(
    &self,
  ) -> impl Future<Output = Result<Option<Player>, Self::Error>> + Send + '_;

  /// Up to `limit` other players ranked by same position first, then most
  /// recent induction. Excludes the subject; an unknown subject id yields
  /// an empty list.
  fn related_players(
    &self,
    id: PlayerId,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Player>, Self::Error>> + Send + '_;
}
