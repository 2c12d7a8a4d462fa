//! Error types for `rinkside-core`.

use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate player id in seed: {0}")]
  DuplicatePlayerId(PlayerId),

  #[error("player {player}: unparseable time on ice {value:?}")]
  MalformedTimeOnIce { player: PlayerId, value: String },

  #[error(
    "player {player}: shooting percentage {value} outside 0..=100"
  )]
  ShootingPercentageOutOfRange { player: PlayerId, value: f64 },

  #[error("seed decode error: {0}")]
  SeedDecode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
