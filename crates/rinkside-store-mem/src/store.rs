//! [`MemRoster`] — the in-memory implementation of [`RosterStore`].

use std::{collections::HashMap, path::Path, sync::Arc};

use rinkside_core::{
  player::{Player, PlayerId},
  query::{self, RosterPage, RosterQuery},
  stats::parse_time_on_ice,
  store::RosterStore,
};

use crate::{Error, Result};

/// The seed shipped with the crate: the six players of the original hall.
const BUILTIN_SEED: &str = include_str!("../seed/players.json");

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster held entirely in memory.
///
/// Construction is the only fallible step: the seed is decoded and
/// validated once, the id index is built, and the collection is immutable
/// from then on. Cloning is cheap — the snapshot is reference-counted.
#[derive(Clone)]
pub struct MemRoster {
  players: Arc<Vec<Player>>,
  by_id:   Arc<HashMap<PlayerId, usize>>,
}

impl MemRoster {
  /// Build a roster from already-decoded players, validating the seed
  /// invariants.
  pub fn new(players: Vec<Player>) -> Result<Self> {
    let mut by_id = HashMap::with_capacity(players.len());
    for (index, player) in players.iter().enumerate() {
      validate(player)?;
      if by_id.insert(player.id, index).is_some() {
        return Err(rinkside_core::Error::DuplicatePlayerId(player.id).into());
      }
    }
    Ok(Self { players: Arc::new(players), by_id: Arc::new(by_id) })
  }

  /// Decode a roster from seed JSON.
  pub fn from_json(json: &str) -> Result<Self> {
    let players: Vec<Player> =
      serde_json::from_str(json).map_err(rinkside_core::Error::SeedDecode)?;
    Self::new(players)
  }

  /// Load a roster from a seed file on disk.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let json = std::fs::read_to_string(path)?;
    Self::from_json(&json)
  }

  /// The roster embedded in the crate.
  pub fn builtin() -> Result<Self> { Self::from_json(BUILTIN_SEED) }

  pub fn len(&self) -> usize { self.players.len() }

  pub fn is_empty(&self) -> bool { self.players.is_empty() }
}

/// Seed invariants checked once at load; anything caught here would
/// otherwise surface as a runtime fault mid-request.
fn validate(player: &Player) -> Result<()> {
  let check_toi = |value: &str| -> Result<()> {
    if parse_time_on_ice(value).is_none() {
      return Err(
        rinkside_core::Error::MalformedTimeOnIce {
          player: player.id,
          value:  value.to_owned(),
        }
        .into(),
      );
    }
    Ok(())
  };
  let check_pct = |value: f64| -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
      return Err(
        rinkside_core::Error::ShootingPercentageOutOfRange {
          player: player.id,
          value,
        }
        .into(),
      );
    }
    Ok(())
  };

  check_toi(&player.time_on_ice)?;
  check_pct(player.shooting_percentage)?;
  for season in &player.seasons {
    check_toi(&season.time_on_ice)?;
    check_pct(season.shooting_percentage)?;
  }
  Ok(())
}

// ─── RosterStore impl ────────────────────────────────────────────────────────

impl RosterStore for MemRoster {
  type Error = Error;

  async fn all_players(&self) -> Result<Vec<Player>> {
    Ok(self.players.as_ref().clone())
  }

  async fn list(&self, query: &RosterQuery) -> Result<RosterPage> {
    Ok(query::run(&self.players, query))
  }

  async fn player_by_id(&self, id: PlayerId) -> Result<Option<Player>> {
    Ok(self.by_id.get(&id).map(|&index| self.players[index].clone()))
  }

  async fn latest_inductee(&self) -> Result<Option<Player>> {
    let mut latest: Option<&Player> = None;
    for player in self.players.iter() {
      let newer = match latest {
        None => true,
        // Lowest id wins on identical induction dates.
        Some(best) => {
          player.inducted_on > best.inducted_on
            || (player.inducted_on == best.inducted_on && player.id < best.id)
        }
      };
      if newer {
        latest = Some(player);
      }
    }
    Ok(latest.cloned())
  }

  async fn related_players(
    &self,
    id: PlayerId,
    limit: usize,
  ) -> Result<Vec<Player>> {
    let Some(&subject_index) = self.by_id.get(&id) else {
      return Ok(Vec::new());
    };
    let subject_position = &self.players[subject_index].position;

    let mut related: Vec<Player> = self
      .players
      .iter()
      .filter(|p| p.id != id)
      .cloned()
      .collect();
    related.sort_by(|a, b| {
      let a_same = a.position == *subject_position;
      let b_same = b.position == *subject_position;
      b_same
        .cmp(&a_same)
        .then_with(|| b.inducted_on.cmp(&a.inducted_on))
    });
    related.truncate(limit);
    Ok(related)
  }
}
