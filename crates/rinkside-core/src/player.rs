//! Player, season, and career domain types.
//!
//! All records are built once at load time from a seed and never mutated;
//! every view over them is a derived, side-effect-free computation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Seed-assigned integer identifier; unique across the roster, never reused.
pub type PlayerId = u32;

/// The competition scope a season's statistics cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonKind {
  Regular,
  Playoff,
  International,
}

/// One competition-scoped statistical record belonging to a player.
///
/// `points == goals + assists` is expected of the seed but not validated;
/// the stat line is recorded as published, not recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
  /// Season label, e.g. `"1981-82"` or `"2010"` for tournaments.
  pub season:              String,
  pub team:                String,
  pub kind:                SeasonKind,
  pub games_played:        u32,
  pub goals:               u32,
  pub assists:             u32,
  pub points:              u32,
  pub plus_minus:          i32,
  pub penalty_minutes:     u32,
  /// Average time on ice per game, `"m:ss"`.
  pub time_on_ice:         String,
  pub shots_on_goal:       u32,
  pub shooting_percentage: f64,
  /// Absent for some eras and positions (defensemen, goalies).
  pub faceoff_percentage:  Option<f64>,
}

/// The date range of a player's active play.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Career {
  pub start: NaiveDate,
  /// `None` means still active.
  pub end:   Option<NaiveDate>,
}

impl Career {
  pub fn start_year(&self) -> i32 { self.start.year() }

  /// Display form of the span, e.g. `"1979–1999"` or `"2005–Present"`.
  pub fn display(&self) -> String {
    match self.end {
      Some(end) => format!("{}–{}", self.start.year(), end.year()),
      None => format!("{}–Present", self.start.year()),
    }
  }
}

/// An inducted individual with lifetime statistics and biographical data.
///
/// The flat lifetime stats are stored as published at induction time, not
/// recomputed from the season list; career aggregates derived from seasons
/// live in [`crate::stats`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
  pub id:                  PlayerId,
  pub first_name:          String,
  pub last_name:           String,
  pub position:            String,
  pub birth_date:          NaiveDate,
  pub birthplace:          String,
  pub photo_url:           String,
  pub jersey_number:       u32,
  /// Full induction date; "induction year" displays take the year of this.
  pub inducted_on:         NaiveDate,
  pub description:         String,
  pub games_played:        u32,
  pub goals:               u32,
  pub assists:             u32,
  pub points:              u32,
  pub plus_minus:          i32,
  pub penalty_minutes:     u32,
  pub time_on_ice:         String,
  pub shots_on_goal:       u32,
  pub shooting_percentage: f64,
  pub faceoff_percentage:  Option<f64>,
  pub hits:                Option<u32>,
  pub blocks:              Option<u32>,
  pub achievements:        Vec<String>,
  pub seasons:             Vec<Season>,
  pub career:              Career,
}

impl Player {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// The seasons scoped to one competition kind, in seed order.
  pub fn seasons_of(&self, kind: SeasonKind) -> Vec<Season> {
    self
      .seasons
      .iter()
      .filter(|s| s.kind == kind)
      .cloned()
      .collect()
  }
}
