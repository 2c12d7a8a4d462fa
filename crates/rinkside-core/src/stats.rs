//! Career aggregation — derived statistics over a season collection.
//!
//! Every function here is deterministic, side-effect-free, and total:
//! defined for every input including the empty sequence. Callers pre-filter
//! the season list to one competition kind (see
//! [`Player::seasons_of`](crate::player::Player::seasons_of)).

use serde::{Deserialize, Serialize};

use crate::player::Season;

// ─── Counting stats ──────────────────────────────────────────────────────────

/// The summable per-season counting columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingStat {
  GamesPlayed,
  Goals,
  Assists,
  Points,
  PenaltyMinutes,
  ShotsOnGoal,
}

/// Arithmetic sum of one counting column. Empty input sums to 0.
pub fn sum_stat(seasons: &[Season], stat: CountingStat) -> u64 {
  seasons
    .iter()
    .map(|s| {
      u64::from(match stat {
        CountingStat::GamesPlayed => s.games_played,
        CountingStat::Goals => s.goals,
        CountingStat::Assists => s.assists,
        CountingStat::Points => s.points,
        CountingStat::PenaltyMinutes => s.penalty_minutes,
        CountingStat::ShotsOnGoal => s.shots_on_goal,
      })
    })
    .sum()
}

// ─── Plus/minus ──────────────────────────────────────────────────────────────

/// Signed sum of per-season plus/minus.
pub fn career_plus_minus(seasons: &[Season]) -> i64 {
  seasons.iter().map(|s| i64::from(s.plus_minus)).sum()
}

/// Display form: an explicit leading `+` only when strictly positive
/// (`"+520"`, `"-35"`, `"0"`).
pub fn format_plus_minus(total: i64) -> String {
  if total > 0 { format!("+{total}") } else { total.to_string() }
}

// ─── Time on ice ─────────────────────────────────────────────────────────────

/// Parse a `"m:ss"` time-on-ice string into total seconds.
/// Returns `None` for anything that is not two colon-separated numbers.
pub fn parse_time_on_ice(value: &str) -> Option<u32> {
  let (minutes, seconds) = value.split_once(':')?;
  let minutes: u32 = minutes.parse().ok()?;
  let seconds: u32 = seconds.parse().ok()?;
  if seconds >= 60 {
    return None;
  }
  Some(minutes * 60 + seconds)
}

/// Format total seconds back to `"m:ss"`, seconds zero-padded.
pub fn format_time_on_ice(total_seconds: u32) -> String {
  format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Mean per-season time on ice, rounded to the nearest whole second.
///
/// An empty season list returns the `"0:00"` sentinel rather than dividing
/// by zero. Seasons whose string fails to parse are skipped; load-time
/// validation makes that unreachable for seeded data.
pub fn average_time_on_ice(seasons: &[Season]) -> String {
  let totals: Vec<u32> = seasons
    .iter()
    .filter_map(|s| parse_time_on_ice(&s.time_on_ice))
    .collect();
  if totals.is_empty() {
    return format_time_on_ice(0);
  }
  let sum: u64 = totals.iter().map(|&t| u64::from(t)).sum();
  let mean = (sum as f64 / totals.len() as f64).round() as u32;
  format_time_on_ice(mean)
}

// ─── Percentages ─────────────────────────────────────────────────────────────

fn round_one_decimal(value: f64) -> f64 { (value * 10.0).round() / 10.0 }

/// `100 * Σgoals / Σshots`, one decimal place. Zero shots yields `0.0`,
/// never a division by zero. Sum-based, so reordering seasons cannot change
/// the result.
pub fn career_shooting_percentage(seasons: &[Season]) -> f64 {
  let goals = sum_stat(seasons, CountingStat::Goals);
  let shots = sum_stat(seasons, CountingStat::ShotsOnGoal);
  if shots == 0 {
    return 0.0;
  }
  round_one_decimal(goals as f64 / shots as f64 * 100.0)
}

/// Arithmetic mean of the seasons that carry a faceoff percentage, one
/// decimal place. `None` when no season has one — "not applicable", not 0.
pub fn career_faceoff_percentage(seasons: &[Season]) -> Option<f64> {
  let values: Vec<f64> =
    seasons.iter().filter_map(|s| s.faceoff_percentage).collect();
  if values.is_empty() {
    return None;
  }
  let mean = values.iter().sum::<f64>() / values.len() as f64;
  Some(round_one_decimal(mean))
}

// ─── Teams ───────────────────────────────────────────────────────────────────

/// Distinct team codes in order of first appearance, comma-joined for
/// display (e.g. `"EDM, LAK, STL, NYR"`).
pub fn team_list(seasons: &[Season]) -> String {
  let mut teams: Vec<&str> = Vec::new();
  for season in seasons {
    if !teams.contains(&season.team.as_str()) {
      teams.push(&season.team);
    }
  }
  teams.join(", ")
}

// ─── Bundled summary ─────────────────────────────────────────────────────────

/// The full derived career line for one competition slice, as rendered on a
/// profile page's totals row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSummary {
  pub teams:               String,
  pub games_played:        u64,
  pub goals:               u64,
  pub assists:             u64,
  pub points:              u64,
  /// Pre-formatted with the leading-`+` rule.
  pub plus_minus:          String,
  pub penalty_minutes:     u64,
  pub average_time_on_ice: String,
  pub shots_on_goal:       u64,
  pub shooting_percentage: f64,
  /// `None` renders as "N/A".
  pub faceoff_percentage:  Option<f64>,
}

impl CareerSummary {
  pub fn from_seasons(seasons: &[Season]) -> Self {
    Self {
      teams:               team_list(seasons),
      games_played:        sum_stat(seasons, CountingStat::GamesPlayed),
      goals:               sum_stat(seasons, CountingStat::Goals),
      assists:             sum_stat(seasons, CountingStat::Assists),
      points:              sum_stat(seasons, CountingStat::Points),
      plus_minus:          format_plus_minus(career_plus_minus(seasons)),
      penalty_minutes:     sum_stat(seasons, CountingStat::PenaltyMinutes),
      average_time_on_ice: average_time_on_ice(seasons),
      shots_on_goal:       sum_stat(seasons, CountingStat::ShotsOnGoal),
      shooting_percentage: career_shooting_percentage(seasons),
      faceoff_percentage:  career_faceoff_percentage(seasons),
    }
  }
}
