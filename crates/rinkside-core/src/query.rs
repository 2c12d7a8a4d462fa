//! Roster listing — filter, sort, and paginate a player snapshot.
//!
//! Everything here is a pure function over an already-resident slice.
//! Backends hand the snapshot to [`run`]; no predicate or comparator ever
//! fails. A filter value that cannot be interpreted (e.g. a non-numeric
//! era) degrades to "matches nothing" rather than erroring.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// The sentinel filter value meaning "no constraint".
const ALL: &str = "all";

// ─── Filter ──────────────────────────────────────────────────────────────────

/// A conjunction of optional predicates. `None` (or the `"all"` sentinel)
/// on any criterion means that criterion excludes nothing.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
  /// Case-insensitive substring match against first or last name.
  pub name:     Option<String>,
  /// Exact position match, e.g. `"Goalie"`.
  pub position: Option<String>,
  /// Decade of career start as a year string, e.g. `"1980"` for the 1980s.
  pub era:      Option<String>,
}

impl RosterFilter {
  pub fn matches(&self, player: &Player) -> bool {
    self.matches_name(player)
      && self.matches_position(player)
      && self.matches_era(player)
  }

  fn matches_name(&self, player: &Player) -> bool {
    match self.name.as_deref() {
      None | Some("") => true,
      Some(needle) => {
        let needle = needle.to_lowercase();
        player.first_name.to_lowercase().contains(&needle)
          || player.last_name.to_lowercase().contains(&needle)
      }
    }
  }

  fn matches_position(&self, player: &Player) -> bool {
    match self.position.as_deref() {
      None | Some(ALL) => true,
      Some(position) => player.position == position,
    }
  }

  fn matches_era(&self, player: &Player) -> bool {
    match self.era.as_deref() {
      None | Some(ALL) => true,
      Some(era) => match era.parse::<i32>() {
        Ok(decade) => {
          let start = player.career.start_year();
          start >= decade && start < decade.saturating_add(10)
        }
        // Uninterpretable era values exclude everything, per the
        // degrade-to-no-match contract.
        Err(_) => false,
      },
    }
  }
}

// ─── Sort ────────────────────────────────────────────────────────────────────

/// The sortable roster columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
  LastName,
  GamesPlayed,
  Goals,
  Assists,
  Points,
  PlusMinus,
  PenaltyMinutes,
  TimeOnIce,
  ShotsOnGoal,
  ShootingPercentage,
  FaceoffPercentage,
  Hits,
  Blocks,
}

impl SortField {
  /// Natural ordering of the column's value type: numeric for counts,
  /// lexicographic for strings. Absent optional values order before
  /// present ones.
  pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
    match self {
      Self::LastName => a.last_name.cmp(&b.last_name),
      Self::GamesPlayed => a.games_played.cmp(&b.games_played),
      Self::Goals => a.goals.cmp(&b.goals),
      Self::Assists => a.assists.cmp(&b.assists),
      Self::Points => a.points.cmp(&b.points),
      Self::PlusMinus => a.plus_minus.cmp(&b.plus_minus),
      Self::PenaltyMinutes => a.penalty_minutes.cmp(&b.penalty_minutes),
      Self::TimeOnIce => a.time_on_ice.cmp(&b.time_on_ice),
      Self::ShotsOnGoal => a.shots_on_goal.cmp(&b.shots_on_goal),
      Self::ShootingPercentage => {
        a.shooting_percentage.total_cmp(&b.shooting_percentage)
      }
      Self::FaceoffPercentage => {
        cmp_opt_f64(a.faceoff_percentage, b.faceoff_percentage)
      }
      Self::Hits => a.hits.cmp(&b.hits),
      Self::Blocks => a.blocks.cmp(&b.blocks),
    }
  }
}

fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => a.total_cmp(&b),
    (None, Some(_)) => Ordering::Less,
    (Some(_), None) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  Asc,
  Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
  pub field:     SortField,
  pub direction: SortDirection,
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// A 1-indexed page request. Page 0 is treated as page 1; a page past the
/// end yields an empty slice, never an error.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
  pub page:     usize,
  pub per_page: usize,
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// Parameters for one listing pass: filter, then sort, then paginate.
#[derive(Debug, Clone)]
pub struct RosterQuery {
  pub filter: RosterFilter,
  /// `None` preserves filtered order.
  pub sort:   Option<SortSpec>,
  pub page:   PageRequest,
}

/// One page of a filtered listing. `total` counts the post-filter,
/// pre-pagination result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPage {
  pub players: Vec<Player>,
  pub total:   usize,
}

/// Run a listing query against a roster snapshot.
///
/// The sort is stable, so ties (and the no-sort case) keep the snapshot's
/// order.
pub fn run(players: &[Player], query: &RosterQuery) -> RosterPage {
  let mut matched: Vec<Player> = players
    .iter()
    .filter(|p| query.filter.matches(p))
    .cloned()
    .collect();

  if let Some(sort) = query.sort {
    matched.sort_by(|a, b| {
      let ord = sort.field.compare(a, b);
      match sort.direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
      }
    });
  }

  let total = matched.len();
  let start =
    query.page.page.saturating_sub(1).saturating_mul(query.page.per_page);
  let players = if start >= total {
    Vec::new()
  } else {
    matched
      .into_iter()
      .skip(start)
      .take(query.page.per_page)
      .collect()
  };

  RosterPage { players, total }
}
