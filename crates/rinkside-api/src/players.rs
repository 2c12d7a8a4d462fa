//! Handlers for `/players` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/players` | Full roster in seed order |
//! | `GET`  | `/players/list` | Filtered/sorted/paginated listing |
//! | `GET`  | `/players/latest` | Most recent inductee; 404 on empty roster |
//! | `GET`  | `/players/:id` | 404 if not found |
//! | `GET`  | `/players/:id/career` | Derived career line, `?kind=regular\|playoff\|international` |
//! | `GET`  | `/players/related/:id` | Up to `?limit=` related players (default 4) |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use rinkside_core::{
  player::{Player, PlayerId, SeasonKind},
  query::{
    PageRequest, RosterFilter, RosterPage, RosterQuery, SortDirection,
    SortField, SortSpec,
  },
  stats::CareerSummary,
  store::RosterStore,
};
use serde::Deserialize;

use crate::error::ApiError;

/// Page size of the original roster table.
const DEFAULT_PER_PAGE: usize = 10;

/// Length of the "related players" strip on a profile page.
const DEFAULT_RELATED_LIMIT: usize = 4;

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
  ApiError::Store(Box::new(e))
}

// ─── Full roster ──────────────────────────────────────────────────────────────

/// `GET /players`
pub async fn all<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Player>>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let players = store.all_players().await.map_err(store_err)?;
  Ok(Json(players))
}

// ─── Listing ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Case-insensitive substring match on first or last name.
  pub search:   Option<String>,
  /// Exact position; `"all"` (or absence) excludes nothing.
  pub position: Option<String>,
  /// Career-start decade as a year string, e.g. `1980`; `"all"` excludes
  /// nothing, an uninterpretable value matches nothing.
  pub era:      Option<String>,
  pub sort:     Option<SortField>,
  pub dir:      Option<SortDirection>,
  pub page:     Option<usize>,
  pub per_page: Option<usize>,
}

/// `GET /players/list[?search=...][&position=...][&era=...][&sort=...][&dir=...][&page=...][&per_page=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<RosterPage>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
  if per_page == 0 {
    return Err(ApiError::BadRequest("per_page must be positive".into()));
  }

  let query = RosterQuery {
    filter: RosterFilter {
      name:     params.search,
      position: params.position,
      era:      params.era,
    },
    sort:   params.sort.map(|field| SortSpec {
      field,
      direction: params.dir.unwrap_or(SortDirection::Asc),
    }),
    page:   PageRequest { page: params.page.unwrap_or(1), per_page },
  };

  let page = store.list(&query).await.map_err(store_err)?;
  Ok(Json(page))
}

// ─── Latest inductee ──────────────────────────────────────────────────────────

/// `GET /players/latest`
pub async fn latest<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Player>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let player = store
    .latest_inductee()
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound("no inductees found".into()))?;
  Ok(Json(player))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /players/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<PlayerId>,
) -> Result<Json<Player>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let player = store
    .player_by_id(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("player {id} not found")))?;
  Ok(Json(player))
}

// ─── Career summary ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct CareerParams {
  pub kind: Option<SeasonKind>,
}

/// `GET /players/:id/career[?kind=regular|playoff|international]`
pub async fn career<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<PlayerId>,
  Query(params): Query<CareerParams>,
) -> Result<Json<CareerSummary>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let player = store
    .player_by_id(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("player {id} not found")))?;

  let kind = params.kind.unwrap_or(SeasonKind::Regular);
  let seasons = player.seasons_of(kind);
  Ok(Json(CareerSummary::from_seasons(&seasons)))
}

// ─── Related players ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct RelatedParams {
  pub limit: Option<usize>,
}

/// `GET /players/related/:id[?limit=...]`
///
/// An unknown subject id yields an empty list rather than a 404: the strip
/// is decorative and empty is the right degradation.
pub async fn related<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<PlayerId>,
  Query(params): Query<RelatedParams>,
) -> Result<Json<Vec<Player>>, ApiError>
where
  S: RosterStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let limit = params.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
  let players =
    store.related_players(id, limit).await.map_err(store_err)?;
  Ok(Json(players))
}
