//! Router tests against the builtin seed.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use rinkside_store_mem::MemRoster;
use serde_json::Value;
use tower::ServiceExt as _;

use crate::api_router;

fn app() -> Router {
  let roster = MemRoster::builtin().expect("builtin seed");
  api_router(Arc::new(roster))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
  let response = app
    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
    .await
    .unwrap();
  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  // Extractor rejections (bad path/query input) have plain-text bodies.
  let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
  (status, json)
}

// ─── Roster and lookup ───────────────────────────────────────────────────────

#[tokio::test]
async fn players_returns_the_full_roster() {
  let (status, body) = get(app(), "/players").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn get_one_returns_the_matching_player() {
  let (status, body) = get(app(), "/players/1").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["last_name"], "Gretzky");
  assert_eq!(body["career"]["end"], Value::Null);
}

#[tokio::test]
async fn get_one_unknown_id_is_404() {
  let (status, body) = get(app(), "/players/999").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn get_one_non_numeric_id_is_400() {
  let (status, _) = get(app(), "/players/gretzky").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn latest_is_the_most_recent_inductee() {
  let (status, body) = get(app(), "/players/latest").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["last_name"], "Crosby");
}

// ─── Related ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn related_defaults_to_four_and_excludes_the_subject() {
  let (status, body) = get(app(), "/players/related/1").await;
  assert_eq!(status, StatusCode::OK);
  let related = body.as_array().unwrap();
  assert_eq!(related.len(), 4);
  assert!(related.iter().all(|p| p["id"] != 1));
  // Fellow centers rank first.
  assert_eq!(related[0]["last_name"], "Crosby");
  assert_eq!(related[1]["last_name"], "Lemieux");
}

#[tokio::test]
async fn related_respects_an_explicit_limit() {
  let (status, body) = get(app(), "/players/related/1?limit=2").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn related_unknown_subject_is_an_empty_list() {
  let (status, body) = get(app(), "/players/related/999").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.as_array().unwrap().is_empty());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_defaults_to_page_one_of_ten() {
  let (status, body) = get(app(), "/players/list").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["total"], 6);
  assert_eq!(body["players"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn list_page_past_the_end_is_empty() {
  let (status, body) = get(app(), "/players/list?page=2").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["total"], 6);
  assert!(body["players"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_filters_by_position() {
  let (status, body) = get(app(), "/players/list?position=Goalie").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["total"], 1);
  assert_eq!(body["players"][0]["last_name"], "Roy");
}

#[tokio::test]
async fn list_all_sentinel_excludes_nothing() {
  let (status, body) =
    get(app(), "/players/list?position=all&era=all").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["total"], 6);
}

#[tokio::test]
async fn list_era_filter_selects_career_start_decade() {
  let (status, body) = get(app(), "/players/list?era=2000").await;
  assert_eq!(status, StatusCode::OK);
  // Crosby and Ovechkin both started in 2005.
  assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn list_sorts_by_points_descending() {
  let (status, body) =
    get(app(), "/players/list?sort=points&dir=desc").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["players"][0]["last_name"], "Gretzky");
  assert_eq!(body["players"][5]["last_name"], "Roy");
}

#[tokio::test]
async fn list_unknown_sort_field_is_400() {
  let (status, _) = get(app(), "/players/list?sort=charisma").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_zero_per_page_is_400() {
  let (status, body) = get(app(), "/players/list?per_page=0").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("per_page"));
}

// ─── Career summary ──────────────────────────────────────────────────────────

#[tokio::test]
async fn career_defaults_to_regular_seasons() {
  let (status, body) = get(app(), "/players/1/career").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["teams"], "EDM");
  assert_eq!(body["goals"], 195);
  assert_eq!(body["points"], 564);
  assert_eq!(body["plus_minus"], "+167");
  assert_eq!(body["average_time_on_ice"], "22:24");
  assert_eq!(body["shooting_percentage"], 21.8);
  assert_eq!(body["faceoff_percentage"], 50.7);
}

#[tokio::test]
async fn career_kind_selects_the_competition_slice() {
  let (status, body) = get(app(), "/players/4/career?kind=international").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["teams"], "CAN");
  assert_eq!(body["goals"], 4);
  assert_eq!(body["shooting_percentage"], 22.2);
}

#[tokio::test]
async fn career_for_a_goalie_has_zero_shooting_and_no_faceoffs() {
  let (status, body) = get(app(), "/players/6/career").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["shooting_percentage"], 0.0);
  assert_eq!(body["faceoff_percentage"], Value::Null);
  assert_eq!(body["teams"], "MTL, COL");
}

#[tokio::test]
async fn career_unknown_player_is_404() {
  let (status, _) = get(app(), "/players/999/career").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn career_with_no_seasons_of_that_kind_is_all_sentinels() {
  // Orr has no international seasons in the seed.
  let (status, body) = get(app(), "/players/3/career?kind=international").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["games_played"], 0);
  assert_eq!(body["plus_minus"], "0");
  assert_eq!(body["average_time_on_ice"], "0:00");
  assert_eq!(body["shooting_percentage"], 0.0);
  assert_eq!(body["faceoff_percentage"], Value::Null);
  assert_eq!(body["teams"], "");
}
