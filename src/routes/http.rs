//! HTTP endpoint handlers. These are thin wrappers that forward to the content
//! queries in `logic` and the lookups on `AppState`.
//! Each handler is instrumented and logs its filters and result size.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use tracing::{info, instrument};

use crate::domain::{CulturalFacts, LearningContent, Level, Proverb, Quiz, Riddle, Story};
use crate::error::ApiError;
use crate::logic::{find_learning, find_quizzes, find_stories};
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_quizzes(
  State(state): State<Arc<AppState>>,
  Query(q): Query<QuizQuery>,
) -> Json<Vec<Quiz>> {
  let quizzes = find_quizzes(&state, q.category.as_deref(), q.difficulty.as_deref());
  info!(target: "content", count = quizzes.len(), "HTTP quizzes served");
  Json(quizzes)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_stories(
  State(state): State<Arc<AppState>>,
  Query(q): Query<StoryQuery>,
) -> Json<Vec<Story>> {
  let stories = find_stories(&state, q.category.as_deref());
  info!(target: "content", count = stories.len(), "HTTP stories served");
  Json(stories)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_story(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Story>, ApiError> {
  state.get_story(&id).cloned().map(Json).ok_or(ApiError::NotFound("Story"))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_riddles(State(state): State<Arc<AppState>>) -> Json<Vec<Riddle>> {
  Json(state.store.riddles.all().to_vec())
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_riddle(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Riddle>, ApiError> {
  state.get_riddle(&id).cloned().map(Json).ok_or(ApiError::NotFound("Riddle"))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_proverbs(State(state): State<Arc<AppState>>) -> Json<Vec<Proverb>> {
  Json(state.store.proverbs.all().to_vec())
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_proverb(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Proverb>, ApiError> {
  state.get_proverb(&id).cloned().map(Json).ok_or(ApiError::NotFound("Proverb"))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_learning(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LearningQuery>,
) -> Json<Vec<LearningContent>> {
  let content = find_learning(&state, q.level.as_deref(), q.category.as_deref());
  info!(target: "content", count = content.len(), "HTTP learning content served");
  Json(content)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_levels(State(state): State<Arc<AppState>>) -> Json<Vec<Level>> {
  Json(state.levels.to_vec())
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_level(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Level>, ApiError> {
  state.get_level(&id).cloned().map(Json).ok_or(ApiError::NotFound("Level"))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_culture(State(state): State<Arc<AppState>>) -> Json<CulturalFacts> {
  Json(state.culture.clone())
}
