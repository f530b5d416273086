//! Content queries shared by the HTTP handlers and WebSocket sessions.
//!
//! Filter precedence:
//!   - quizzes: `category` wins over `difficulty`; neither returns everything
//!   - stories: optional `category`
//!   - learning content: `level` wins over `category`; neither returns nothing
//!
//! Empty filter values are treated as absent; whitespace is not empty.

use tracing::{debug, instrument};

use crate::domain::{LearningContent, Quiz, Story};
use crate::state::AppState;
use crate::util::non_empty;

#[instrument(level = "debug", skip(state))]
pub fn find_quizzes(state: &AppState, category: Option<&str>, difficulty: Option<&str>) -> Vec<Quiz> {
  let quizzes = &state.store.quizzes;
  let out: Vec<Quiz> = match (non_empty(category), non_empty(difficulty)) {
    (Some(c), _) => quizzes.filter(|q| q.category == c).cloned().collect(),
    (None, Some(d)) => quizzes.filter(|q| q.difficulty == d).cloned().collect(),
    (None, None) => quizzes.all().to_vec(),
  };
  debug!(target: "content", count = out.len(), "quizzes resolved");
  out
}

#[instrument(level = "debug", skip(state))]
pub fn find_stories(state: &AppState, category: Option<&str>) -> Vec<Story> {
  match non_empty(category) {
    Some(c) => state.store.stories.filter(|s| s.category == c).cloned().collect(),
    None => state.store.stories.all().to_vec(),
  }
}

#[instrument(level = "debug", skip(state))]
pub fn find_learning(state: &AppState, level: Option<&str>, category: Option<&str>) -> Vec<LearningContent> {
  let learning = &state.store.learning;
  let mut out: Vec<LearningContent> = match (non_empty(level), non_empty(category)) {
    (Some(l), _) => learning.filter(|c| c.level == l).cloned().collect(),
    (None, Some(c)) => learning.filter(|x| x.category == c).cloned().collect(),
    (None, None) => Vec::new(),
  };
  // stable: equal order_index keeps insertion order
  out.sort_by_key(|c| c.order_index);
  out
}
