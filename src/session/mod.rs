//! Per-client browsing session: navigation, lesson progression, quiz and riddle
//! reveal state. One session lives for the duration of one WebSocket connection
//! and is never shared.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Level, Quiz, Riddle};

pub mod lessons;
pub mod navigation;
pub mod quiz;
pub mod reveal;

use lessons::{LessonProgress, LessonSnapshot};
use navigation::{Navigation, Tab};
use quiz::{QuizEngine, QuizSnapshot};
use reveal::RevealToggle;

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiddleReveal {
  pub riddle_id: String,
  pub revealed: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
  pub active_tab: Tab,
  pub active_tab_label: &'static str,
  pub lessons: LessonSnapshot,
  pub quiz: QuizSnapshot,
  pub riddles: Vec<RiddleReveal>,
}

#[derive(Clone, Debug)]
pub struct BrowsingSession {
  pub navigation: Navigation,
  pub lessons: LessonProgress,
  pub quiz: QuizEngine,
  riddles: Vec<(String, RevealToggle)>,
}

impl BrowsingSession {
  pub fn new(levels: Arc<[Level]>, quizzes: Vec<Quiz>, riddles: &[Riddle]) -> Self {
    Self {
      navigation: Navigation::default(),
      lessons: LessonProgress::new(levels),
      quiz: QuizEngine::new(quizzes),
      riddles: riddles.iter().map(|r| (r.id.clone(), RevealToggle::default())).collect(),
    }
  }

  /// Flip a riddle's answer visibility. `None` if the riddle isn't displayed.
  pub fn toggle_riddle(&mut self, riddle_id: &str) -> Option<bool> {
    self.riddles
      .iter_mut()
      .find(|(id, _)| id == riddle_id)
      .map(|(_, t)| t.toggle())
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    let active = self.navigation.active();
    SessionSnapshot {
      active_tab: active,
      active_tab_label: active.label(),
      lessons: self.lessons.snapshot(),
      quiz: self.quiz.snapshot(),
      riddles: self
        .riddles
        .iter()
        .map(|(id, t)| RiddleReveal { riddle_id: id.clone(), revealed: t.is_revealed() })
        .collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seeds::{seed_levels, seed_quizzes, seed_riddles};

  fn session() -> BrowsingSession {
    BrowsingSession::new(seed_levels().into(), seed_quizzes(), &seed_riddles())
  }

  #[test]
  fn engines_are_independent() {
    let mut s = session();
    s.navigation.select_tab(Tab::Interactive);
    s.quiz.select_answer(0);
    s.lessons.select_level("beginner");
    s.navigation.select_tab(Tab::Learning);

    assert_eq!(s.quiz.score(), 1);
    assert!(s.lessons.current_lesson().is_some());
    assert_eq!(s.navigation.active(), Tab::Learning);
  }

  #[test]
  fn riddle_toggles_are_per_riddle() {
    let mut s = session();
    assert_eq!(s.toggle_riddle("1"), Some(true));
    assert_eq!(s.toggle_riddle("missing"), None);
    let snap = s.snapshot();
    assert_eq!(snap.riddles[0], RiddleReveal { riddle_id: "1".into(), revealed: true });
    assert!(!snap.riddles[1].revealed);
    assert_eq!(s.toggle_riddle("1"), Some(false));
  }

  #[test]
  fn snapshot_serializes_camel_case() {
    let s = session();
    let v = serde_json::to_value(s.snapshot()).expect("json");
    assert_eq!(v["activeTab"], "about");
    assert_eq!(v["activeTabLabel"], "About");
    assert_eq!(v["quiz"]["currentIndex"], 0);
    assert_eq!(v["quiz"]["total"], 3);
    assert_eq!(v["lessons"]["view"], "level_select");
  }
}
