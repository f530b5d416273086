//! Lesson progression: level selection, lesson sequencing, exercise answer
//! reveal and per-level completion counters.
//!
//! ```text
//! LevelSelect --select_level--> InLesson { level, lesson_index, reveal }
//!      ^                              |  complete_lesson / select_answer
//!      +------exit_to_level_select----+
//! ```
//!
//! Completion counters survive exits and only ever grow, capped at the level's
//! lesson count. Completing the last lesson keeps the learner on it.

use std::{collections::BTreeMap, sync::Arc};

use serde::Serialize;

use crate::domain::{Lesson, Level};

/// Answer state of the current exercise lesson.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerReveal {
  pub selected_answer: Option<usize>,
  pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonState {
  LevelSelect,
  InLesson {
    level: usize,
    lesson_index: usize,
    reveal: AnswerReveal,
  },
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum LessonSnapshot {
  #[serde(rename_all = "camelCase")]
  LevelSelect {
    completion: BTreeMap<String, usize>,
  },
  #[serde(rename_all = "camelCase")]
  InLesson {
    level: String,
    lesson_index: usize,
    lesson_count: usize,
    lesson: Lesson,
    selected_answer: Option<usize>,
    revealed: bool,
    completion: BTreeMap<String, usize>,
  },
}

#[derive(Clone, Debug)]
pub struct LessonProgress {
  levels: Arc<[Level]>,
  state: LessonState,
  completion: BTreeMap<String, usize>,
}

impl LessonProgress {
  pub fn new(levels: Arc<[Level]>) -> Self {
    Self { levels, state: LessonState::LevelSelect, completion: BTreeMap::new() }
  }

  #[cfg(test)]
  pub fn state(&self) -> &LessonState {
    &self.state
  }

  /// Completion counter for a level id (0 if never completed anything).
  #[cfg(test)]
  pub fn completion(&self, level_id: &str) -> usize {
    self.completion.get(level_id).copied().unwrap_or(0)
  }

  pub fn current_lesson(&self) -> Option<&Lesson> {
    match &self.state {
      LessonState::InLesson { level, lesson_index, .. } => {
        self.levels.get(*level)?.lessons.get(*lesson_index)
      }
      LessonState::LevelSelect => None,
    }
  }

  /// Enter a level at its first lesson. Unknown ids and levels without lessons
  /// leave the state untouched.
  pub fn select_level(&mut self, level_id: &str) -> bool {
    let Some(level) = self.levels.iter().position(|l| l.id == level_id && !l.lessons.is_empty()) else {
      return false;
    };
    self.state = LessonState::InLesson { level, lesson_index: 0, reveal: AnswerReveal::default() };
    true
  }

  /// Mark the current lesson done and move to the next one, if any.
  pub fn complete_lesson(&mut self) -> bool {
    let LessonState::InLesson { level, lesson_index, reveal } = &mut self.state else {
      return false;
    };
    let Some(lvl) = self.levels.get(*level) else {
      return false;
    };
    let count = lvl.lessons.len();
    if count == 0 {
      return false;
    }

    let reached = (*lesson_index + 1).min(count);
    let mark = self.completion.entry(lvl.id.clone()).or_insert(0);
    *mark = (*mark).max(reached);

    if *lesson_index + 1 < count {
      *lesson_index += 1;
      *reveal = AnswerReveal::default();
    }
    true
  }

  /// Record an answer on the current exercise and reveal it. Never advances.
  pub fn select_answer(&mut self, option: usize) -> bool {
    let options = match self.current_lesson().and_then(Lesson::exercise_options) {
      Some(n) => n,
      None => return false,
    };
    let LessonState::InLesson { reveal, .. } = &mut self.state else {
      return false;
    };
    if reveal.revealed || option >= options {
      return false;
    }
    *reveal = AnswerReveal { selected_answer: Some(option), revealed: true };
    true
  }

  pub fn exit_to_level_select(&mut self) {
    self.state = LessonState::LevelSelect;
  }

  pub fn snapshot(&self) -> LessonSnapshot {
    let completion = self.completion.clone();
    match &self.state {
      LessonState::InLesson { level, lesson_index, reveal } => {
        match self.levels.get(*level).and_then(|l| Some((l, l.lessons.get(*lesson_index)?))) {
          Some((lvl, lesson)) => LessonSnapshot::InLesson {
            level: lvl.id.clone(),
            lesson_index: *lesson_index,
            lesson_count: lvl.lessons.len(),
            lesson: lesson.clone(),
            selected_answer: reveal.selected_answer,
            revealed: reveal.revealed,
            completion,
          },
          None => LessonSnapshot::LevelSelect { completion },
        }
      }
      LessonState::LevelSelect => LessonSnapshot::LevelSelect { completion },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::LessonBody;
  use crate::seeds::seed_levels;

  fn progress() -> LessonProgress {
    LessonProgress::new(seed_levels().into())
  }

  fn index(p: &LessonProgress) -> Option<usize> {
    match p.state() {
      LessonState::InLesson { lesson_index, .. } => Some(*lesson_index),
      LessonState::LevelSelect => None,
    }
  }

  #[test]
  fn beginner_walkthrough_clamps_at_last_lesson() {
    let mut p = progress();
    assert!(p.select_level("beginner"));
    assert_eq!(index(&p), Some(0));

    assert!(p.complete_lesson());
    assert_eq!((index(&p), p.completion("beginner")), (Some(1), 1));
    assert!(p.complete_lesson());
    assert_eq!((index(&p), p.completion("beginner")), (Some(2), 2));
    assert!(p.complete_lesson());
    assert_eq!((index(&p), p.completion("beginner")), (Some(2), 3));

    p.complete_lesson();
    assert_eq!((index(&p), p.completion("beginner")), (Some(2), 3));
  }

  #[test]
  fn completion_is_monotonic_across_reentry() {
    let mut p = progress();
    p.select_level("intermediate");
    p.complete_lesson();
    p.complete_lesson();
    assert_eq!(p.completion("intermediate"), 2);

    p.exit_to_level_select();
    assert_eq!(p.state(), &LessonState::LevelSelect);
    assert_eq!(p.completion("intermediate"), 2);

    p.select_level("intermediate");
    assert_eq!(index(&p), Some(0));
    p.complete_lesson();
    assert_eq!(p.completion("intermediate"), 2);
  }

  #[test]
  fn unknown_level_is_rejected() {
    let mut p = progress();
    assert!(!p.select_level("expert"));
    assert_eq!(p.state(), &LessonState::LevelSelect);
  }

  #[test]
  fn level_without_lessons_cannot_be_entered() {
    let mut levels = seed_levels();
    levels.push(Level {
      id: "empty".into(),
      title: "Empty".into(),
      subtitle: String::new(),
      topics: Vec::new(),
      lessons: Vec::new(),
    });
    let mut p = LessonProgress::new(levels.into());
    assert!(!p.select_level("empty"));
    assert_eq!(p.state(), &LessonState::LevelSelect);
    assert!(!p.complete_lesson());
    let s = serde_json::to_value(p.snapshot()).expect("json");
    assert_eq!(s["view"], "level_select");
  }

  #[test]
  fn operations_in_level_select_are_inert() {
    let mut p = progress();
    assert!(!p.complete_lesson());
    assert!(!p.select_answer(0));
    assert!(p.completion.is_empty());
  }

  #[test]
  fn exercise_answer_reveals_without_advancing() {
    let mut p = progress();
    p.select_level("beginner");
    assert!(!p.select_answer(1), "vocabulary lesson takes no answers");

    p.complete_lesson();
    assert!(matches!(p.current_lesson().map(|l| &l.body), Some(LessonBody::Exercise { .. })));
    assert!(!p.select_answer(7));
    assert!(p.select_answer(0));
    assert!(!p.select_answer(1));
    assert_eq!(index(&p), Some(1));
    match p.state() {
      LessonState::InLesson { reveal, .. } => {
        assert_eq!(*reveal, AnswerReveal { selected_answer: Some(0), revealed: true });
      }
      other => panic!("unexpected state {other:?}"),
    }

    p.complete_lesson();
    match p.state() {
      LessonState::InLesson { reveal, .. } => assert_eq!(*reveal, AnswerReveal::default()),
      other => panic!("unexpected state {other:?}"),
    }
  }

  #[test]
  fn selecting_a_level_clears_reveal() {
    let mut p = progress();
    p.select_level("beginner");
    p.complete_lesson();
    p.select_answer(1);
    p.select_level("beginner");
    assert_eq!(
      p.state(),
      &LessonState::InLesson { level: 0, lesson_index: 0, reveal: AnswerReveal::default() }
    );
  }

  #[test]
  fn snapshot_reports_view_and_completion() {
    let mut p = progress();
    let s = serde_json::to_value(p.snapshot()).expect("json");
    assert_eq!(s["view"], "level_select");

    p.select_level("advanced");
    p.complete_lesson();
    let s = serde_json::to_value(p.snapshot()).expect("json");
    assert_eq!(s["view"], "in_lesson");
    assert_eq!(s["level"], "advanced");
    assert_eq!(s["lessonIndex"], 1);
    assert_eq!(s["lessonCount"], 3);
    assert_eq!(s["revealed"], false);
    assert_eq!(s["completion"]["advanced"], 1);
    assert_eq!(s["lesson"]["type"], "cultural");
  }
}
