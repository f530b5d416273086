//! In-memory content store: ordered, read-only collections with id lookup.
//!
//! Built once at startup from the optional content bank followed by the
//! built-in seeds. Bank entries win on id collisions; seeds never overwrite.

use std::collections::HashMap;

use tracing::{error, info};
use uuid::Uuid;

use crate::config::ContentConfig;
use crate::domain::{LearningContent, Level, Proverb, Quiz, Riddle, Story};
use crate::seeds::{
  seed_learning_content, seed_levels, seed_proverbs, seed_quizzes, seed_riddles, seed_stories,
};

/// Records addressable by a string id unique within their collection.
pub trait Keyed {
  fn id(&self) -> &str;
  fn set_id(&mut self, id: String);
}

macro_rules! keyed {
  ($($t:ty),* $(,)?) => {
    $(impl Keyed for $t {
      fn id(&self) -> &str { &self.id }
      fn set_id(&mut self, id: String) { self.id = id; }
    })*
  };
}

keyed!(Quiz, Story, Riddle, Proverb, LearningContent, Level);

/// Insertion-ordered collection with an id index.
#[derive(Clone, Debug)]
pub struct Collection<T> {
  items: Vec<T>,
  index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
  fn default() -> Self {
    Self { items: Vec::new(), index: HashMap::new() }
  }
}

impl<T: Keyed> Collection<T> {
  /// Insert unless the id is taken. An empty id gets a fresh UUID.
  /// Returns false when the item was dropped as a duplicate.
  pub fn insert_if_absent(&mut self, mut item: T) -> bool {
    if item.id().is_empty() {
      item.set_id(Uuid::new_v4().to_string());
    }
    if self.index.contains_key(item.id()) {
      return false;
    }
    self.index.insert(item.id().to_string(), self.items.len());
    self.items.push(item);
    true
  }

  pub fn get(&self, id: &str) -> Option<&T> {
    self.index.get(id).map(|&i| &self.items[i])
  }

  pub fn all(&self) -> &[T] {
    &self.items
  }

  pub fn filter<'a>(&'a self, pred: impl Fn(&T) -> bool + 'a) -> impl Iterator<Item = &'a T> + 'a {
    self.items.iter().filter(move |it| pred(it))
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  #[cfg(test)]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

#[derive(Clone, Debug, Default)]
pub struct ContentStore {
  pub quizzes: Collection<Quiz>,
  pub stories: Collection<Story>,
  pub riddles: Collection<Riddle>,
  pub proverbs: Collection<Proverb>,
  pub learning: Collection<LearningContent>,
  pub levels: Collection<Level>,
}

impl ContentStore {
  /// Bank first (validated), then seeds that don't collide with bank ids.
  pub fn build(cfg: Option<&ContentConfig>) -> Self {
    let mut store = ContentStore::default();

    if let Some(cfg) = cfg {
      for q in &cfg.quizzes {
        if !q.has_valid_answer() {
          error!(target: "content", id = %q.id, correct = q.correct_answer, options = q.options.len(), "Skipping bank quiz: correct answer out of range.");
          continue;
        }
        store.quizzes.insert_if_absent(q.clone());
      }
      for lvl in &cfg.levels {
        if let Some(bad) = lvl.lessons.iter().find(|l| !l.is_well_formed()) {
          error!(target: "content", level = %lvl.id, lesson = %bad.title, "Skipping bank level: exercise answer out of range.");
          continue;
        }
        if lvl.id.is_empty() {
          error!(target: "content", title = %lvl.title, "Skipping bank level: missing id.");
          continue;
        }
        if lvl.lessons.is_empty() {
          error!(target: "content", level = %lvl.id, "Skipping bank level: no lessons.");
          continue;
        }
        let mut lvl = lvl.clone();
        for lesson in lvl.lessons.iter_mut().filter(|l| l.id.is_empty()) {
          lesson.id = Uuid::new_v4().to_string();
        }
        store.levels.insert_if_absent(lvl);
      }
      for s in &cfg.stories {
        store.stories.insert_if_absent(s.clone());
      }
      for r in &cfg.riddles {
        store.riddles.insert_if_absent(r.clone());
      }
      for p in &cfg.proverbs {
        store.proverbs.insert_if_absent(p.clone());
      }
      for l in &cfg.learning {
        store.learning.insert_if_absent(l.clone());
      }
    }

    seed_quizzes().into_iter().for_each(|q| { store.quizzes.insert_if_absent(q); });
    seed_stories().into_iter().for_each(|s| { store.stories.insert_if_absent(s); });
    seed_riddles().into_iter().for_each(|r| { store.riddles.insert_if_absent(r); });
    seed_proverbs().into_iter().for_each(|p| { store.proverbs.insert_if_absent(p); });
    seed_learning_content().into_iter().for_each(|l| { store.learning.insert_if_absent(l); });
    seed_levels().into_iter().for_each(|l| { store.levels.insert_if_absent(l); });

    info!(
      target: "content",
      quizzes = store.quizzes.len(),
      stories = store.stories.len(),
      riddles = store.riddles.len(),
      proverbs = store.proverbs.len(),
      learning = store.learning.len(),
      levels = store.levels.len(),
      "Startup content inventory"
    );
    store
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn quiz(id: &str, correct: usize) -> Quiz {
    Quiz {
      id: id.into(),
      question: format!("Question {id}"),
      question_telugu: None,
      options: vec!["a".into(), "b".into()],
      correct_answer: correct,
      explanation: None,
      difficulty: "beginner".into(),
      category: "test".into(),
    }
  }

  #[test]
  fn seeds_only_store_is_populated() {
    let store = ContentStore::build(None);
    assert_eq!(store.quizzes.len(), seed_quizzes().len());
    assert_eq!(store.levels.len(), 3);
    assert!(store.stories.get("1").is_some());
    assert!(store.stories.get("nope").is_none());
    assert!(!store.riddles.is_empty());
  }

  #[test]
  fn bank_shadows_seed_ids_and_keeps_order() {
    let cfg = ContentConfig {
      quizzes: vec![quiz("1", 1), quiz("bank-only", 0)],
      ..Default::default()
    };
    let store = ContentStore::build(Some(&cfg));
    assert_eq!(store.quizzes.get("1").map(|q| q.category.as_str()), Some("test"));
    let ids: Vec<&str> = store.quizzes.all().iter().map(|q| q.id.as_str()).collect();
    assert_eq!(&ids[..3], &["1", "bank-only", "2"]);
  }

  #[test]
  fn bank_quiz_with_out_of_range_answer_is_dropped() {
    let cfg = ContentConfig { quizzes: vec![quiz("broken", 5)], ..Default::default() };
    let store = ContentStore::build(Some(&cfg));
    assert!(store.quizzes.get("broken").is_none());
  }

  #[test]
  fn bank_level_without_lessons_is_dropped() {
    let cfg = ContentConfig {
      levels: vec![Level {
        id: "empty".into(),
        title: "Empty".into(),
        subtitle: String::new(),
        topics: Vec::new(),
        lessons: Vec::new(),
      }],
      ..Default::default()
    };
    let store = ContentStore::build(Some(&cfg));
    assert!(store.levels.get("empty").is_none());
    assert_eq!(store.levels.len(), 3);
  }

  #[test]
  fn missing_ids_are_generated() {
    let mut c = Collection::<Quiz>::default();
    assert!(c.insert_if_absent(quiz("", 0)));
    assert!(c.insert_if_absent(quiz("", 0)));
    assert_eq!(c.len(), 2);
    let first = c.all()[0].id.clone();
    assert!(!first.is_empty());
    assert!(!c.insert_if_absent(quiz(&first, 0)));
  }
}
