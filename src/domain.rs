//! Domain models: cultural content records, learning levels with their tagged
//! lessons, and the static cultural facts shown on the about page.

use serde::{Deserialize, Serialize};

fn default_beginner() -> String { "beginner".into() }
fn default_language() -> String { "language".into() }
fn default_folk() -> String { "folk".into() }

/// Multiple-choice question. `correct_answer` indexes into `options`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
  #[serde(default)] pub id: String,
  pub question: String,
  #[serde(default)] pub question_telugu: Option<String>,
  pub options: Vec<String>,
  pub correct_answer: usize,
  #[serde(default)] pub explanation: Option<String>,
  #[serde(default = "default_beginner")] pub difficulty: String,
  #[serde(default = "default_language")] pub category: String,
}

impl Quiz {
  pub fn has_valid_answer(&self) -> bool {
    self.correct_answer < self.options.len()
  }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
  #[serde(default)] pub id: String,
  pub title: String,
  #[serde(default)] pub title_telugu: Option<String>,
  pub summary: String,
  pub content: String,
  #[serde(default)] pub image_url: Option<String>,
  #[serde(default = "default_folk")] pub category: String,
  #[serde(default)] pub author: Option<String>,
}

/// Riddle (పొడుపుకథ). The Telugu text is the one shown first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Riddle {
  #[serde(default)] pub id: String,
  pub riddle: String,
  pub riddle_telugu: String,
  pub answer: String,
  #[serde(default)] pub answer_telugu: Option<String>,
  #[serde(default)] pub explanation: Option<String>,
}

/// Proverb (సామెత).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proverb {
  #[serde(default)] pub id: String,
  pub proverb: String,
  pub proverb_telugu: String,
  pub meaning: String,
  #[serde(default)] pub context: Option<String>,
}

/// Free-text learning material, filtered by level or category.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningContent {
  #[serde(default)] pub id: String,
  pub title: String,
  pub content: String,
  #[serde(default = "default_beginner")] pub level: String,
  pub category: String,
  #[serde(default)] pub order_index: i32,
}

/// A Telugu word or phrase with its romanization and English meaning.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Word {
  pub telugu: String,
  pub transliteration: String,
  pub meaning: String,
}

/// Lesson payload, one shape per lesson type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LessonBody {
  Vocabulary {
    words: Vec<Word>,
  },
  Grammar {
    rule: String,
    #[serde(default)]
    examples: Vec<Word>,
  },
  #[serde(rename_all = "camelCase")]
  Exercise {
    question: String,
    #[serde(default)]
    question_telugu: Option<String>,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    explanation: Option<String>,
  },
  Cultural {
    note: String,
    #[serde(default)]
    examples: Vec<String>,
  },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
  #[serde(default)] pub id: String,
  pub title: String,
  #[serde(flatten)] pub body: LessonBody,
}

impl Lesson {
  /// Number of selectable options if this is an exercise.
  pub fn exercise_options(&self) -> Option<usize> {
    match &self.body {
      LessonBody::Exercise { options, .. } => Some(options.len()),
      _ => None,
    }
  }

  /// False only for an exercise whose correct index falls outside its options.
  pub fn is_well_formed(&self) -> bool {
    match &self.body {
      LessonBody::Exercise { options, correct_answer, .. } => *correct_answer < options.len(),
      _ => true,
    }
  }
}

/// A difficulty tier with an ordered lesson sequence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Level {
  pub id: String,
  pub title: String,
  #[serde(default)] pub subtitle: String,
  #[serde(default)] pub topics: Vec<String>,
  pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Festival {
  pub name: String,
  pub description: String,
  pub period: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WordOfTheDay {
  #[serde(flatten)] pub word: Word,
  pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CulturalFacts {
  pub speakers: String,
  pub countries: String,
  pub literature_age: String,
  pub ranking: String,
  pub festivals: Vec<Festival>,
  pub word_of_the_day: WordOfTheDay,
}
