//! Quiz engine: walks an ordered quiz list, one reveal per question, scoring by
//! index equality with the correct answer.
//!
//! An empty list has no current quiz; every answer operation is then inert.

use serde::Serialize;

use crate::domain::Quiz;

#[derive(Clone, Debug, Default)]
pub struct QuizEngine {
  quizzes: Vec<Quiz>,
  current_index: usize,
  selected_answer: Option<usize>,
  revealed: bool,
  score: u32,
}

/// Result of an effective answer selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
  pub correct: bool,
  pub correct_answer: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
  pub current_index: usize,
  pub total: usize,
  pub selected_answer: Option<usize>,
  pub revealed: bool,
  pub score: u32,
  pub is_last: bool,
  pub current: Option<Quiz>,
}

impl QuizEngine {
  pub fn new(quizzes: Vec<Quiz>) -> Self {
    Self { quizzes, ..Default::default() }
  }

  /// Swap in a freshly fetched list and start over.
  pub fn load(&mut self, quizzes: Vec<Quiz>) {
    *self = Self::new(quizzes);
  }

  pub fn current_quiz(&self) -> Option<&Quiz> {
    self.quizzes.get(self.current_index)
  }

  pub fn current_index(&self) -> usize {
    self.current_index
  }

  #[cfg(test)]
  pub fn selected_answer(&self) -> Option<usize> {
    self.selected_answer
  }

  #[cfg(test)]
  pub fn is_revealed(&self) -> bool {
    self.revealed
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.quizzes.len()
  }

  pub fn is_last(&self) -> bool {
    self.current_index + 1 >= self.quizzes.len()
  }

  /// Effective only before the reveal and when a current quiz exists.
  /// Options outside the question's range are ignored.
  pub fn select_answer(&mut self, option: usize) -> Option<AnswerOutcome> {
    if self.revealed {
      return None;
    }
    let quiz = self.quizzes.get(self.current_index)?;
    if option >= quiz.options.len() {
      return None;
    }
    let outcome = AnswerOutcome {
      correct: option == quiz.correct_answer,
      correct_answer: quiz.correct_answer,
    };
    self.selected_answer = Some(option);
    self.revealed = true;
    if outcome.correct {
      self.score += 1;
    }
    Some(outcome)
  }

  /// Advance unless already on the last question. Returns whether it moved.
  pub fn next_question(&mut self) -> bool {
    if self.current_index + 1 >= self.quizzes.len() {
      return false;
    }
    self.current_index += 1;
    self.selected_answer = None;
    self.revealed = false;
    true
  }

  pub fn reset(&mut self) {
    self.current_index = 0;
    self.selected_answer = None;
    self.revealed = false;
    self.score = 0;
  }

  pub fn snapshot(&self) -> QuizSnapshot {
    QuizSnapshot {
      current_index: self.current_index,
      total: self.quizzes.len(),
      selected_answer: self.selected_answer,
      revealed: self.revealed,
      score: self.score,
      is_last: self.is_last(),
      current: self.current_quiz().cloned(),
    }
  }
}
