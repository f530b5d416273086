//! Show/hide toggle for a riddle's answer.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealToggle {
  revealed: bool,
}

impl RevealToggle {
  pub fn is_revealed(&self) -> bool {
    self.revealed
  }

  /// Flip and return the new value.
  pub fn toggle(&mut self) -> bool {
    self.revealed = !self.revealed;
    self.revealed
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn two_toggles_restore_hidden() {
    let mut r = RevealToggle::default();
    assert!(!r.is_revealed());
    assert!(r.toggle());
    assert!(!r.toggle());
    assert!(!r.is_revealed());
  }
}
