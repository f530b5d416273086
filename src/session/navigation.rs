//! Top-level tab selection.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
  #[default]
  About,
  Literature,
  Community,
  Learning,
  Interactive,
  Stories,
}

impl Tab {
  #[cfg(test)]
  pub const ALL: [Tab; 6] = [
    Tab::About,
    Tab::Literature,
    Tab::Community,
    Tab::Learning,
    Tab::Interactive,
    Tab::Stories,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Tab::About => "About",
      Tab::Literature => "Literature & Arts",
      Tab::Community => "Community",
      Tab::Learning => "Start Learning",
      Tab::Interactive => "Interactive",
      Tab::Stories => "Folk Stories",
    }
  }
}

#[derive(Clone, Debug, Default)]
pub struct Navigation {
  active: Tab,
}

impl Navigation {
  pub fn active(&self) -> Tab {
    self.active
  }

  pub fn select_tab(&mut self, tab: Tab) {
    self.active = tab;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_on_about_and_replaces_unconditionally() {
    let mut nav = Navigation::default();
    assert_eq!(nav.active(), Tab::About);
    for tab in Tab::ALL {
      nav.select_tab(tab);
      assert_eq!(nav.active(), tab);
    }
    nav.select_tab(Tab::Stories);
    nav.select_tab(Tab::Stories);
    assert_eq!(nav.active(), Tab::Stories);
  }

  #[test]
  fn tabs_are_a_closed_set() {
    assert_eq!(serde_json::from_str::<Tab>("\"interactive\"").ok(), Some(Tab::Interactive));
    assert!(serde_json::from_str::<Tab>("\"settings\"").is_err());
    assert_eq!(Tab::Literature.label(), "Literature & Arts");
  }
}
