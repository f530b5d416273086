//! Small utility helpers used across modules.

/// Treat an empty query value as absent (`?category=` behaves like no filter at
/// all). Whitespace is a real value and simply matches nothing.
pub fn non_empty(v: Option<&str>) -> Option<&str> {
  v.filter(|s| !s.is_empty())
}

/// Log-safe truncation for large strings. Cuts on a char boundary so Telugu
/// text never splits mid-codepoint.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_filters_are_absent() {
    assert_eq!(non_empty(Some("")), None);
    assert_eq!(non_empty(Some("  ")), Some("  "));
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some("arts")), Some("arts"));
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let s = "నమస్కారం";
    let t = trunc_for_log(s, 4);
    assert!(t.starts_with("న"));
    assert!(t.ends_with("bytes total)"));
    assert_eq!(trunc_for_log("ok", 10), "ok");
  }
}
