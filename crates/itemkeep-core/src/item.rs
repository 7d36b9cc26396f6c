//! The `Item` record and the client-side search filter.

use std::fmt;

/// Store-assigned row id. Never reused within a database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// A persisted, named record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
  pub id:   ItemId,
  pub name: String,
}

/// Trim raw user input into a storable name. `None` means there is nothing
/// to store.
pub fn normalize_name(raw: &str) -> Option<&str> {
  let trimmed = raw.trim();
  (!trimmed.is_empty()).then_some(trimmed)
}

/// Keep the items whose name contains `query`, ignoring case.
///
/// Order is preserved; an empty query keeps everything.
pub fn filter<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
  if query.is_empty() {
    return items.iter().collect();
  }
  let needle = query.to_lowercase();
  items
    .iter()
    .filter(|item| item.name.to_lowercase().contains(&needle))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn items(names: &[&str]) -> Vec<Item> {
    names
      .iter()
      .enumerate()
      .map(|(i, n)| Item { id: ItemId(i as i64 + 1), name: (*n).into() })
      .collect()
  }

  fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
    items.iter().map(|i| i.name.as_str()).collect()
  }

  #[test]
  fn filter_matches_substring_ignoring_case() {
    let all = items(&["Apple", "Banana", "grape"]);
    assert_eq!(names(&filter(&all, "AP")), ["Apple", "grape"]);
    assert_eq!(names(&filter(&all, "nan")), ["Banana"]);
  }

  #[test]
  fn filter_empty_query_is_identity() {
    let all = items(&["b", "a", "c"]);
    assert_eq!(names(&filter(&all, "")), ["b", "a", "c"]);
  }

  #[test]
  fn filter_no_match_is_empty() {
    let all = items(&["Apple"]);
    assert!(filter(&all, "kiwi").is_empty());
  }

  #[test]
  fn normalize_trims_and_rejects_blank() {
    assert_eq!(normalize_name("  Apple \t"), Some("Apple"));
    assert_eq!(normalize_name("   "), None);
    assert_eq!(normalize_name(""), None);
  }
}
