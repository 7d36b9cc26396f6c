//! Error types for `itemkeep-core`.

use thiserror::Error;

/// Which write produced a duplicate-name rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateOrigin {
  Add,
  Update,
}

#[derive(Debug, Error)]
pub enum Error {
  /// Another item already carries this name, ignoring case.
  #[error("an item named {name:?} already exists")]
  DuplicateName {
    name:   String,
    origin: DuplicateOrigin,
  },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }

  /// The blocking notice shown to the user, if this error has one.
  ///
  /// Storage failures have no notice; they propagate to the caller.
  pub fn notice(&self) -> Option<Notice> {
    match self {
      Self::DuplicateName { origin: DuplicateOrigin::Add, .. } => Some(Notice {
        title:   "Duplicate item",
        message: "This item already exists.",
      }),
      Self::DuplicateName { origin: DuplicateOrigin::Update, .. } => {
        Some(Notice {
          title:   "Duplicate item",
          message: "Another item with this name already exists.",
        })
      }
      Self::Store(_) => None,
    }
  }
}

/// A blocking, dismiss-only message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
  pub title:   &'static str,
  pub message: &'static str,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
