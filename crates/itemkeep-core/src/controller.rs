//! [`ItemController`] — validated reads and writes over an [`ItemStore`].
//!
//! The controller owns the transient state a front end needs (the input
//! text, the search query, the item being edited) plus the last listing read
//! from the store. Every write goes through a confirmation gate: validation
//! returns a [`PendingWrite`], and nothing touches the store until the caller
//! hands it back to [`ItemController::commit`]. Dropping the pending value
//! cancels the write.

use tracing::{debug, info, warn};

use crate::{
  error::{DuplicateOrigin, Error, Result},
  item::{Item, ItemId, filter, normalize_name},
  store::{ItemStore, SEED_NAMES},
};

// ─── Confirmation gate ───────────────────────────────────────────────────────

/// A validated write awaiting a yes/no answer from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingWrite {
  Insert { name: String },
  Rename { id: ItemId, name: String },
  Delete { id: ItemId },
}

/// The question to put to the user before committing a [`PendingWrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
  pub title:   &'static str,
  pub message: String,
}

impl PendingWrite {
  pub fn prompt(&self) -> Prompt {
    match self {
      Self::Insert { name } => Prompt {
        title:   "Confirm Add",
        message: format!("Are you sure you want to add \"{name}\"?"),
      },
      Self::Rename { name, .. } => Prompt {
        title:   "Confirm Update",
        message: format!(
          "Are you sure you want to update the item to \"{name}\"?"
        ),
      },
      Self::Delete { .. } => Prompt {
        title:   "Confirm Delete",
        message: "Are you sure you want to delete this item?".into(),
      },
    }
  }
}

/// Result of validating an add or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
  /// Blank input, or an update with nothing being edited. Not an error.
  Ignored,
  /// Passed validation; commit it once the user confirms.
  Pending(PendingWrite),
}

// ─── Controller ──────────────────────────────────────────────────────────────

pub struct ItemController<S> {
  store:   S,
  items:   Vec<Item>,
  input:   String,
  search:  String,
  editing: Option<Item>,
}

impl<S: ItemStore> ItemController<S> {
  /// Wrap an opened store. Call [`initialize`](Self::initialize) before use.
  pub fn new(store: S) -> Self {
    Self {
      store,
      items: Vec::new(),
      input: String::new(),
      search: String::new(),
      editing: None,
    }
  }

  pub fn store(&self) -> &S { &self.store }

  // ── Lifecycle ─────────────────────────────────────────────────────────────

  /// Create the table if needed, seed it when empty, then load the listing.
  ///
  /// Safe to call more than once: seeding only happens on an empty table.
  pub async fn initialize(&mut self) -> Result<()> {
    self.store.ensure_schema().await.map_err(Error::store)?;

    let count = self.store.count_items().await.map_err(Error::store)?;
    if count == 0 {
      for name in SEED_NAMES {
        self
          .store
          .insert_item(name.to_owned())
          .await
          .map_err(Error::store)?;
      }
      info!(count = SEED_NAMES.len(), "seeded empty item store");
    }

    self.refresh().await
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Read every item from the store, in storage order.
  pub async fn list_items(&self) -> Result<Vec<Item>> {
    self.store.list_items().await.map_err(Error::store)
  }

  /// Reload the cached listing from the store.
  pub async fn refresh(&mut self) -> Result<()> {
    self.items = self.list_items().await?;
    debug!(count = self.items.len(), "refreshed item listing");
    Ok(())
  }

  /// The listing as of the last refresh.
  pub fn items(&self) -> &[Item] { &self.items }

  /// The listing narrowed by the current search query.
  pub fn visible_items(&self) -> Vec<&Item> { filter(&self.items, &self.search) }

  // ── Transient input state ─────────────────────────────────────────────────

  pub fn input(&self) -> &str { &self.input }

  pub fn set_input(&mut self, text: impl Into<String>) { self.input = text.into(); }

  pub fn clear_input(&mut self) { self.input.clear(); }

  pub fn search(&self) -> &str { &self.search }

  pub fn set_search(&mut self, query: impl Into<String>) {
    self.search = query.into();
  }

  pub fn clear_search(&mut self) { self.search.clear(); }

  /// The item currently being edited, if any.
  pub fn editing(&self) -> Option<&Item> { self.editing.as_ref() }

  /// Load `item` into the input and make it the edit target, replacing any
  /// previous target.
  pub fn begin_edit(&mut self, item: &Item) {
    self.input = item.name.clone();
    self.editing = Some(item.clone());
  }

  pub fn cancel_edit(&mut self) {
    self.editing = None;
    self.input.clear();
  }

  // ── Validation ────────────────────────────────────────────────────────────

  /// Validate adding `raw` as a new item.
  pub async fn add_item(&self, raw: &str) -> Result<Submission> {
    let Some(name) = normalize_name(raw) else {
      return Ok(Submission::Ignored);
    };

    self.reject_duplicate(name, None, DuplicateOrigin::Add).await?;

    Ok(Submission::Pending(PendingWrite::Insert { name: name.to_owned() }))
  }

  /// Validate renaming the current edit target to `raw`.
  pub async fn update_item(&self, raw: &str) -> Result<Submission> {
    let Some(target) = &self.editing else {
      return Ok(Submission::Ignored);
    };
    let Some(name) = normalize_name(raw) else {
      return Ok(Submission::Ignored);
    };

    self
      .reject_duplicate(name, Some(target.id), DuplicateOrigin::Update)
      .await?;

    Ok(Submission::Pending(PendingWrite::Rename {
      id:   target.id,
      name: name.to_owned(),
    }))
  }

  /// Ask to delete `id`. Deletion needs no validation, only confirmation.
  pub fn delete_item(&self, id: ItemId) -> PendingWrite { PendingWrite::Delete { id } }

  /// Validate the current input: an update while editing, otherwise an add.
  pub async fn submit(&self) -> Result<Submission> {
    if self.editing.is_some() {
      self.update_item(&self.input).await
    } else {
      self.add_item(&self.input).await
    }
  }

  /// Offer the search query itself as a new item when nothing matches it.
  ///
  /// The query is copied into the input first so a rejected or cancelled add
  /// leaves it there for editing.
  pub async fn add_from_search(&mut self) -> Result<Submission> {
    if !self.visible_items().is_empty() || normalize_name(&self.search).is_none() {
      return Ok(Submission::Ignored);
    }
    self.input = self.search.clone();
    self.add_item(&self.input).await
  }

  async fn reject_duplicate(
    &self,
    name: &str,
    excluding: Option<ItemId>,
    origin: DuplicateOrigin,
  ) -> Result<()> {
    let existing = self
      .store
      .find_by_name(name.to_owned(), excluding)
      .await
      .map_err(Error::store)?;

    if let Some(existing) = existing {
      warn!(%name, existing = %existing.id, ?origin, "rejected duplicate item name");
      return Err(Error::DuplicateName { name: name.to_owned(), origin });
    }
    Ok(())
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Apply a confirmed write, then reset the relevant input state and reload
  /// the listing.
  pub async fn commit(&mut self, pending: PendingWrite) -> Result<()> {
    match pending {
      PendingWrite::Insert { name } => {
        let item = self.store.insert_item(name).await.map_err(Error::store)?;
        info!(id = %item.id, name = %item.name, "added item");
        self.input.clear();
        self.search.clear();
      }
      PendingWrite::Rename { id, name } => {
        let found = self
          .store
          .rename_item(id, name.clone())
          .await
          .map_err(Error::store)?;
        info!(%id, %name, found, "renamed item");
        self.input.clear();
        self.editing = None;
      }
      PendingWrite::Delete { id } => {
        let found = self.store.delete_item(id).await.map_err(Error::store)?;
        info!(%id, found, "deleted item");
      }
    }
    self.refresh().await
  }
}
