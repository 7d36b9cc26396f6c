//! The `ItemStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `itemkeep-store-sqlite`).
//! [`ItemController`](crate::ItemController) depends on this abstraction, not
//! on any concrete backend, so tests can substitute an in-memory store.

use std::future::Future;

use crate::item::{Item, ItemId};

/// Names inserted, in this order, when the store is first found empty.
pub const SEED_NAMES: [&str; 3] = ["test1", "test2", "test3"];

/// Abstraction over an item store backend.
///
/// Every method is a single bounded statement; none of them enforce the
/// name-uniqueness rule, which is a pre-check owned by the controller.
pub trait ItemStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the `items` table if it does not exist yet.
  fn ensure_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn count_items(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// All items in storage order.
  fn list_items(
    &self,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  /// Find an item whose name equals `name` ignoring case, skipping the item
  /// with id `excluding` if given.
  ///
  /// Case folding is ASCII-only, matching SQLite's `LOWER()`: `"Apple"` and
  /// `"APPLE"` collide, `"Élan"` and `"élan"` do not. [`filter`](crate::filter)
  /// folds Unicode case, so it is more permissive than this check.
  fn find_by_name(
    &self,
    name: String,
    excluding: Option<ItemId>,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Insert a new row and return it with its store-assigned id.
  fn insert_item(
    &self,
    name: String,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  /// Rename by id. Returns `false` if no row had that id.
  fn rename_item(
    &self,
    id: ItemId,
    name: String,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete by id. Returns `false` if no row had that id.
  fn delete_item(
    &self,
    id: ItemId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
