//! [`SqliteStore`] — the SQLite implementation of [`ItemStore`].

use std::path::Path;

use itemkeep_core::{Item, ItemId, ItemStore};
use rusqlite::OptionalExtension as _;
use tracing::debug;

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An item store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, so one
/// store opened at startup can be shared for the life of the process.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database file at `path`.
  ///
  /// The `items` table is created by [`ItemStore::ensure_schema`], not here.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Ok(Self { conn })
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Ok(Self { conn })
  }
}

fn read_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
  // `name` is a nullable column; rows written elsewhere may leave it NULL.
  let name: Option<String> = row.get(1)?;
  Ok(Item { id: ItemId(row.get(0)?), name: name.unwrap_or_default() })
}

// ─── ItemStore impl ──────────────────────────────────────────────────────────

impl ItemStore for SqliteStore {
  type Error = Error;

  async fn ensure_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn count_items(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM items", [], |r| r.get(0))?)
      })
      .await?;

    u64::try_from(count).map_err(|_| Error::CountOutOfRange(count))
  }

  async fn list_items(&self) -> Result<Vec<Item>> {
    let items = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, name FROM items")?;
        let rows = stmt
          .query_map([], read_item)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    debug!(count = items.len(), "listed items");
    Ok(items)
  }

  async fn find_by_name(
    &self,
    name: String,
    excluding: Option<ItemId>,
  ) -> Result<Option<Item>> {
    let excluding = excluding.map(|id| id.0);

    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name FROM items
               WHERE LOWER(name) = LOWER(?1)
                 AND (?2 IS NULL OR id != ?2)
               LIMIT 1",
              rusqlite::params![name, excluding],
              read_item,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(found)
  }

  async fn insert_item(&self, name: String) -> Result<Item> {
    let item = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (name) VALUES (?1)",
          rusqlite::params![name],
        )?;
        Ok(Item { id: ItemId(conn.last_insert_rowid()), name })
      })
      .await?;

    debug!(id = %item.id, "inserted item row");
    Ok(item)
  }

  async fn rename_item(&self, id: ItemId, name: String) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE items SET name = ?1 WHERE id = ?2",
          rusqlite::params![name, id.0],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }

  async fn delete_item(&self, id: ItemId) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM items WHERE id = ?1",
          rusqlite::params![id.0],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }
}
