//! SQL schema for the itemkeep SQLite store.
//!
//! The table shape is fixed for compatibility with existing `items.db`
//! files; there are no migrations.

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS items (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT);
";
