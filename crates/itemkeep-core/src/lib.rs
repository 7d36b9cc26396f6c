//! Core types and trait definitions for the itemkeep item list.
//!
//! This crate is free of database and terminal dependencies. The storage
//! backend (`itemkeep-store-sqlite`) and the terminal front end
//! (`itemkeep-cli`) both depend on it.

pub mod controller;
pub mod error;
pub mod item;
pub mod store;

pub use controller::{ItemController, PendingWrite, Prompt, Submission};
pub use error::{DuplicateOrigin, Error, Notice, Result};
pub use item::{Item, ItemId, filter};
pub use store::{ItemStore, SEED_NAMES};
