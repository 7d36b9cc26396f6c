//! Integration tests for `SqliteStore` against an in-memory database.

use itemkeep_core::{
  Error as CoreError, ItemController, ItemId, ItemStore, PendingWrite,
  Submission,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  let s = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  s.ensure_schema().await.expect("schema");
  s
}

async fn controller() -> ItemController<SqliteStore> {
  let s = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  let mut c = ItemController::new(s);
  c.initialize().await.expect("initialize");
  c
}

fn names(c: &ItemController<SqliteStore>) -> Vec<String> {
  c.items().iter().map(|i| i.name.clone()).collect()
}

fn pending(sub: Submission) -> PendingWrite {
  match sub {
    Submission::Pending(p) => p,
    Submission::Ignored => panic!("expected a pending write"),
  }
}

// ─── Store operations ────────────────────────────────────────────────────────

#[tokio::test]
async fn ensure_schema_is_idempotent() {
  let s = store().await;
  s.ensure_schema().await.unwrap();
  assert_eq!(s.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
  let s = store().await;
  let a = s.insert_item("a".into()).await.unwrap();
  let b = s.insert_item("b".into()).await.unwrap();
  assert!(b.id > a.id);

  let all = s.list_items().await.unwrap();
  assert_eq!(all, vec![a, b]);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  s.insert_item("a".into()).await.unwrap();
  let b = s.insert_item("b".into()).await.unwrap();
  assert!(s.delete_item(b.id).await.unwrap());

  let c = s.insert_item("c".into()).await.unwrap();
  assert!(c.id > b.id);
}

#[tokio::test]
async fn find_by_name_ignores_case() {
  let s = store().await;
  let apple = s.insert_item("Apple".into()).await.unwrap();

  let hit = s.find_by_name("aPPLE".into(), None).await.unwrap();
  assert_eq!(hit, Some(apple.clone()));

  let miss = s.find_by_name("apple".into(), Some(apple.id)).await.unwrap();
  assert!(miss.is_none());
}

#[tokio::test]
async fn find_by_name_folds_ascii_case_only() {
  let s = store().await;
  s.insert_item("Élan".into()).await.unwrap();
  s.insert_item("Zoë".into()).await.unwrap();

  assert!(s.find_by_name("élan".into(), None).await.unwrap().is_none());
  assert!(s.find_by_name("ZOë".into(), None).await.unwrap().is_some());
}

#[tokio::test]
async fn rename_and_delete_report_missing_rows() {
  let s = store().await;
  assert!(!s.rename_item(ItemId(42), "x".into()).await.unwrap());
  assert!(!s.delete_item(ItemId(42)).await.unwrap());
}

#[tokio::test]
async fn reopened_file_keeps_items() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("items.db");

  {
    let mut c = ItemController::new(SqliteStore::open(&path).await.unwrap());
    c.initialize().await.unwrap();
    let write = pending(c.add_item("kept").await.unwrap());
    c.commit(write).await.unwrap();
  }

  let mut c = ItemController::new(SqliteStore::open(&path).await.unwrap());
  c.initialize().await.unwrap();
  assert_eq!(names(&c), ["test1", "test2", "test3", "kept"]);
}

// ─── Controller over SQLite ──────────────────────────────────────────────────

#[tokio::test]
async fn initialize_seeds_once() {
  let mut c = controller().await;
  assert_eq!(names(&c), ["test1", "test2", "test3"]);

  c.initialize().await.unwrap();
  assert_eq!(c.store().count_items().await.unwrap(), 3);
}

#[tokio::test]
async fn duplicate_add_leaves_count_unchanged() {
  let mut c = controller().await;
  let write = pending(c.add_item("Apple").await.unwrap());
  c.commit(write).await.unwrap();

  for raw in ["apple", "APPLE "] {
    assert!(matches!(
      c.add_item(raw).await,
      Err(CoreError::DuplicateName { .. })
    ));
  }
  assert_eq!(c.store().count_items().await.unwrap(), 4);
}

#[tokio::test]
async fn update_to_own_name_is_allowed() {
  let mut c = controller().await;
  let test1 = c.items()[0].clone();
  c.begin_edit(&test1);

  assert!(matches!(
    c.update_item("TEST1").await,
    Ok(Submission::Pending(_))
  ));
  assert!(matches!(
    c.update_item("test2").await,
    Err(CoreError::DuplicateName { .. })
  ));
}

#[tokio::test]
async fn delete_nonexistent_id_is_silent() {
  let mut c = controller().await;
  c.commit(c.delete_item(ItemId(9999))).await.unwrap();
  assert_eq!(c.items().len(), 3);
}

#[tokio::test]
async fn end_to_end_scenario() {
  let mut c = controller().await;

  let write = pending(c.add_item("test4").await.unwrap());
  c.commit(write).await.unwrap();
  assert_eq!(names(&c), ["test1", "test2", "test3", "test4"]);

  let test2 = c.items()[1].clone();
  c.begin_edit(&test2);
  let write = pending(c.update_item("updated2").await.unwrap());
  c.commit(write).await.unwrap();
  assert_eq!(names(&c), ["test1", "updated2", "test3", "test4"]);
  assert_eq!(c.items()[1].id, test2.id);

  let test1 = c.items()[0].id;
  c.commit(c.delete_item(test1)).await.unwrap();
  assert_eq!(names(&c), ["updated2", "test3", "test4"]);
}
