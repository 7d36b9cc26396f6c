//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use itemkeep_core::{
  Error as CoreError, ItemController, ItemStore, Notice, PendingWrite,
  Prompt, Submission,
};

// ─── Focus ────────────────────────────────────────────────────────────────────

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Search,
  Input,
  List,
}

impl Focus {
  fn next(self) -> Self {
    match self {
      Self::Search => Self::Input,
      Self::Input => Self::List,
      Self::List => Self::Search,
    }
  }

  fn prev(self) -> Self {
    match self {
      Self::Search => Self::List,
      Self::Input => Self::Search,
      Self::List => Self::Input,
    }
  }
}

// ─── Modal ────────────────────────────────────────────────────────────────────

/// A blocking dialog drawn over the main screen.
#[derive(Debug, Clone)]
pub enum Modal {
  /// Yes/no gate in front of a write.
  Confirm(PendingWrite),
  /// Dismiss-only message, e.g. a duplicate name.
  Notice(Notice),
}

impl Modal {
  pub fn title(&self) -> &'static str {
    match self {
      Self::Confirm(write) => write.prompt().title,
      Self::Notice(notice) => notice.title,
    }
  }

  pub fn message(&self) -> String {
    match self {
      Self::Confirm(write) => {
        let Prompt { message, .. } = write.prompt();
        message
      }
      Self::Notice(notice) => notice.message.to_string(),
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S> {
  /// Owns the store and the item list, search, and input state.
  pub controller: ItemController<S>,

  pub focus: Focus,

  /// Cursor position within the *filtered* item list.
  pub list_cursor: usize,

  /// Dialog currently shown, if any. Swallows all keys while open.
  pub modal: Option<Modal>,
}

impl<S: ItemStore> App<S> {
  /// Create an [`App`] around an initialized controller.
  pub fn new(controller: ItemController<S>) -> Self {
    Self {
      controller,
      focus: Focus::Input,
      list_cursor: 0,
      modal: None,
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    if let Some(modal) = self.modal.take() {
      self.handle_modal_key(modal, key).await?;
      return Ok(true);
    }

    match key.code {
      KeyCode::Tab => {
        self.focus = self.focus.next();
        return Ok(true);
      }
      KeyCode::BackTab => {
        self.focus = self.focus.prev();
        return Ok(true);
      }
      _ => {}
    }

    match self.focus {
      Focus::Search => self.handle_search_key(key).await,
      Focus::Input => self.handle_input_key(key).await,
      Focus::List => self.handle_list_key(key),
    }
  }

  async fn handle_modal_key(&mut self, modal: Modal, key: KeyEvent) -> anyhow::Result<()> {
    match (modal, key.code) {
      (Modal::Confirm(write), KeyCode::Char('y') | KeyCode::Enter) => {
        self.controller.commit(write).await?;
        self.clamp_cursor();
      }
      // Declining drops the pending write.
      (Modal::Confirm(_), KeyCode::Char('n') | KeyCode::Esc) => {}
      (Modal::Notice(_), KeyCode::Enter | KeyCode::Esc) => {}
      (modal, _) => self.modal = Some(modal),
    }
    Ok(())
  }

  async fn handle_search_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => self.controller.clear_search(),
      KeyCode::Enter => {
        let outcome = self.controller.add_from_search().await;
        self.gate(outcome)?;
      }
      KeyCode::Backspace => {
        let mut query = self.controller.search().to_owned();
        query.pop();
        self.controller.set_search(query);
      }
      KeyCode::Char(c) => {
        let mut query = self.controller.search().to_owned();
        query.push(c);
        self.controller.set_search(query);
      }
      _ => return Ok(true),
    }
    self.list_cursor = 0;
    Ok(true)
  }

  async fn handle_input_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        if self.controller.editing().is_some() {
          self.controller.cancel_edit();
        } else {
          self.controller.clear_input();
        }
      }
      KeyCode::Enter => {
        let outcome = self.controller.submit().await;
        self.gate(outcome)?;
      }
      KeyCode::Backspace => {
        let mut text = self.controller.input().to_owned();
        text.pop();
        self.controller.set_input(text);
      }
      KeyCode::Char(c) => {
        let mut text = self.controller.input().to_owned();
        text.push(c);
        self.controller.set_input(text);
      }
      _ => {}
    }
    Ok(true)
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.controller.visible_items().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Edit
      KeyCode::Enter | KeyCode::Char('e') => {
        if let Some(item) = self.cursor_item().cloned() {
          self.controller.begin_edit(&item);
          self.focus = Focus::Input;
        }
      }

      // Delete
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.cursor_item().map(|item| item.id) {
          self.modal = Some(Modal::Confirm(self.controller.delete_item(id)));
        }
      }

      _ => {}
    }
    Ok(true)
  }

  /// Turn a validation outcome into the matching dialog. Storage errors
  /// propagate and end the session.
  fn gate(&mut self, outcome: itemkeep_core::Result<Submission>) -> anyhow::Result<()> {
    match outcome {
      Ok(Submission::Ignored) => {}
      Ok(Submission::Pending(write)) => self.modal = Some(Modal::Confirm(write)),
      Err(err @ CoreError::DuplicateName { .. }) => {
        if let Some(notice) = err.notice() {
          self.modal = Some(Modal::Notice(notice));
        }
      }
      Err(err) => return Err(err.into()),
    }
    Ok(())
  }

  // ── Filtered list ─────────────────────────────────────────────────────────

  /// The item under the list cursor in the filtered view, if any.
  pub fn cursor_item(&self) -> Option<&itemkeep_core::Item> {
    self.controller.visible_items().get(self.list_cursor).copied()
  }

  fn clamp_cursor(&mut self) {
    let len = self.controller.visible_items().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
  use itemkeep_core::ItemController;
  use itemkeep_store_sqlite::SqliteStore;

  use super::{App, Focus, Modal};

  async fn app() -> App<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let mut controller = ItemController::new(store);
    controller.initialize().await.unwrap();
    App::new(controller)
  }

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  async fn type_text(app: &mut App<SqliteStore>, text: &str) {
    for c in text.chars() {
      app.handle_key(key(KeyCode::Char(c))).await.unwrap();
    }
  }

  fn names(app: &App<SqliteStore>) -> Vec<&str> {
    app.controller.items().iter().map(|i| i.name.as_str()).collect()
  }

  #[tokio::test]
  async fn add_requires_confirmation() {
    let mut app = app().await;
    type_text(&mut app, "milk").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert!(matches!(app.modal, Some(Modal::Confirm(_))));
    assert_eq!(app.controller.items().len(), 3);

    app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
    assert!(app.modal.is_none());
    assert_eq!(names(&app), ["test1", "test2", "test3", "milk"]);
    assert_eq!(app.controller.input(), "");
  }

  #[tokio::test]
  async fn declining_leaves_store_untouched() {
    let mut app = app().await;
    type_text(&mut app, "milk").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    app.handle_key(key(KeyCode::Char('n'))).await.unwrap();

    assert!(app.modal.is_none());
    assert_eq!(app.controller.items().len(), 3);
    assert_eq!(app.controller.input(), "milk");
  }

  #[tokio::test]
  async fn duplicate_shows_notice() {
    let mut app = app().await;
    type_text(&mut app, "TEST1").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    let Some(modal @ Modal::Notice(_)) = &app.modal else {
      panic!("expected a notice");
    };
    assert_eq!(modal.message(), "This item already exists.");

    // Unrelated keys keep the notice open.
    app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
    assert!(app.modal.is_some());
    app.handle_key(key(KeyCode::Esc)).await.unwrap();
    assert!(app.modal.is_none());
  }

  #[tokio::test]
  async fn edit_and_delete_from_list() {
    let mut app = app().await;
    app.focus = Focus::List;

    // Edit test2.
    app.handle_key(key(KeyCode::Down)).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.focus, Focus::Input);
    assert_eq!(app.controller.input(), "test2");

    app.handle_key(key(KeyCode::Backspace)).await.unwrap();
    type_text(&mut app, "X").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.modal.as_ref().map(Modal::title), Some("Confirm Update"));
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(names(&app), ["test1", "testX", "test3"]);

    // Delete the last item; the cursor follows the shorter list.
    app.focus = Focus::List;
    app.handle_key(key(KeyCode::Down)).await.unwrap();
    app.handle_key(key(KeyCode::Char('d'))).await.unwrap();
    app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
    assert_eq!(names(&app), ["test1", "testX"]);
    assert_eq!(app.list_cursor, 1);
  }

  #[tokio::test]
  async fn search_enter_offers_unmatched_query() {
    let mut app = app().await;
    app.focus = Focus::Search;
    type_text(&mut app, "eggs").await;
    assert!(app.controller.visible_items().is_empty());

    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
    assert_eq!(names(&app), ["test1", "test2", "test3", "eggs"]);
    assert_eq!(app.controller.search(), "");
  }
}
