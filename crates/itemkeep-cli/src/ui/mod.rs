//! TUI rendering — orchestrates all panes.

pub mod item_list;
pub mod modal;

use itemkeep_core::ItemStore;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus, Modal};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: ItemStore>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(3), // search
      Constraint::Length(3), // item input
      Constraint::Min(0),    // list
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_search(f, rows[1], app);
  draw_input(f, rows[2], app);
  item_list::draw(f, rows[3], app);
  draw_status(f, rows[4], app);

  if let Some(m) = &app.modal {
    modal::draw(f, area, m);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let title = Span::styled(
    " My Item Manager",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  f.render_widget(
    Paragraph::new(Line::from(title)).style(Style::default().bg(Color::DarkGray)),
    area,
  );
}

// ─── Text fields ──────────────────────────────────────────────────────────────

fn field_block(title: String, focused: bool) -> Block<'static> {
  let border = if focused {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(border)
}

/// Render a single-line field, with a cursor marker when focused and a
/// placeholder when empty.
fn draw_field(
  f: &mut Frame,
  area: Rect,
  block: Block<'static>,
  value: &str,
  placeholder: &str,
  focused: bool,
) {
  let line = if value.is_empty() && !focused {
    Line::from(Span::styled(
      placeholder.to_string(),
      Style::default().fg(Color::DarkGray),
    ))
  } else if focused {
    Line::from(format!("{value}_"))
  } else {
    Line::from(value.to_string())
  };
  f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_search<S: ItemStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let focused = app.focus == Focus::Search;
  draw_field(
    f,
    area,
    field_block(" Search ".into(), focused),
    app.controller.search(),
    "Search items...",
    focused,
  );
}

fn draw_input<S: ItemStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let focused = app.focus == Focus::Input;
  let title = match app.controller.editing() {
    Some(item) => format!(" Update Item (editing {:?}) ", item.name),
    None => " Add Item ".to_string(),
  };
  draw_field(
    f,
    area,
    field_block(title, focused),
    app.controller.input(),
    "Enter item",
    focused,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: ItemStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let (mode_label, hints) = match (&app.modal, app.focus) {
    (Some(Modal::Confirm(_)), _) => ("CONFIRM", "y/Enter confirm  n/Esc cancel"),
    (Some(Modal::Notice(_)), _) => ("NOTICE", "Enter/Esc dismiss"),
    (None, Focus::Search) => (
      "SEARCH",
      "Type to filter  Enter add query  Esc clear  Tab next field",
    ),
    (None, Focus::Input) if app.controller.editing().is_some() => (
      "EDIT",
      "Enter update  Esc cancel edit  Tab next field",
    ),
    (None, Focus::Input) => ("INPUT", "Enter add  Esc clear  Tab next field"),
    (None, Focus::List) => (
      "LIST",
      "↑↓/jk navigate  Enter/e edit  d delete  Tab next field  q quit",
    ),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {hints}"),
    Style::default().fg(Color::DarkGray),
  );

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, hint_span]))
      .style(Style::default().bg(Color::Black)),
    area,
  );
}
