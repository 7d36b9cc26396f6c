//! Item list pane.

use itemkeep_core::ItemStore;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};

/// Render the filtered item list into `area`.
pub fn draw<S: ItemStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let visible = app.controller.visible_items();
  let total = app.controller.items().len();

  let title = if app.controller.search().is_empty() {
    format!(" Items ({total}) ")
  } else {
    format!(" Items ({}/{}) ", visible.len(), total)
  };

  let border = if app.focus == Focus::List {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(border);

  if visible.is_empty() {
    let mut lines = vec![Line::from(Span::styled(
      "No items found",
      Style::default().fg(Color::DarkGray),
    ))];
    let query = app.controller.search().trim();
    if !query.is_empty() {
      lines.push(Line::from(Span::styled(
        format!("Press Enter in Search to add \"{query}\""),
        Style::default().fg(Color::Yellow),
      )));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
    return;
  }

  let editing_id = app.controller.editing().map(|item| item.id);
  let items: Vec<ListItem> = visible
    .iter()
    .map(|item| {
      let marker = if Some(item.id) == editing_id { "✎ " } else { "  " };
      ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::raw(item.name.clone()),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.list_cursor.min(visible.len() - 1)));

  let highlight = if app.focus == Focus::List {
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().add_modifier(Modifier::BOLD)
  };

  f.render_stateful_widget(
    List::new(items).block(block).highlight_style(highlight),
    area,
    &mut state,
  );
}
