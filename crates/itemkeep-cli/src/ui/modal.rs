//! Centred dialog for confirmations and notices.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::Modal;

/// Draw `modal` over the middle of `area`.
pub fn draw(f: &mut Frame, area: Rect, modal: &Modal) {
  let popup = centered(area, 60, 7);

  let (accent, keys) = match modal {
    Modal::Confirm(_) => (Color::Yellow, "[y] Confirm   [n] Cancel"),
    Modal::Notice(_) => (Color::Red, "[Enter] OK"),
  };

  let block = Block::default()
    .title(Span::styled(
      format!(" {} ", modal.title()),
      Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(accent));

  let lines = vec![
    Line::from(modal.message()),
    Line::from(""),
    Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray))),
  ];

  f.render_widget(Clear, popup);
  f.render_widget(
    Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
    popup,
  );
}

/// A rectangle `percent_x` wide and `height` rows tall, centred in `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
  let vertical = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(0),
      Constraint::Length(height),
      Constraint::Min(0),
    ])
    .split(area);

  Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage((100 - percent_x) / 2),
      Constraint::Percentage(percent_x),
      Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
