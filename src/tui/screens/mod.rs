//! # Screens
//!
//! One module per route. Each screen exposes:
//!
//! - `draw(frame, area, app, tui, ..)`: renders the body between the tab
//!   bar and the footer
//! - `handle_event(app, tui, event) -> Option<Action>`: turns a key into a
//!   core action, updating presentation state in `TuiState` on the way
//! - `HINTS`: key hints for the footer
//!
//! Global keys (Ctrl+C, Esc, Tab on the main tabs) are handled in
//! `tui::input` before a screen sees the event.

pub mod add_activity;
pub mod chat;
pub mod home;
pub mod login;
pub mod profile;
pub mod quiz;
pub mod register;
pub mod sport_details;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};

/// A `width` × `height` box centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Rounded panel with a bold title.
pub fn panel(title: &str) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Text rendered by a test terminal, row by row.
#[cfg(test)]
pub(crate) fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame),
) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
