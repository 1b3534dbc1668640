//! # TitleBar Component
//!
//! Top status bar: screen title, status message, a spinner while a request
//! is in flight, and the signed-in user on the right.
//!
//! Stateless. All data arrives as props each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.nav.current().title(), app.status_message.clone())
//!     .user(app.user.as_ref().map(|u| u.name.clone()))
//!     .busy(app.is_busy, spinner_frame);
//! title_bar.render(frame, title_area);
//! ```
//!
//! Formatting, most to least specific:
//!
//! 1. **Busy**: `"Arena · Sign In | ⠋ Signing in..."`
//! 2. **Status message**: `"Arena · Home | Welcome back, ana!"`
//! 3. **Default**: `"Arena · Home"`

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::SPINNER;
use crate::tui::component::Component;

pub struct TitleBar {
    pub title: String,
    pub status_message: String,
    pub user_name: Option<String>,
    pub is_busy: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(title: String, status_message: String) -> Self {
        Self {
            title,
            status_message,
            user_name: None,
            is_busy: false,
            spinner_frame: 0,
        }
    }

    pub fn user(mut self, user_name: Option<String>) -> Self {
        self.user_name = user_name;
        self
    }

    pub fn busy(mut self, is_busy: bool, spinner_frame: usize) -> Self {
        self.is_busy = is_busy;
        self.spinner_frame = spinner_frame;
        self
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Arena", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" · {}", self.title)),
        ];
        if self.is_busy {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::raw(format!(" | {} {}", spinner, self.status_message)));
        } else if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        let user = self.user_name.as_deref().unwrap_or_default();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(user.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(Line::from(spans), left);
        if !user.is_empty() {
            frame.render_widget(
                Span::styled(user, Style::default().fg(Color::Green)),
                right,
            );
        }
    }
}
