//! # TranscriptView Component
//!
//! Scrollable chat history. Each message is a bordered bubble; the greeting
//! is always drawn first and a typing bubble is drawn last while a reply is
//! pending.
//!
//! Bubble heights are predicted with `textwrap` using the same options as
//! ratatui's `Paragraph` wrapping, so the scroll canvas can be sized before
//! anything is rendered.
//!
//! ## Auto-scroll
//!
//! `stick_to_bottom` keeps the newest message in view. Scrolling up releases
//! it; scrolling back to the end re-pins it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::SPINNER;
use crate::core::chat::{ChatSender, GREETING, Transcript};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Borders (1 left + 1 right) plus padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

pub struct TranscriptViewState {
    pub scroll_state: ScrollViewState,
    pub stick_to_bottom: bool,
    content_height: u16,
    viewport_height: u16,
}

impl Default for TranscriptViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            content_height: 0,
            viewport_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Keep the offset within the content.
    fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll once the user reaches the bottom.
    fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for TranscriptViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Predicted rendered height of a bubble holding `text` at `width` columns.
pub fn bubble_height(text: &str, width: u16) -> u16 {
    let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
    if content_width == 0 {
        return 1;
    }
    let content = text.trim();
    if content.is_empty() {
        return VERTICAL_OVERHEAD;
    }
    let options = textwrap::Options::new(content_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    (textwrap::wrap(content, options).len() as u16).max(1) + VERTICAL_OVERHEAD
}

fn bubble<'t>(role: &'static str, text: &'t str, colour: Color) -> Paragraph<'t> {
    let style = Style::default().fg(colour);
    Paragraph::new(text.trim())
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style.add_modifier(Modifier::DIM))
                .title(role)
                .title_style(style)
                .padding(Padding::horizontal(CONTENT_PAD_H)),
        )
        .wrap(Wrap { trim: false })
}

pub struct TranscriptView<'a> {
    pub state: &'a mut TranscriptViewState,
    pub transcript: &'a Transcript,
    pub spinner_frame: usize,
}

impl Component for TranscriptView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column

        let typing = format!("{} typing...", SPINNER[self.spinner_frame % SPINNER.len()]);
        let mut bubbles: Vec<(&'static str, &str, Color)> = vec![("arena", GREETING, Color::Green)];
        for message in self.transcript.messages() {
            match message.sender {
                ChatSender::User => bubbles.push(("you", &message.text, Color::Cyan)),
                ChatSender::Assistant => bubbles.push(("arena", &message.text, Color::Green)),
            }
        }
        if self.transcript.is_awaiting_reply() {
            bubbles.push(("arena", &typing, Color::DarkGray));
        }

        let heights: Vec<u16> = bubbles
            .iter()
            .map(|(_, text, _)| bubble_height(text, content_width))
            .collect();
        let total_height: u16 = heights.iter().sum();

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0u16;
        for ((role, text, colour), height) in bubbles.iter().zip(&heights) {
            scroll_view.render_widget(
                bubble(*role, *text, *colour),
                Rect::new(0, y, content_width, *height),
            );
            y += height;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut TranscriptViewState, transcript: &Transcript, height: u16) -> String {
        let backend = TestBackend::new(50, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TranscriptView {
                    state,
                    transcript,
                    spinner_frame: 0,
                }
                .render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_bubble_height_wraps() {
        assert_eq!(bubble_height("short", 40), 3);
        // 36 content columns: 50 chars of words need two lines
        let long = "word ".repeat(10);
        assert_eq!(bubble_height(&long, 40), 4);
        assert_eq!(bubble_height("", 40), VERTICAL_OVERHEAD);
        assert_eq!(bubble_height("x", 3), 1);
    }

    #[test]
    fn test_greeting_is_drawn_first() {
        let mut state = TranscriptViewState::new();
        let text = render(&mut state, &Transcript::new(), 10);
        assert!(text.contains("sports assistant"));
    }

    #[test]
    fn test_pending_reply_shows_typing_bubble() {
        let mut transcript = Transcript::new();
        transcript.submit("Who won?").unwrap();
        let mut state = TranscriptViewState::new();
        let text = render(&mut state, &transcript, 20);
        assert!(text.contains("Who won?"));
        assert!(text.contains("typing..."));

        transcript.receive_reply("Spain did.");
        let text = render(&mut state, &transcript, 20);
        assert!(text.contains("Spain did."));
        assert!(!text.contains("typing..."));
    }

    #[test]
    fn test_scroll_up_releases_and_end_repins() {
        let mut transcript = Transcript::new();
        for i in 0..6 {
            transcript.submit(&format!("question {i}")).unwrap();
            transcript.receive_reply(&format!("answer {i}"));
        }
        let mut state = TranscriptViewState::new();
        render(&mut state, &transcript, 8);
        assert!(state.stick_to_bottom);

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);

        for _ in 0..100 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert!(state.stick_to_bottom);
    }
}
