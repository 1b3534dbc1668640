//! # TextField Component
//!
//! Single-line text input with a byte-indexed cursor. The state
//! (`TextField`) lives in `TuiState` and handles events; the props wrapper
//! (`TextInput`) is built each frame to render it.
//!
//! Password fields set `masked` and render one `•` per character. The value
//! itself is never rendered or logged.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Total vertical space consumed by borders (1 top + 1 bottom) plus one line of text.
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Submit,
    ContentChanged,
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub buffer: String,
    pub masked: bool,
    /// Byte offset into `buffer`, always on a char boundary.
    pos: usize,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            buffer: String::new(),
            masked: false,
            pos: 0,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.pos = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    /// Takes the contents, leaving the field empty.
    pub fn take(&mut self) -> String {
        self.pos = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Cursor position counted in characters.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.pos].chars().count()
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.buffer.chars().count())
        } else {
            self.buffer.clone()
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: pasted newlines become spaces
                let line: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.pos, &line);
                self.pos += line.len();
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(prev..self.pos);
                self.pos = prev;
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.pos);
                self.buffer.drain(self.pos..next);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => (self.pos > 0).then(|| {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.pos < self.buffer.len()).then(|| {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.pos != 0).then(|| {
                self.pos = 0;
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.pos != self.buffer.len()).then(|| {
                self.pos = self.buffer.len();
                FieldEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

/// Props wrapper that renders a `TextField` for one frame.
pub struct TextInput<'a> {
    pub field: &'a TextField,
    pub focused: bool,
    pub dimmed: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(field: &'a TextField, focused: bool) -> Self {
        Self {
            field,
            focused,
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.field.label);

        // Scroll horizontally so the cursor stays inside the box
        let width = area.width.saturating_sub(2) as usize;
        let cursor = self.field.cursor_column();
        let skip = (cursor + 1).saturating_sub(width);
        let visible: String = self
            .field
            .display_text()
            .chars()
            .skip(skip)
            .take(width)
            .collect();

        let text_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(visible).style(text_style).block(block), area);

        if self.focused && !self.dimmed && width > 0 && area.height >= FIELD_HEIGHT {
            let x = area.x + 1 + (cursor - skip) as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
