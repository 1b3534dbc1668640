//! # Form Component
//!
//! A vertical stack of fields with one focused at a time.
//!
//! - Tab / Down move focus forward, BackTab / Up move it back.
//! - Enter on any field but the last moves focus forward; on the last field
//!   the form emits [`FormEvent::Submit`].
//! - Choice fields cycle their options with Left / Right (or Space).
//!
//! The form only collects text. Turning values into credentials or activity
//! drafts, and validating them, is up to the screen and the core reducer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::text_field::{FIELD_HEIGHT, FieldEvent, TextField, TextInput};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
}

/// Pick one of a fixed list of options. `None` until the user picks.
#[derive(Debug, Clone)]
pub struct ChoiceField {
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub selected: Option<usize>,
    pub placeholder: &'static str,
}

impl ChoiceField {
    pub fn new(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            options,
            selected: None,
            placeholder: "Choose one",
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .copied()
            .unwrap_or("")
    }

    fn step(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }
}

#[derive(Debug, Clone)]
pub enum FormField {
    Text(TextField),
    Choice(ChoiceField),
}

impl FormField {
    pub fn value(&self) -> &str {
        match self {
            FormField::Text(field) => field.value(),
            FormField::Choice(choice) => choice.value(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Value of field `index`, empty when out of range.
    pub fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.value().to_string())
            .unwrap_or_default()
    }

    pub fn height(&self) -> u16 {
        self.fields.len() as u16 * FIELD_HEIGHT
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    fn is_last(&self) -> bool {
        self.focus + 1 >= self.fields.len()
    }
}

impl EventHandler for Form {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus_next();
                return None;
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus_prev();
                return None;
            }
            TuiEvent::Submit => {
                if self.is_last() {
                    return Some(FormEvent::Submit);
                }
                self.focus_next();
                return None;
            }
            _ => {}
        }

        match self.fields.get_mut(self.focus)? {
            FormField::Text(field) => match field.handle_event(event)? {
                FieldEvent::Submit => Some(FormEvent::Submit),
                FieldEvent::ContentChanged => None,
            },
            FormField::Choice(choice) => {
                match event {
                    TuiEvent::CursorRight | TuiEvent::InputChar(' ') => choice.step(true),
                    TuiEvent::CursorLeft => choice.step(false),
                    _ => {}
                }
                None
            }
        }
    }
}

/// Props wrapper that renders a `Form`.
pub struct FormView<'a> {
    pub form: &'a Form,
    pub dimmed: bool,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a Form) -> Self {
        Self {
            form,
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

impl Component for FormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical(
            self.form
                .fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT)),
        )
        .split(area);

        for (i, (field, row)) in self.form.fields.iter().zip(rows.iter()).enumerate() {
            let focused = i == self.form.focus;
            match field {
                FormField::Text(text) => {
                    TextInput::new(text, focused)
                        .dimmed(self.dimmed)
                        .render(frame, *row);
                }
                FormField::Choice(choice) => {
                    render_choice(frame, *row, choice, focused, self.dimmed);
                }
            }
        }
    }
}

fn render_choice(frame: &mut Frame, area: Rect, choice: &ChoiceField, focused: bool, dimmed: bool) {
    let border_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let value = match choice.selected {
        Some(_) => Span::raw(choice.value()),
        None => Span::styled(choice.placeholder, Style::default().fg(Color::DarkGray)),
    };
    let line = if focused {
        Line::from(vec![Span::raw("◀ "), value, Span::raw(" ▶")])
    } else {
        Line::from(value)
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(choice.label);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
