use ratatui::Frame;
use ratatui::layout::Rect;

use super::{centered, panel};
use crate::core::action::Action;
use crate::core::activity::{ActivityDraft, SPORTS};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{ChoiceField, Form, FormEvent, FormField, FormView, TextField};
use crate::tui::event::TuiEvent;

pub const HINTS: &str = "←→ sport · Tab: next field · Enter on notes: save · Esc: cancel";

/// Sport picker, duration, date (prefilled with today) and notes.
pub fn form() -> Form {
    let draft = ActivityDraft::default();
    Form::new(vec![
        FormField::Choice(ChoiceField::new("Sport", &SPORTS).with_placeholder("Select a sport")),
        FormField::Text(TextField::new("Duration (minutes)")),
        FormField::Text(TextField::new("Date (YYYY-MM-DD)").with_value(draft.date)),
        FormField::Text(TextField::new("Notes (optional)")),
    ])
}

pub fn draft(form: &Form) -> ActivityDraft {
    ActivityDraft {
        sport: form.value(0),
        duration: form.value(1),
        date: form.value(2),
        notes: form.value(3),
    }
}

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if app.is_busy {
        return None;
    }
    match tui.activity.handle_event(event)? {
        FormEvent::Submit => Some(Action::SubmitActivity(draft(&tui.activity))),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let outer = centered(area, 56, tui.activity.height() + 2);
    let block = panel("Log an activity");
    let inner = block.inner(outer);
    frame.render_widget(block, outer);
    FormView::new(&tui.activity)
        .dimmed(app.is_busy)
        .render(frame, inner);
}
