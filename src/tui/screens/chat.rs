use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::components::{FieldEvent, TextInput, TranscriptView};
use crate::tui::event::TuiEvent;

pub const HINTS: &str = "Enter: send · PgUp/PgDn: scroll · Tab: switch tab · Esc: quit";
pub const WAITING_HINTS: &str = "Waiting for a reply... · PgUp/PgDn: scroll · Esc: quit";

pub fn hints(app: &App) -> &'static str {
    if app.transcript.is_awaiting_reply() {
        WAITING_HINTS
    } else {
        HINTS
    }
}

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::CursorUp => {
            tui.transcript.handle_event(&TuiEvent::ScrollUp);
            return None;
        }
        TuiEvent::CursorDown => {
            tui.transcript.handle_event(&TuiEvent::ScrollDown);
            return None;
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.transcript.handle_event(event);
            return None;
        }
        _ => {}
    }

    // The input is disabled until the pending reply lands
    if app.transcript.is_awaiting_reply() {
        return None;
    }
    match tui.chat_input.handle_event(event)? {
        FieldEvent::Submit if !tui.chat_input.value().trim().is_empty() => {
            tui.transcript.stick_to_bottom = true;
            Some(Action::SubmitChat(tui.chat_input.take()))
        }
        FieldEvent::Submit | FieldEvent::ContentChanged => None,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [history, input] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FIELD_HEIGHT)]).areas(area);

    TranscriptView {
        state: &mut tui.transcript,
        transcript: &app.transcript,
        spinner_frame,
    }
    .render(frame, history);

    TextInput::new(&tui.chat_input, true)
        .dimmed(app.transcript.is_awaiting_reply())
        .render(frame, input);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::signed_in_app;
    use crate::tui::screens::render_to_string;

    fn type_text(app: &App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_enter_sends_and_clears_input() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        type_text(&app, &mut tui, "Who won the league?");
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitChat(ref t)) if t == "Who won the league?"
        ));
        assert!(tui.chat_input.value().is_empty());
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        type_text(&app, &mut tui, "   ");
        assert!(handle_event(&app, &mut tui, &TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_input_disabled_while_awaiting_reply() {
        let mut app = signed_in_app();
        update(&mut app, Action::SubmitChat("first".into()));
        assert!(app.transcript.is_awaiting_reply());

        let mut tui = TuiState::new(&app);
        type_text(&app, &mut tui, "second");
        assert!(tui.chat_input.value().is_empty());
        assert!(handle_event(&app, &mut tui, &TuiEvent::Submit).is_none());
        assert_eq!(hints(&app), WAITING_HINTS);
    }

    #[test]
    fn test_draw_shows_greeting_and_input() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        let text = render_to_string(70, 20, |f| draw(f, f.area(), &app, &mut tui, 0));
        assert!(text.contains("sports assistant"));
        assert!(text.contains("Message"));
    }
}
