use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::centered;
use crate::core::action::Action;
use crate::core::session::Registration;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Form, FormEvent, FormField, FormView, TextField};
use crate::tui::event::TuiEvent;

pub const HINTS: &str = "Enter: create account · Tab: next field · Esc: back to sign in";

pub fn form() -> Form {
    Form::new(vec![
        FormField::Text(TextField::new("Name")),
        FormField::Text(TextField::new("Email")),
        FormField::Text(TextField::masked("Password")),
    ])
}

pub fn registration(form: &Form) -> Registration {
    Registration {
        name: form.value(0).trim().to_string(),
        email: form.value(1).trim().to_string(),
        password: form.value(2),
    }
}

pub fn handle_event(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.register.handle_event(event)? {
        FormEvent::Submit => Some(Action::SubmitRegistration(registration(&tui.register))),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let box_area = centered(area, 50, tui.register.height() + 4);
    let [heading, fields] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(box_area);

    let title = Paragraph::new(vec![
        Line::styled(
            "Create Account",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled("Join Arena to track your sports", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, heading);

    FormView::new(&tui.register)
        .dimmed(app.is_busy)
        .render(frame, fields);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::AuthStatus;
    use crate::tui::screens::render_to_string;

    #[test]
    fn test_submit_from_last_field() {
        let app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        for c in "Ana".chars() {
            handle_event(&app, &mut tui, &TuiEvent::InputChar(c));
        }
        handle_event(&app, &mut tui, &TuiEvent::Submit);
        for c in "ana@club.org".chars() {
            handle_event(&app, &mut tui, &TuiEvent::InputChar(c));
        }
        handle_event(&app, &mut tui, &TuiEvent::Submit);

        // Blank password still submits; the reducer reports the missing field
        let Some(Action::SubmitRegistration(reg)) =
            handle_event(&app, &mut tui, &TuiEvent::Submit)
        else {
            panic!("expected SubmitRegistration");
        };
        assert_eq!(reg.name, "Ana");
        assert_eq!(reg.email, "ana@club.org");
        assert!(reg.password.is_empty());
    }

    #[test]
    fn test_draw_lists_fields() {
        let app = App::new(AuthStatus::Anonymous);
        let tui = TuiState::new(&app);
        let text = render_to_string(60, 20, |f| draw(f, f.area(), &app, &tui));
        assert!(text.contains("Create Account"));
        assert!(text.contains("Name"));
        assert!(text.contains("Password"));
    }
}
