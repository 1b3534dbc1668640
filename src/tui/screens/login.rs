use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::centered;
use crate::core::action::Action;
use crate::core::navigation::Route;
use crate::core::session::Credentials;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Form, FormEvent, FormField, FormView, TextField};
use crate::tui::event::TuiEvent;

pub const HINTS: &str = "Enter: sign in · Tab: next field · Ctrl+N: create account · Esc: quit";

pub fn form() -> Form {
    Form::new(vec![
        FormField::Text(TextField::new("Email")),
        FormField::Text(TextField::masked("Password")),
    ])
}

pub fn credentials(form: &Form) -> Credentials {
    Credentials {
        email: form.value(0).trim().to_string(),
        password: form.value(1),
    }
}

pub fn handle_event(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if let TuiEvent::Ctrl('n') = event {
        return Some(Action::Navigate(Route::Register));
    }
    match tui.login.handle_event(event)? {
        FormEvent::Submit => Some(Action::SubmitLogin(credentials(&tui.login))),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let box_area = centered(area, 50, tui.login.height() + 4);
    let [heading, fields] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(box_area);

    let title = Paragraph::new(vec![
        Line::styled(
            "Welcome to Arena",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled("Sign in to continue", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, heading);

    FormView::new(&tui.login)
        .dimmed(app.is_busy)
        .render(frame, fields);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::AuthStatus;
    use crate::tui::screens::render_to_string;

    fn type_text(tui: &mut TuiState, app: &App, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_submit_builds_trimmed_credentials() {
        let app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        type_text(&mut tui, &app, " sam@club.org ");
        assert!(handle_event(&app, &mut tui, &TuiEvent::Submit).is_none());
        type_text(&mut tui, &app, "pw");

        let Some(Action::SubmitLogin(creds)) = handle_event(&app, &mut tui, &TuiEvent::Submit)
        else {
            panic!("expected SubmitLogin");
        };
        assert_eq!(creds.email, "sam@club.org");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_ctrl_n_opens_registration() {
        let app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Ctrl('n')),
            Some(Action::Navigate(Route::Register))
        ));
    }

    #[test]
    fn test_draw_masks_password() {
        let app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        type_text(&mut tui, &app, "sam@club.org");
        handle_event(&app, &mut tui, &TuiEvent::Tab);
        type_text(&mut tui, &app, "secret");

        let text = render_to_string(60, 16, |f| draw(f, f.area(), &app, &tui));
        assert!(text.contains("Welcome to Arena"));
        assert!(text.contains("sam@club.org"));
        assert!(!text.contains("secret"));
    }
}
