//! Profile: account card, a small menu (add activity, change password,
//! log out) and the full activity history.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::home::activity_line;
use super::panel;
use crate::core::action::Action;
use crate::core::navigation::Route;
use crate::core::session::PasswordChange;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::components::{FieldEvent, TextInput};
use crate::tui::event::TuiEvent;

pub const HINTS: &str = "↑↓ select · Enter: open · Esc: back";
pub const PASSWORD_HINTS: &str = "Enter: update password · Esc: cancel";

const MENU: [&str; 3] = ["Add Activity", "Change Password", "Log Out"];

#[derive(Debug, Default)]
pub struct ProfileState {
    pub menu: usize,
    pub editing_password: bool,
}

pub fn hints(tui: &TuiState) -> &'static str {
    if tui.profile.editing_password {
        PASSWORD_HINTS
    } else {
        HINTS
    }
}

/// True while the password field owns the keyboard, including Esc.
pub fn captures_escape(tui: &TuiState) -> bool {
    tui.profile.editing_password
}

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if tui.profile.editing_password {
        return handle_password(app, tui, event);
    }
    match event {
        TuiEvent::CursorUp => {
            tui.profile.menu = tui.profile.menu.saturating_sub(1);
            None
        }
        TuiEvent::CursorDown => {
            tui.profile.menu = (tui.profile.menu + 1).min(MENU.len() - 1);
            None
        }
        TuiEvent::Submit => match tui.profile.menu {
            0 => Some(Action::Navigate(Route::AddActivity)),
            1 => {
                tui.profile.editing_password = true;
                tui.password.clear();
                None
            }
            _ => Some(Action::Logout),
        },
        _ => None,
    }
}

fn handle_password(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if let TuiEvent::Escape = event {
        tui.profile.editing_password = false;
        tui.password.clear();
        return None;
    }
    if app.is_busy {
        return None;
    }
    match tui.password.handle_event(event)? {
        FieldEvent::Submit => {
            let change = PasswordChange {
                password: tui.password.value().to_string(),
            };
            // Keep the field open when the reducer will reject it
            if change.validate().is_ok() {
                tui.password.clear();
                tui.profile.editing_password = false;
            }
            Some(Action::SubmitPasswordChange(change))
        }
        FieldEvent::ContentChanged => None,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let password_height = if tui.profile.editing_password {
        FIELD_HEIGHT
    } else {
        0
    };
    let [account_area, menu_area, password_area, history_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(MENU.len() as u16 + 2),
        Constraint::Length(password_height),
        Constraint::Min(0),
    ])
    .areas(area);

    let (name, email) = match &app.user {
        Some(user) => (user.name.as_str(), user.email.as_str()),
        None => ("Guest", ""),
    };
    let account = Paragraph::new(vec![
        Line::styled(
            name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(email, Style::default().fg(Color::Gray)),
    ])
    .block(panel("Account"));
    frame.render_widget(account, account_area);

    let menu = List::new(MENU.iter().map(|m| ListItem::new(*m)))
        .block(panel("Menu"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    let mut menu_state = ListState::default().with_selected(Some(tui.profile.menu));
    frame.render_stateful_widget(menu, menu_area, &mut menu_state);

    if tui.profile.editing_password {
        TextInput::new(&tui.password, true)
            .dimmed(app.is_busy)
            .render(frame, password_area);
    }

    let title = format!("Your Activities ({})", app.activities.len());
    let lines: Vec<Line> = if app.activities.is_empty() {
        vec![Line::styled(
            "Nothing logged yet.",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        app.activities.iter().map(activity_line).collect()
    };
    frame.render_widget(Paragraph::new(lines).block(panel(&title)), history_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{signed_in_app, test_activity};
    use crate::tui::screens::render_to_string;

    #[test]
    fn test_menu_opens_add_activity_and_logout() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Navigate(Route::AddActivity))
        ));
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Logout)
        ));
    }

    #[test]
    fn test_password_change_flow() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        tui.profile.menu = 1;
        assert!(handle_event(&app, &mut tui, &TuiEvent::Submit).is_none());
        assert!(captures_escape(&tui));

        // Blank submit keeps the field open
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::SubmitPasswordChange(_))
        ));
        assert!(tui.profile.editing_password);

        for c in "n3w-pass".chars() {
            handle_event(&app, &mut tui, &TuiEvent::InputChar(c));
        }
        let Some(Action::SubmitPasswordChange(change)) =
            handle_event(&app, &mut tui, &TuiEvent::Submit)
        else {
            panic!("expected SubmitPasswordChange");
        };
        assert_eq!(change.password, "n3w-pass");
        assert!(!tui.profile.editing_password);
        assert!(tui.password.value().is_empty());
    }

    #[test]
    fn test_escape_cancels_password_edit() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        tui.profile.editing_password = true;
        handle_event(&app, &mut tui, &TuiEvent::InputChar('x'));
        handle_event(&app, &mut tui, &TuiEvent::Escape);
        assert!(!tui.profile.editing_password);
        assert!(tui.password.value().is_empty());
    }

    #[test]
    fn test_draw_lists_all_activities() {
        let mut app = signed_in_app();
        app.activities = vec![
            test_activity("Swimming", 12),
            test_activity("Running", 11),
            test_activity("Cycling", 10),
            test_activity("Tennis", 9),
        ];
        let tui = TuiState::new(&app);
        let text = render_to_string(80, 24, |f| draw(f, f.area(), &app, &tui));
        assert!(text.contains("tester"));
        assert!(text.contains("tester@arena.dev"));
        assert!(text.contains("Your Activities (4)"));
        assert!(text.contains("Swimming"));
        assert!(text.contains("Tennis"));
    }
}
