//! Keyboard routing: global keys first, then the screen for the current route.

use crate::core::action::Action;
use crate::core::navigation::{Route, Tab};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{
    add_activity, chat, home, login, profile, quiz, register, sport_details,
};

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let route = app.nav.current();

    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::Escape if !(*route == Route::Profile && profile::captures_escape(tui)) => {
            // Esc backs out of pushed screens and quits from a root
            return Some(if app.nav.depth() > 1 {
                Action::Back
            } else {
                Action::Quit
            });
        }
        TuiEvent::Tab | TuiEvent::BackTab => {
            if let Route::Main(tab) = route {
                let target = if *event == TuiEvent::Tab {
                    tab.next()
                } else {
                    tab.prev()
                };
                return Some(Action::SelectTab(target));
            }
        }
        _ => {}
    }

    match route {
        Route::Login => login::handle_event(app, tui, event),
        Route::Register => register::handle_event(app, tui, event),
        Route::Main(Tab::Home) => home::handle_event(app, tui, event),
        Route::Main(Tab::Quiz) => quiz::handle_intro(app, tui, event),
        Route::Main(Tab::Chat) => chat::handle_event(app, tui, event),
        Route::Profile => profile::handle_event(app, tui, event),
        Route::QuizQuestions => quiz::handle_questions(app, tui, event),
        Route::QuizResults { .. } => quiz::handle_results(app, tui, event),
        Route::AddActivity => add_activity::handle_event(app, tui, event),
        Route::SportDetails(_) => sport_details::handle_event(app, tui, event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::session::AuthStatus;
    use crate::test_support::signed_in_app;

    #[test]
    fn test_ctrl_c_always_quits() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_escape_quits_from_root_and_backs_out_of_pushed_screen() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Quit)
        ));

        update(&mut app, Action::Navigate(Route::Profile));
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Back)
        ));
    }

    #[test]
    fn test_escape_from_register_returns_to_login() {
        let mut app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        update(&mut app, Action::Navigate(Route::Register));
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Back)
        ));
    }

    #[test]
    fn test_escape_cancels_password_edit_instead_of_leaving_profile() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate(Route::Profile));
        let mut tui = TuiState::new(&app);
        tui.profile.editing_password = true;

        assert!(handle_event(&app, &mut tui, &TuiEvent::Escape).is_none());
        assert!(!tui.profile.editing_password);
    }

    #[test]
    fn test_tab_cycles_main_tabs() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Tab),
            Some(Action::SelectTab(Tab::Quiz))
        ));
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::BackTab),
            Some(Action::SelectTab(Tab::Chat))
        ));
    }

    #[test]
    fn test_tab_moves_focus_on_forms() {
        let app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        assert!(handle_event(&app, &mut tui, &TuiEvent::Tab).is_none());
        assert_eq!(tui.login.focus(), 1);
    }

    #[test]
    fn test_keys_reach_current_screen() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new(&app);
        update(&mut app, Action::SelectTab(Tab::Quiz));
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::StartQuiz)
        ));
    }
}
