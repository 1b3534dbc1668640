use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use crate::core::navigation::{Route, Tab};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Footer, TabBar, TitleBar};
use crate::tui::screens::{
    add_activity, chat, home, login, profile, quiz, register, sport_details,
};

/// Key hints for the current screen.
fn hints(app: &App, tui: &TuiState) -> &'static str {
    match app.nav.current() {
        Route::Login => login::HINTS,
        Route::Register => register::HINTS,
        Route::Main(Tab::Home) => home::HINTS,
        Route::Main(Tab::Quiz) => quiz::INTRO_HINTS,
        Route::Main(Tab::Chat) => chat::hints(app),
        Route::Profile => profile::hints(tui),
        Route::QuizQuestions => quiz::hints(app),
        Route::QuizResults { .. } => quiz::RESULTS_HINTS,
        Route::AddActivity => add_activity::HINTS,
        Route::SportDetails(_) => sport_details::HINTS,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let route = app.nav.current().clone();
    let tab_height = if app.is_authenticated() { 1 } else { 0 };

    let [title_area, tab_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(tab_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let busy = app.is_busy || app.matches.loading || app.transcript.is_awaiting_reply();
    TitleBar::new(route.title(), app.status_message.clone())
        .user(app.user.as_ref().map(|u| u.name.clone()))
        .busy(busy, spinner_frame)
        .render(frame, title_area);

    if app.is_authenticated() {
        TabBar {
            active: app.nav.active_tab(),
        }
        .render(frame, tab_area);
    }

    let body = body_area.inner(Margin::new(1, 0));
    match &route {
        Route::Login => login::draw(frame, body, app, tui),
        Route::Register => register::draw(frame, body, app, tui),
        Route::Main(Tab::Home) => home::draw(frame, body, app, tui, spinner_frame),
        Route::Main(Tab::Quiz) => quiz::draw_intro(frame, body),
        Route::Main(Tab::Chat) => chat::draw(frame, body, app, tui, spinner_frame),
        Route::Profile => profile::draw(frame, body, app, tui),
        Route::QuizQuestions => quiz::draw_questions(frame, body, app, tui),
        Route::QuizResults { score, total } => quiz::draw_results(frame, body, *score, *total),
        Route::AddActivity => add_activity::draw(frame, body, app, tui),
        Route::SportDetails(sport) => sport_details::draw(frame, body, sport, tui),
    }

    Footer {
        notice: app.notice.as_ref(),
        hints: hints(app, tui),
    }
    .render(frame, footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::session::AuthStatus;
    use crate::core::state::Notice;
    use crate::test_support::signed_in_app;
    use crate::tui::screens::render_to_string;

    #[test]
    fn test_signed_out_frame_has_no_tab_bar() {
        let app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        let text = render_to_string(90, 24, |f| draw_ui(f, &app, &mut tui, 0));
        assert!(text.contains("Arena · Sign In"));
        assert!(text.contains("Ctrl+N: create account"));
        assert!(!text.contains("Quiz"));
    }

    #[test]
    fn test_signed_in_frame_shows_tabs_and_user() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        let text = render_to_string(100, 30, |f| draw_ui(f, &app, &mut tui, 0));
        assert!(text.contains("Home"));
        assert!(text.contains("Quiz"));
        assert!(text.contains("Chat"));
        assert!(text.contains("tester"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut app = signed_in_app();
        app.notice = Some(Notice::info("Activity saved successfully!"));
        let mut tui = TuiState::new(&app);
        let text = render_to_string(100, 30, |f| draw_ui(f, &app, &mut tui, 0));
        assert!(text.contains("Activity saved successfully!"));
    }

    #[test]
    fn test_pushed_screen_uses_its_title() {
        let mut app = signed_in_app();
        update(&mut app, Action::Navigate(Route::SportDetails("Tennis".into())));
        let mut tui = TuiState::new(&app);
        let text = render_to_string(100, 30, |f| draw_ui(f, &app, &mut tui, 0));
        assert!(text.contains("Arena · Tennis"));
        assert!(text.contains(sport_details::HINTS));
    }
}
