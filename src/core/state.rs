//! # Application State
//!
//! Core business state for Arena. This module contains domain logic only -
//! no TUI-specific types. Presentation state (form buffers, focus, scroll)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: Navigator                // route stack + active tab
//! ├── user: Option<User>            // signed-in user, None = anonymous
//! ├── quiz: Option<QuizRun>         // quiz on screen, None outside the quiz
//! ├── transcript: Transcript        // chat history + awaiting flag
//! ├── activities: Vec<Activity>     // logged workouts, newest first
//! ├── matches: MatchBoard           // cricket/football cards on the home feed
//! ├── is_busy: bool                 // auth, password or save request in flight
//! ├── notice: Option<Notice>        // transient message for the status line
//! └── status_message: String        // persistent status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::activity::Activity;
use crate::core::chat::Transcript;
use crate::core::navigation::Navigator;
use crate::core::quiz::QuizRun;
use crate::core::session::{AuthStatus, User};
use crate::core::sports::MatchSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A one-off message shown until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Live scores for the home feed. Each sport loads independently; one failing
/// does not hide the other.
#[derive(Debug, Clone, Default)]
pub struct MatchBoard {
    pub cricket: Vec<MatchSummary>,
    pub football: Vec<MatchSummary>,
    pub cricket_error: Option<String>,
    pub football_error: Option<String>,
    pub loading: bool,
    pub loaded: bool,
}

pub struct App {
    pub nav: Navigator,
    pub user: Option<User>,
    pub quiz: Option<QuizRun>,
    pub transcript: Transcript,
    pub activities: Vec<Activity>,
    pub matches: MatchBoard,
    pub is_busy: bool,
    pub notice: Option<Notice>,
    pub status_message: String,
}

impl App {
    /// Starts on the main tabs when a session was restored, on login otherwise.
    pub fn new(status: AuthStatus) -> Self {
        let user = match status {
            AuthStatus::Authenticated { user, .. } => Some(user),
            AuthStatus::Anonymous => None,
        };
        let status_message = match &user {
            Some(user) => format!("Welcome back, {}!", user.name),
            None => String::from("Welcome to Arena!"),
        };
        Self {
            nav: Navigator::initial(user.is_some()),
            user,
            quiz: None,
            transcript: Transcript::new(),
            activities: Vec::new(),
            matches: MatchBoard::default(),
            is_busy: false,
            notice: None,
            status_message,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::{Route, Tab};

    #[test]
    fn test_anonymous_starts_at_login() {
        let app = App::new(AuthStatus::Anonymous);
        assert_eq!(app.nav.current(), &Route::Login);
        assert!(!app.is_authenticated());
        assert_eq!(app.status_message, "Welcome to Arena!");
    }

    #[test]
    fn test_restored_session_starts_at_home() {
        let app = App::new(AuthStatus::Authenticated {
            user: User::from_email("ana@club.org"),
            token: "tok".into(),
        });
        assert_eq!(app.nav.current(), &Route::Main(Tab::Home));
        assert_eq!(app.status_message, "Welcome back, ana!");
        assert!(!app.is_busy);
        assert!(app.quiz.is_none());
    }
}
