//! # Actions
//!
//! Everything that can happen in Arena becomes an `Action`.
//! User presses Enter on the login form? That's `Action::SubmitLogin(creds)`.
//! The server answers? That's `Action::LoginSucceeded { .. }` or `Action::AuthFailed(msg)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an [`Effect`]: the I/O the adapter should perform next.
//! No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//!                                                │
//!          adapter runs the effect (HTTP, disk)  │
//!          and feeds the outcome back as Action ◀┘
//! ```
//!
//! Single-flight rules live here too: while `is_busy` (auth, password, save)
//! or while a chat reply is pending, repeat submissions produce no effect.

use log::{debug, info};

use crate::core::activity::{Activity, ActivityDraft, ActivityEntry, sort_newest_first};
use crate::core::chat::ChatError;
use crate::core::navigation::{Route, Tab};
use crate::core::quiz::{QuizRun, QuizSession, sports_questions};
use crate::core::session::{Credentials, PasswordChange, Registration, User};
use crate::core::sports::MatchSummary;
use crate::core::state::{App, Notice};

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    Back,
    SelectTab(Tab),
    Quit,

    // Session
    SubmitLogin(Credentials),
    LoginSucceeded { user: User, message: String },
    SubmitRegistration(Registration),
    /// `user` is set when the server issued a token and the session was stored.
    RegisterSucceeded { user: Option<User>, message: String },
    AuthFailed(String),
    SubmitPasswordChange(PasswordChange),
    PasswordChanged(String),
    PasswordChangeFailed(String),
    Logout,

    // Quiz
    StartQuiz,
    AnswerQuestion(usize),
    ContinueQuiz,
    RetakeQuiz,

    // Chat
    SubmitChat(String),
    ChatReplyReceived(String),
    ChatReplyFailed(String),

    // Activities
    SubmitActivity(ActivityDraft),
    ActivitySaved(Activity),
    ActivitySaveFailed(String),
    ActivitiesLoaded(Vec<Activity>),

    // Live scores
    RefreshMatches,
    MatchesLoaded {
        cricket: Result<Vec<MatchSummary>, String>,
        football: Result<Vec<MatchSummary>, String>,
    },

    DismissNotice,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Login(Credentials),
    Register(Registration),
    UpdatePassword(PasswordChange),
    SendChat(String),
    SaveActivity(ActivityEntry),
    LoadActivities,
    LoadMatches,
    /// Activities and matches together, after sign-in.
    LoadHome,
    Logout,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => {
            if route.requires_session() && !app.is_authenticated() {
                debug!("Ignoring navigation to {:?} without a session", route);
                return Effect::None;
            }
            let effect = match route {
                Route::Profile => Effect::LoadActivities,
                _ => Effect::None,
            };
            app.nav.push(route);
            effect
        }

        Action::Back => {
            if matches!(app.nav.current(), Route::QuizQuestions) {
                app.quiz = None;
            }
            app.nav.pop();
            Effect::None
        }

        Action::SelectTab(tab) => {
            if !app.is_authenticated() {
                return Effect::None;
            }
            app.quiz = None;
            app.nav.select_tab(tab);
            Effect::None
        }

        Action::Quit => Effect::Quit,

        Action::SubmitLogin(creds) => {
            if app.is_busy {
                return Effect::None;
            }
            if let Err(e) = creds.validate() {
                app.notice = Some(Notice::error(e.to_string()));
                return Effect::None;
            }
            app.is_busy = true;
            app.notice = None;
            app.status_message = String::from("Signing in...");
            Effect::Login(creds)
        }

        Action::LoginSucceeded { user, message } => {
            info!("Signed in as {}", user.email);
            sign_in(app, user);
            app.notice = Some(Notice::info(message));
            Effect::LoadHome
        }

        Action::SubmitRegistration(registration) => {
            if app.is_busy {
                return Effect::None;
            }
            if let Err(e) = registration.validate() {
                app.notice = Some(Notice::error(e.to_string()));
                return Effect::None;
            }
            app.is_busy = true;
            app.notice = None;
            app.status_message = String::from("Creating account...");
            Effect::Register(registration)
        }

        Action::RegisterSucceeded { user, message } => {
            app.notice = Some(Notice::info(message));
            match user {
                Some(user) => {
                    sign_in(app, user);
                    Effect::LoadHome
                }
                None => {
                    // No token issued; the user signs in with the new account
                    app.is_busy = false;
                    app.status_message = String::from("Account created");
                    app.nav.reset(Route::Login);
                    Effect::None
                }
            }
        }

        Action::AuthFailed(message) => {
            app.is_busy = false;
            app.status_message = String::new();
            app.notice = Some(Notice::error(message));
            Effect::None
        }

        Action::SubmitPasswordChange(change) => {
            if app.is_busy || !app.is_authenticated() {
                return Effect::None;
            }
            if let Err(e) = change.validate() {
                app.notice = Some(Notice::error(e.to_string()));
                return Effect::None;
            }
            app.is_busy = true;
            app.notice = None;
            Effect::UpdatePassword(change)
        }

        Action::PasswordChanged(message) => {
            app.is_busy = false;
            app.notice = Some(Notice::info(message));
            Effect::None
        }

        Action::PasswordChangeFailed(message) => {
            app.is_busy = false;
            app.notice = Some(Notice::error(message));
            Effect::None
        }

        Action::Logout => {
            if let Some(user) = app.user.take() {
                info!("Signing out {}", user.email);
            }
            app.quiz = None;
            app.transcript = Default::default();
            app.activities.clear();
            app.is_busy = false;
            app.nav.reset(Route::Login);
            app.status_message = String::from("Signed out");
            app.notice = None;
            Effect::Logout
        }

        Action::StartQuiz => {
            if !app.is_authenticated() {
                return Effect::None;
            }
            match QuizSession::new(sports_questions()) {
                Ok(session) => {
                    app.quiz = Some(QuizRun::new(session));
                    app.nav.push(Route::QuizQuestions);
                }
                Err(e) => app.notice = Some(Notice::error(e.to_string())),
            }
            Effect::None
        }

        Action::AnswerQuestion(option) => {
            let Some(run) = app.quiz.as_mut() else {
                return Effect::None;
            };
            match run.choose(option) {
                Ok(Some(step)) => {
                    app.status_message = if step.was_correct() {
                        String::from("Correct!")
                    } else {
                        String::from("Not quite!")
                    };
                }
                Ok(None) => {}
                Err(e) => debug!("Answer rejected: {}", e),
            }
            Effect::None
        }

        Action::ContinueQuiz => {
            let Some(run) = app.quiz.as_mut() else {
                return Effect::None;
            };
            if let Some(score) = run.continue_after_reveal() {
                let total = run.session.total();
                app.quiz = None;
                app.nav.replace(Route::QuizResults { score, total });
            }
            app.status_message = String::new();
            Effect::None
        }

        Action::RetakeQuiz => {
            app.quiz = None;
            app.nav.select_tab(Tab::Quiz);
            Effect::None
        }

        Action::SubmitChat(text) => match app.transcript.submit(&text) {
            Ok(text) => Effect::SendChat(text),
            Err(ChatError::EmptyMessage) => Effect::None,
            Err(ChatError::ReplyPending) => {
                debug!("Chat submit ignored: reply pending");
                Effect::None
            }
        },

        Action::ChatReplyReceived(text) => {
            if !app.transcript.receive_reply(&text) {
                debug!("Dropping chat reply with nothing pending");
            }
            Effect::None
        }

        Action::ChatReplyFailed(message) => {
            if app.transcript.is_awaiting_reply() {
                app.transcript.fail_reply();
                app.notice = Some(Notice::error(message));
            }
            Effect::None
        }

        Action::SubmitActivity(draft) => {
            if app.is_busy {
                return Effect::None;
            }
            match draft.validate() {
                Ok(entry) => {
                    app.is_busy = true;
                    app.notice = None;
                    Effect::SaveActivity(entry)
                }
                Err(e) => {
                    app.notice = Some(Notice::error(e.to_string()));
                    Effect::None
                }
            }
        }

        Action::ActivitySaved(activity) => {
            app.is_busy = false;
            app.activities.push(activity);
            sort_newest_first(&mut app.activities);
            app.notice = Some(Notice::info("Activity saved successfully!"));
            if matches!(app.nav.current(), Route::AddActivity) {
                app.nav.pop();
            }
            Effect::None
        }

        Action::ActivitySaveFailed(message) => {
            // The form stays open with its contents
            app.is_busy = false;
            app.notice = Some(Notice::error(message));
            Effect::None
        }

        Action::ActivitiesLoaded(mut activities) => {
            sort_newest_first(&mut activities);
            app.activities = activities;
            Effect::None
        }

        Action::RefreshMatches => {
            if app.matches.loading || !app.is_authenticated() {
                return Effect::None;
            }
            app.matches.loading = true;
            Effect::LoadMatches
        }

        Action::MatchesLoaded { cricket, football } => {
            let board = &mut app.matches;
            board.loading = false;
            board.loaded = true;
            match cricket {
                Ok(list) => {
                    board.cricket = list;
                    board.cricket_error = None;
                }
                Err(e) => board.cricket_error = Some(e),
            }
            match football {
                Ok(list) => {
                    board.football = list;
                    board.football_error = None;
                }
                Err(e) => board.football_error = Some(e),
            }
            Effect::None
        }

        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
    }
}

fn sign_in(app: &mut App, user: User) {
    app.is_busy = false;
    app.status_message = format!("Welcome, {}!", user.name);
    app.user = Some(user);
    app.matches.loading = true;
    app.nav.reset(Route::Main(Tab::Home));
}
