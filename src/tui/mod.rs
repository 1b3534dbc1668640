//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core `Action`s and performs the
//! `Effect`s the reducer asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Effects
//!
//! Every effect that touches the network or disk runs in its own tokio task
//! and reports back by sending an `Action` over an `mpsc` channel. The loop
//! drains that channel between frames, so state is only ever mutated on
//! this thread, through `update()`.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request in flight, scores loading, reply pending): draws
//!   every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms and only redraws on events, background
//!   results, resize or an expiring notice.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod input;
mod screens;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::core::action::{Action, Effect, update};
use crate::core::activity::Activity;
use crate::core::navigation::Route;
use crate::core::session::AuthStatus;
use crate::core::state::{App, Notice};
use crate::storage::ActivityLog;
use crate::tui::components::{Form, TextField, TranscriptViewState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::screens::home::HomeState;
use crate::tui::screens::profile::ProfileState;
use crate::tui::screens::{add_activity, login, register};

/// How long a notice stays in the footer.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// The I/O handles effects run against.
#[derive(Clone)]
pub struct Services {
    pub client: ApiClient,
    pub activities: ActivityLog,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Form buffers
    pub login: Form,
    pub register: Form,
    pub activity: Form,
    pub password: TextField,
    pub chat_input: TextField,
    // Per-screen cursors and scroll positions
    pub transcript: TranscriptViewState,
    pub home: HomeState,
    pub profile: ProfileState,
    pub quiz_cursor: usize,
    pub detail_scroll: u16,
    /// Route the state above was last reset for.
    shown_route: Route,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            login: login::form(),
            register: register::form(),
            activity: add_activity::form(),
            password: TextField::masked("New password"),
            chat_input: TextField::new("Message"),
            transcript: TranscriptViewState::new(),
            home: HomeState::default(),
            profile: ProfileState::default(),
            quiz_cursor: 0,
            detail_scroll: 0,
            shown_route: app.nav.current().clone(),
        }
    }

    /// Resets the presentation state of a screen when it is entered.
    /// Staying on the same route (e.g. a failed submit) keeps what was typed.
    pub fn sync_route(&mut self, app: &App) {
        let current = app.nav.current();
        if *current == self.shown_route {
            return;
        }
        debug!("Route changed: {:?} -> {:?}", self.shown_route, current);
        match current {
            Route::Login => {
                // Signed out: nothing typed in the old session survives
                self.login = login::form();
                self.chat_input.clear();
                self.transcript = TranscriptViewState::new();
                self.home = HomeState::default();
            }
            Route::Register => self.register = register::form(),
            Route::AddActivity => self.activity = add_activity::form(),
            Route::Profile => {
                self.profile = ProfileState::default();
                self.password.clear();
            }
            Route::QuizQuestions => self.quiz_cursor = 0,
            Route::SportDetails(_) => self.detail_scroll = 0,
            Route::Main(_) | Route::QuizResults { .. } => {}
        }
        self.shown_route = current.clone();
    }
}

/// Tracks how long the current notice has been on screen.
#[derive(Debug, Default)]
struct NoticeTimer {
    shown: Option<(Notice, Instant)>,
}

impl NoticeTimer {
    /// True once `notice` has been visible for `ttl`. A replaced notice
    /// restarts the clock.
    fn expired(&mut self, notice: Option<&Notice>, now: Instant, ttl: Duration) -> bool {
        let Some(notice) = notice else {
            self.shown = None;
            return false;
        };
        match &self.shown {
            Some((seen, since)) if seen == notice => {
                if now.duration_since(*since) < ttl {
                    return false;
                }
                self.shown = None;
                true
            }
            _ => {
                self.shown = Some((notice.clone(), now));
                false
            }
        }
    }
}

/// Disk writes still in flight. Awaited before the process exits so a
/// quit right after a save or logout cannot cut the write short.
#[derive(Default)]
pub struct PendingWrites {
    handles: Vec<JoinHandle<()>>,
}

impl PendingWrites {
    fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    pub async fn flush(self) {
        if !self.handles.is_empty() {
            info!("Waiting for {} pending write(s)", self.handles.len());
        }
        for handle in self.handles {
            if let Err(e) = handle.await {
                warn!("Pending write did not complete: {}", e);
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // The keyboard enhancement protocol is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Runs the UI until the user quits. The returned writes must be flushed
/// before the runtime shuts down.
pub fn run(services: Services, status: AuthStatus) -> std::io::Result<PendingWrites> {
    let mut app = App::new(status);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut pending = PendingWrites::default();

    // A restored session starts on the home feed; fill it
    if app.is_authenticated() {
        spawn_effect(Effect::LoadActivities, &services, &tx);
        let effect = update(&mut app, Action::RefreshMatches);
        spawn_effect(effect, &services, &tx);
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut notice_timer = NoticeTimer::default();

    loop {
        let animating =
            app.is_busy || app.matches.loading || app.transcript.is_awaiting_reply();
        if animating {
            needs_redraw = true;
        }

        if notice_timer.expired(app.notice.as_ref(), Instant::now(), NOTICE_TTL) {
            update(&mut app, Action::DismissNotice);
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = input::handle_event(&app, &mut tui, &event)
                && dispatch(&mut app, &mut tui, action, &services, &tx, &mut pending)
            {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, &mut tui, action, &services, &tx, &mut pending);
        }
    }

    info!("Arena shutting down");
    ratatui::restore();
    Ok(pending)
}

/// Runs one action through the reducer and starts the resulting effect.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    services: &Services,
    tx: &mpsc::Sender<Action>,
    pending: &mut PendingWrites,
) -> bool {
    let effect = update(app, action);
    tui.sync_route(app);
    if effect == Effect::Quit {
        return true;
    }
    if let Some(handle) = spawn_effect(effect, services, tx) {
        pending.track(handle);
    }
    false
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to deliver background result: receiver dropped");
    }
}

/// Starts the task for `effect`. Returns its handle when the task writes to
/// disk (saving an activity, clearing the session).
fn spawn_effect(
    effect: Effect,
    services: &Services,
    tx: &mpsc::Sender<Action>,
) -> Option<JoinHandle<()>> {
    let client = services.client.clone();
    let activities = services.activities.clone();
    let tx = tx.clone();

    match effect {
        Effect::None | Effect::Quit => {}
        Effect::Login(creds) => {
            info!("Spawning login request");
            tokio::spawn(async move {
                let action = match client.login(&creds.email, &creds.password).await {
                    Ok(result) => Action::LoginSucceeded {
                        user: result.user,
                        message: result.message,
                    },
                    Err(e) => Action::AuthFailed(e.to_string()),
                };
                send(&tx, action);
            });
        }
        Effect::Register(registration) => {
            info!("Spawning registration request");
            tokio::spawn(async move {
                let action = match client
                    .register(
                        &registration.name,
                        &registration.email,
                        &registration.password,
                    )
                    .await
                {
                    Ok(result) => Action::RegisterSucceeded {
                        user: result.user,
                        message: result.message,
                    },
                    Err(e) => Action::AuthFailed(e.to_string()),
                };
                send(&tx, action);
            });
        }
        Effect::UpdatePassword(change) => {
            info!("Spawning password update");
            tokio::spawn(async move {
                let action = match client.update_password(&change.password).await {
                    Ok(message) => Action::PasswordChanged(message),
                    Err(e) => Action::PasswordChangeFailed(e.to_string()),
                };
                send(&tx, action);
            });
        }
        Effect::SendChat(text) => {
            info!("Spawning chat request");
            tokio::spawn(async move {
                let action = match client.send_chat_message(&text).await {
                    Ok(reply) => Action::ChatReplyReceived(reply),
                    Err(e) => Action::ChatReplyFailed(e.to_string()),
                };
                send(&tx, action);
            });
        }
        Effect::SaveActivity(entry) => {
            return Some(tokio::spawn(async move {
                let activity = Activity::record(entry, Utc::now());
                let action = match activities.append(activity).await {
                    Ok(saved) => Action::ActivitySaved(saved),
                    Err(e) => {
                        warn!("Failed to save activity: {}", e);
                        Action::ActivitySaveFailed(String::from("Failed to save activity"))
                    }
                };
                send(&tx, action);
            }));
        }
        Effect::LoadActivities => {
            tokio::spawn(async move {
                let list = activities.load_or_empty().await;
                send(&tx, Action::ActivitiesLoaded(list));
            });
        }
        Effect::LoadMatches => {
            info!("Spawning live score requests");
            tokio::spawn(async move {
                let (cricket, football) = tokio::join!(
                    client.fetch_cricket_matches(),
                    client.fetch_football_matches()
                );
                send(
                    &tx,
                    Action::MatchesLoaded {
                        cricket: cricket.map_err(|e| e.to_string()),
                        football: football.map_err(|e| e.to_string()),
                    },
                );
            });
        }
        Effect::LoadHome => {
            spawn_effect(Effect::LoadActivities, services, &tx);
            spawn_effect(Effect::LoadMatches, services, &tx);
        }
        Effect::Logout => {
            return Some(tokio::spawn(async move {
                client.logout().await;
            }));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Tab;
    use crate::core::session::{Credentials, User};
    use crate::test_support::signed_in_app;
    use crate::tui::component::EventHandler;
    use crate::tui::event::TuiEvent;

    #[test]
    fn test_failed_login_keeps_typed_values() {
        let mut app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        tui.login.handle_event(&TuiEvent::InputChar('s'));

        update(
            &mut app,
            Action::SubmitLogin(Credentials {
                email: "s".into(),
                password: "pw".into(),
            }),
        );
        update(&mut app, Action::AuthFailed("Invalid credentials".into()));
        tui.sync_route(&app);
        assert_eq!(tui.login.value(0), "s");
    }

    #[test]
    fn test_logout_clears_presentation_state() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new(&app);
        tui.chat_input.set_value("half typed");
        tui.home.selected_sport = 3;

        update(&mut app, Action::Logout);
        tui.sync_route(&app);
        assert!(tui.chat_input.value().is_empty());
        assert_eq!(tui.home.selected_sport, 0);
    }

    #[test]
    fn test_entering_add_activity_starts_fresh_form() {
        let mut app = signed_in_app();
        let mut tui = TuiState::new(&app);
        tui.activity.handle_event(&TuiEvent::CursorRight);
        assert!(!tui.activity.value(0).is_empty());

        update(&mut app, Action::Navigate(Route::AddActivity));
        tui.sync_route(&app);
        assert!(tui.activity.value(0).is_empty());
    }

    #[test]
    fn test_sign_in_lands_on_home() {
        let mut app = App::new(AuthStatus::Anonymous);
        let mut tui = TuiState::new(&app);
        update(
            &mut app,
            Action::LoginSucceeded {
                user: User::from_email("ana@club.org"),
                message: "Login successful".into(),
            },
        );
        tui.sync_route(&app);
        assert_eq!(tui.shown_route, Route::Main(Tab::Home));
    }

    #[test]
    fn test_notice_expires_after_ttl() {
        let mut timer = NoticeTimer::default();
        let notice = Notice::info("Activity saved successfully!");
        let t0 = Instant::now();
        let ttl = Duration::from_secs(4);

        assert!(!timer.expired(Some(&notice), t0, ttl));
        assert!(!timer.expired(Some(&notice), t0 + Duration::from_secs(3), ttl));
        assert!(timer.expired(Some(&notice), t0 + Duration::from_secs(4), ttl));
    }

    #[test]
    fn test_replaced_notice_restarts_clock() {
        let mut timer = NoticeTimer::default();
        let t0 = Instant::now();
        let ttl = Duration::from_secs(4);

        timer.expired(Some(&Notice::info("first")), t0, ttl);
        let second = Notice::error("second");
        assert!(!timer.expired(Some(&second), t0 + Duration::from_secs(3), ttl));
        assert!(!timer.expired(Some(&second), t0 + Duration::from_secs(6), ttl));
        assert!(timer.expired(Some(&second), t0 + Duration::from_secs(7), ttl));
        assert!(!timer.expired(None, t0 + Duration::from_secs(8), ttl));
    }

    fn memory_services() -> Services {
        let store = std::sync::Arc::new(crate::storage::MemoryStore::new());
        let session = crate::storage::SessionStore::new(store.clone());
        Services {
            client: ApiClient::new("http://127.0.0.1:9", session),
            activities: ActivityLog::new(store),
        }
    }

    #[tokio::test]
    async fn test_flush_waits_for_logout_to_clear_session() {
        let services = memory_services();
        let user = User::from_email("tester@arena.dev");
        services.client.session().save("tok-1", &user).await.unwrap();
        let (tx, _rx) = mpsc::channel();

        let mut pending = PendingWrites::default();
        let handle = spawn_effect(Effect::Logout, &services, &tx).unwrap();
        pending.track(handle);
        pending.flush().await;

        assert_eq!(services.client.session().status().await, AuthStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_flush_waits_for_activity_save() {
        let services = memory_services();
        let (tx, rx) = mpsc::channel();
        let entry = crate::core::activity::ActivityEntry {
            sport: "Tennis".into(),
            duration_minutes: 45,
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            notes: String::new(),
        };

        let mut pending = PendingWrites::default();
        pending.track(spawn_effect(Effect::SaveActivity(entry), &services, &tx).unwrap());
        pending.flush().await;

        assert_eq!(services.activities.list().await.unwrap().len(), 1);
        assert!(matches!(rx.try_recv(), Ok(Action::ActivitySaved(_))));
    }

    #[tokio::test]
    async fn test_network_effects_are_not_tracked() {
        let services = memory_services();
        let (tx, _rx) = mpsc::channel();
        assert!(spawn_effect(Effect::LoadActivities, &services, &tx).is_none());
        assert!(spawn_effect(Effect::None, &services, &tx).is_none());
    }
}
