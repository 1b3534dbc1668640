//! # Navigation Shell
//!
//! Screens are addressed by [`Route`] values and stacked by the [`Navigator`].
//! The main area is a tab bar ([`Tab`]) living at the bottom of the stack;
//! detail screens (profile, quiz questions, results, forms) are pushed on top.
//!
//! ```text
//! Login ──login──▶ Main(Home) ─┬─▶ Profile
//!                   │ Tab      ├─▶ AddActivity
//!                   ▼          └─▶ SportDetails(name)
//!              Main(Quiz) ──▶ QuizQuestions ──▶ QuizResults { score, total }
//!                   │ Tab
//!                   ▼
//!              Main(Chat)
//! ```
//!
//! Route parameters travel inside the `Route` value itself, so a screen never
//! has to look anywhere else for its arguments.

/// Tabs of the main screen, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Quiz,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Quiz, Tab::Chat];

    /// Cycles to the next tab (wraps around)
    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Quiz,
            Tab::Quiz => Tab::Chat,
            Tab::Chat => Tab::Home,
        }
    }

    /// Cycles to the previous tab (wraps around)
    pub fn prev(self) -> Tab {
        match self {
            Tab::Home => Tab::Chat,
            Tab::Quiz => Tab::Home,
            Tab::Chat => Tab::Quiz,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Quiz => "Quiz",
            Tab::Chat => "Chat",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Quiz => 1,
            Tab::Chat => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Main(Tab),
    Profile,
    QuizQuestions,
    QuizResults { score: usize, total: usize },
    AddActivity,
    SportDetails(String),
}

impl Route {
    /// Header shown in the title bar for this screen.
    pub fn title(&self) -> String {
        match self {
            Route::Login => "Sign In".to_string(),
            Route::Register => "Create Account".to_string(),
            Route::Main(tab) => tab.label().to_string(),
            Route::Profile => "Profile".to_string(),
            Route::QuizQuestions => "Sports Quiz".to_string(),
            Route::QuizResults { .. } => "Quiz Results".to_string(),
            Route::AddActivity => "Add Activity".to_string(),
            Route::SportDetails(name) => name.clone(),
        }
    }

    /// Routes only reachable with a signed-in session.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

/// Stack of routes. The root is never popped, so there is always a current screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    root: Route,
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Initial route gated on whether a stored session was found at startup.
    pub fn initial(authenticated: bool) -> Self {
        if authenticated {
            Self::new(Route::Main(Tab::Home))
        } else {
            Self::new(Route::Login)
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pops the top route. Returns false when already at the root.
    pub fn pop(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Swaps the current screen for another without growing the stack.
    pub fn replace(&mut self, route: Route) {
        if self.stack.pop().is_some() {
            self.stack.push(route);
        } else {
            self.root = route;
        }
    }

    /// Clears the whole stack down to a single root.
    pub fn reset(&mut self, route: Route) {
        self.stack.clear();
        self.root = route;
    }

    /// Jumps to a main tab, discarding anything stacked above the tab bar.
    pub fn select_tab(&mut self, tab: Tab) {
        self.reset(Route::Main(tab));
    }

    /// The tab currently shown (or underneath the stacked screens), if signed in.
    pub fn active_tab(&self) -> Option<Tab> {
        match self.root {
            Route::Main(tab) => Some(tab),
            _ => None,
        }
    }
}
