//! # TUI Components
//!
//! Reusable building blocks shared by the screens.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from the data they need:
//! - `TitleBar`: screen title, status, spinner, signed-in user
//! - `TabBar`: Home / Quiz / Chat strip
//! - `Footer`: current notice or key hints
//! - `TextInput`, `FormView`: render a field or form held in `TuiState`
//!
//! ### Stateful Components (Event-Driven)
//!
//! State lives in `TuiState` across frames and implements `EventHandler`:
//! - `TextField`: single-line input, emits `FieldEvent`
//! - `Form`: focus cycling over fields, emits `FormEvent::Submit`
//! - `TranscriptViewState`: chat scroll position and stick-to-bottom
//!
//! Components receive external data as props and never reach into `App`
//! on their own.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── tab_bar.rs
//! ├── footer.rs
//! ├── text_field.rs
//! ├── form.rs
//! └── transcript_view.rs
//! ```

pub mod footer;
pub mod form;
pub mod tab_bar;
pub mod text_field;
pub mod title_bar;
pub mod transcript_view;

pub use footer::Footer;
pub use form::{ChoiceField, Form, FormEvent, FormField, FormView};
pub use tab_bar::TabBar;
pub use text_field::{FieldEvent, TextField, TextInput};
pub use title_bar::TitleBar;
pub use transcript_view::{TranscriptView, TranscriptViewState};

/// Braille spinner, advanced at ~12 frames per second by the event loop.
pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
