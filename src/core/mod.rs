//! # Core Application Logic
//!
//! This module contains Arena's business logic.
//! It knows nothing about any specific UI technology, the network, or the disk.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │  Storage   │
//!     │  Adapter   │      │  gateway   │      │ (key-value │
//!     │ (ratatui)  │      │ (reqwest)  │      │   files)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`navigation`]: Routes, tabs and the screen stack
//! - [`session`], [`quiz`], [`chat`], [`activity`], [`sports`]: domain types and state machines
//! - [`config`]: Layered configuration

pub mod action;
pub mod activity;
pub mod chat;
pub mod config;
pub mod navigation;
pub mod quiz;
pub mod session;
pub mod sports;
pub mod state;
pub mod validation;
