//! # API Gateway
//!
//! Thin wrappers over the sports service's HTTP endpoints. Each call sends one
//! request, awaits one response, and either returns a normalized result or an
//! [`ApiError`] carrying the server's message (or a per-operation fallback).
//!
//! | call                     | request                          |
//! |--------------------------|----------------------------------|
//! | `login`                  | `POST /auth/login`               |
//! | `register`               | `POST /auth/register`            |
//! | `update_password`        | `PATCH /auth/update-password` ¹  |
//! | `send_chat_message`      | `POST /chats` ¹ (timeout)        |
//! | `fetch_cricket_matches`  | `GET /sports/cricket/matches`    |
//! | `fetch_football_matches` | `GET /sports/football/live`      |
//!
//! ¹ bearer token from the stored session
//!
//! Login and registration also write the session to the key-value store.
//! No retries, no caching.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, LoginResult, RegisterResult};
pub use error::ApiError;
