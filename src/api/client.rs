use std::time::Duration;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthResponse, ChatRequest, ChatResponse, CricketMatchType, DataEnvelope, FootballEvent,
    LoginRequest, MessageResponse, PasswordRequest, RegisterRequest, cricket_summaries,
    football_summaries,
};
use crate::core::config::{DEFAULT_CHAT_TIMEOUT_SECS, ResolvedConfig};
use crate::core::session::{AuthStatus, User};
use crate::core::sports::MatchSummary;
use crate::storage::SessionStore;

/// Outcome of a successful login. The session is already persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Outcome of a successful registration. `user` is set when a token came back
/// and the session was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterResult {
    pub message: String,
    pub token: Option<String>,
    pub user: Option<User>,
}

/// HTTP client for the sports service.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    sports_base_url: String,
    chat_timeout: Duration,
    http: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    /// Creates a client against `base_url` (also used for the sports feeds).
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            sports_base_url: base_url.clone(),
            base_url,
            chat_timeout: Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn from_config(config: &ResolvedConfig, session: SessionStore) -> Self {
        Self::new(config.api_base_url.clone(), session)
            .with_sports_base_url(config.sports_base_url.clone())
            .with_chat_timeout(config.chat_timeout)
    }

    pub fn with_sports_base_url(mut self, url: impl Into<String>) -> Self {
        self.sports_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_chat_timeout(mut self, timeout: Duration) -> Self {
        self.chat_timeout = timeout;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn bearer_token(&self) -> Result<String, ApiError> {
        match self.session.token().await? {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::NotAuthenticated),
        }
    }

    /// Reads the body as `T` on success. On a non-success status, surfaces the
    /// body's `message` field, or `fallback` when there is none.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Response status: {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<MessageResponse>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            warn!("Request failed: HTTP {} - {}", status.as_u16(), message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Signs in and persists the token plus a user record built from the email.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        info!("Attempting login to: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let body: AuthResponse = Self::read_json(response, "Login failed").await?;

        let token = body
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;
        let user = User::from_email(email);
        self.session.save(&token, &user).await?;
        info!("Login succeeded for {}", email);

        Ok(LoginResult {
            message: body.message.unwrap_or_else(|| "Login successful".to_string()),
            token,
            user,
        })
    }

    /// Creates an account. When the server also issues a token, the session is
    /// persisted as if the user had signed in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResult, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        info!("Attempting registration to: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;
        let body: AuthResponse = Self::read_json(response, "Registration failed").await?;

        let token = body.token.filter(|t| !t.is_empty());
        let user = match &token {
            Some(token) => {
                let user = User {
                    email: email.to_string(),
                    name: name.to_string(),
                };
                self.session.save(token, &user).await?;
                Some(user)
            }
            None => None,
        };

        Ok(RegisterResult {
            message: body
                .message
                .unwrap_or_else(|| "Registration successful".to_string()),
            token,
            user,
        })
    }

    /// Changes the signed-in user's password. Returns the server's message.
    pub async fn update_password(&self, password: &str) -> Result<String, ApiError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/auth/update-password", self.base_url);
        info!("Updating password: {}", url);

        let response = self
            .http
            .patch(&url)
            .bearer_auth(token)
            .json(&PasswordRequest { password })
            .send()
            .await?;
        let body: MessageResponse = Self::read_json(response, "Password update failed").await?;
        Ok(body
            .message
            .unwrap_or_else(|| "Password updated successfully".to_string()))
    }

    /// Sends one chat message and returns the assistant's reply.
    ///
    /// The whole exchange (connect, send, read body) is bounded by the chat
    /// timeout; when it expires the request is dropped and `TimedOut` returned.
    pub async fn send_chat_message(&self, text: &str) -> Result<String, ApiError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/chats", self.base_url);
        info!("Sending chat message ({} chars) to: {}", text.len(), url);

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .bearer_auth(&token)
                .json(&ChatRequest { message: text })
                .send()
                .await?;
            Self::read_json::<ChatResponse>(response, "Failed to send message").await
        };

        let body = match tokio::time::timeout(self.chat_timeout, exchange).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("Chat request timed out after {:?}", self.chat_timeout);
                return Err(ApiError::TimedOut);
            }
        };

        body.reply
            .ok_or_else(|| ApiError::Parse("response carried no reply".to_string()))
    }

    async fn fetch_data<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.sports_base_url, path);
        info!("Fetching {} from: {}", what, url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        let fallback = format!("Failed to fetch {what}: {}", status.as_u16());
        let envelope: DataEnvelope<T> = Self::read_json(response, &fallback).await?;
        Ok(envelope.data)
    }

    pub async fn fetch_cricket_matches(&self) -> Result<Vec<MatchSummary>, ApiError> {
        let types: Vec<CricketMatchType> = self
            .fetch_data("/sports/cricket/matches", "cricket matches")
            .await?;
        let matches = cricket_summaries(types);
        debug!("Received {} cricket matches", matches.len());
        Ok(matches)
    }

    pub async fn fetch_football_matches(&self) -> Result<Vec<MatchSummary>, ApiError> {
        let events: Vec<FootballEvent> = self
            .fetch_data("/sports/football/live", "football matches")
            .await?;
        let matches = football_summaries(events);
        debug!("Received {} football matches", matches.len());
        Ok(matches)
    }

    /// What the store says about the session. Never fails; problems read as anonymous.
    pub async fn check_auth_status(&self) -> AuthStatus {
        self.session.status().await
    }

    /// Forgets the stored session. Activities stay on the device.
    pub async fn logout(&self) {
        self.session.clear().await;
        info!("Session cleared");
    }
}
