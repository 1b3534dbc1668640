//! # Chat Transcript
//!
//! Ordered, append-only list of messages between the user and the sports
//! assistant, plus a single-flight flag for the outstanding reply.
//!
//! ```text
//!            submit(text)                 receive_reply(text)
//! Idle ─────────────────────▶ Awaiting ─────────────────────▶ Idle
//!  ▲   (user message appended)    │      (assistant message appended)
//!  │                              │ fail_reply()
//!  └──────────────────────────────┘      (nothing appended)
//! ```
//!
//! Submissions while `Awaiting` are refused, so at most one request is ever in
//! flight and every assistant message follows the user message it answers.

use std::fmt;

use chrono::Utc;

/// Shown above an empty transcript. Not part of the conversation itself.
pub const GREETING: &str = "Hello! I'm your sports assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Millisecond timestamp, bumped as needed so ids strictly increase.
    pub id: u64,
    pub text: String,
    pub sender: ChatSender,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    EmptyMessage,
    ReplyPending,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::EmptyMessage => write!(f, "message is empty"),
            ChatError::ReplyPending => write!(f, "still waiting for the previous reply"),
        }
    }
}

impl std::error::Error for ChatError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match self.messages.last() {
            Some(last) => now.max(last.id + 1),
            None => now,
        }
    }

    fn push(&mut self, text: String, sender: ChatSender) -> &ChatMessage {
        let id = self.next_id();
        let index = self.messages.len();
        self.messages.push(ChatMessage { id, text, sender });
        &self.messages[index]
    }

    /// Appends the user's message and marks a reply as pending.
    ///
    /// Returns the text to send. Blank input and submissions while a reply is
    /// pending are refused without touching the transcript.
    pub fn submit(&mut self, text: &str) -> Result<String, ChatError> {
        if self.awaiting_reply {
            return Err(ChatError::ReplyPending);
        }
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.awaiting_reply = true;
        Ok(self.push(text.to_string(), ChatSender::User).text.clone())
    }

    /// Appends the assistant's reply to the pending submission.
    ///
    /// Returns false (and appends nothing) if no reply was pending.
    pub fn receive_reply(&mut self, text: &str) -> bool {
        if !self.awaiting_reply {
            return false;
        }
        self.awaiting_reply = false;
        self.push(text.to_string(), ChatSender::Assistant);
        true
    }

    /// Gives up on the pending reply without appending anything.
    pub fn fail_reply(&mut self) {
        self.awaiting_reply = false;
    }
}
