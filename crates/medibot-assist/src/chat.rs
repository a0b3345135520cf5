//! Chat assistant adapter.
//!
//! Free-text conversation with the assistant persona. Each settled
//! exchange is appended to the chat history through the storage port.

use crate::storage::{keys, Namespace};
use chrono::{DateTime, Utc};
use medibot_core::{Expectation, GatewayResult, Query, SourceLink};
use medibot_gateway::Client;
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are Medibot, a friendly medical assistant for a patient \
portal. Answer health questions in plain language, suggest which kind of doctor or clinic \
fits a concern, and always remind the user that you do not replace professional medical \
advice. For emergencies, tell the user to call their local emergency number immediately.";

/// Who said a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The patient.
    User,
    /// The assistant.
    Assistant,
}

/// One stored chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Speaker.
    pub role: ChatRole,
    /// What was said.
    pub text: String,
    /// When the turn settled.
    pub at: DateTime<Utc>,
}

/// A settled assistant reply.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// Reply text.
    pub text: String,
    /// Grounding sources, when the answer was web-grounded.
    pub sources: Vec<SourceLink>,
}

/// Adapter for the chat-style assistant.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    client: Client,
    store: Namespace,
}

impl ChatAssistant {
    /// Create an assistant over a gateway client and a storage namespace.
    pub fn new(client: Client, store: Namespace) -> Self {
        Self { client, store }
    }

    /// Send one user message and return the assistant's reply.
    ///
    /// The exchange is recorded in chat history only after the call
    /// settles successfully; failures leave history untouched.
    pub async fn send(&self, message: &str) -> GatewayResult<ChatReply> {
        let query = Query::builder()
            .prompt(message)
            .system_instruction(SYSTEM_PROMPT)
            .expects(Expectation::FreeText)
            .web_search(true)
            .build()?;

        let completion = self.client.generate(&query).await?;

        self.append_history(ChatRole::User, message);
        self.append_history(ChatRole::Assistant, &completion.text);

        Ok(ChatReply {
            text: completion.text,
            sources: completion.sources,
        })
    }

    /// Stored conversation, oldest first.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.store.get_json(keys::CHAT_HISTORY).unwrap_or_default()
    }

    /// Drop the stored conversation.
    pub fn clear_history(&self) {
        self.store.remove(keys::CHAT_HISTORY);
    }

    fn append_history(&self, role: ChatRole, text: &str) {
        let mut history = self.history();
        history.push(ChatTurn {
            role,
            text: text.to_string(),
            at: Utc::now(),
        });
        self.store.put_json(keys::CHAT_HISTORY, &history);
    }
}
