use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::stamped(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::stamped(Role::Assistant, content)
    }

    fn stamped(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}
