use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,  // Customer
    Admin, // Support agent
    Bot,
}

impl SenderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderRole::User => "user",
            SenderRole::Admin => "admin",
            SenderRole::Bot => "bot",
        }
    }
}

impl std::fmt::Display for SenderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Document,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// One utterance in a conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: SenderRole,
    pub timestamp: DateTime<Utc>,
    /// Customer id when `sender` is `User`, team member id otherwise
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_typing: Option<bool>,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        sender: SenderRole,
        timestamp: DateTime<Utc>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
            timestamp,
            user_id: user_id.into(),
            attachments: None,
            is_typing: None,
        }
    }

    /// Reply typed by an agent in the conversation view. Id is `msg-<epoch millis>`.
    pub fn agent_reply(text: impl Into<String>, agent_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(
            format!("msg-{}", now.timestamp_millis()),
            text,
            SenderRole::Admin,
            now,
            agent_id,
        )
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn is_from_customer(&self) -> bool {
        self.sender == SenderRole::User
    }

    /// Validate message text
    pub fn validate_text(text: &str) -> Result<(), String> {
        if text.trim().is_empty() {
            return Err("Message text cannot be empty".to_string());
        }
        Ok(())
    }
}
