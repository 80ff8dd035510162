use crate::domain::entities::conversation::ConversationStatus;
use crate::domain::entities::message::SenderRole;

/// Events published after the dashboard state changes
#[derive(Debug, Clone, PartialEq)]
pub enum SystemEvent {
    MessageAppended {
        message_id: String,
        conversation_id: String,
        sender: SenderRole,
        unread_count: u32,
        timestamp: String, // ISO 8601
    },
    ConversationResolved {
        conversation_id: String,
        previous_status: ConversationStatus,
        timestamp: String, // ISO 8601
    },
    ConversationAssigned {
        conversation_id: String,
        previous_assignee: Option<String>,
        assigned_to: String,
        timestamp: String, // ISO 8601
    },
    ConversationUnassigned {
        conversation_id: String,
        previous_assignee: Option<String>,
        timestamp: String, // ISO 8601
    },
    ConversationRead {
        conversation_id: String,
        cleared: u32,
        timestamp: String, // ISO 8601
    },
    DarkModeChanged {
        enabled: bool,
        timestamp: String, // ISO 8601
    },
}

impl SystemEvent {
    /// Conversation the event concerns, if any
    pub fn conversation_id(&self) -> Option<&str> {
        match self {
            SystemEvent::MessageAppended { conversation_id, .. }
            | SystemEvent::ConversationResolved { conversation_id, .. }
            | SystemEvent::ConversationAssigned { conversation_id, .. }
            | SystemEvent::ConversationUnassigned { conversation_id, .. }
            | SystemEvent::ConversationRead { conversation_id, .. } => Some(conversation_id),
            SystemEvent::DarkModeChanged { .. } => None,
        }
    }
}
