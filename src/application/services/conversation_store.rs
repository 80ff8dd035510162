use crate::domain::entities::{Conversation, ConversationStatus, Message, User};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::SystemEvent;
use crate::domain::ports::event_bus::EventBus;
use crate::domain::services::conversation_filter::{self, FilterMode};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// In-memory owner of every conversation the dashboard shows.
///
/// Conversations keep seed order for the life of the store. Mutations replace
/// the targeted conversation in place and never reorder the collection. Derived
/// views are recomputed on every call.
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    users: Vec<User>,
    team_members: Vec<User>,
    selected_conversation_id: Option<String>,
    selected_filter: FilterMode,
    event_bus: Option<Arc<dyn EventBus>>,
}

impl ConversationStore {
    pub fn new(conversations: Vec<Conversation>, users: Vec<User>, team_members: Vec<User>) -> Self {
        Self {
            conversations,
            users,
            team_members,
            selected_conversation_id: None,
            selected_filter: FilterMode::All,
            event_bus: None,
        }
    }

    pub fn with_event_bus(mut self, event_bus: Arc<dyn EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn team_members(&self) -> &[User] {
        &self.team_members
    }

    pub fn conversation(&self, conversation_id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == conversation_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn team_member(&self, team_member_id: &str) -> Option<&User> {
        self.team_members.iter().find(|t| t.id == team_member_id)
    }

    pub fn customer_of(&self, conversation: &Conversation) -> Option<&User> {
        self.user(&conversation.user_id)
    }

    /// The signed-in agent: the first team member
    pub fn current_agent(&self) -> Option<&User> {
        self.team_members.first()
    }

    pub fn selected_conversation_id(&self) -> Option<&str> {
        self.selected_conversation_id.as_deref()
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.selected_conversation_id
            .as_deref()
            .and_then(|id| self.conversation(id))
    }

    /// Move the "currently viewed" pointer. Unread counts are left alone;
    /// callers that want read-on-open call [`Self::mark_read`] as well.
    pub fn set_selected_conversation(&mut self, conversation_id: Option<&str>) {
        tracing::debug!("Selected conversation changed to {:?}", conversation_id);
        self.selected_conversation_id = conversation_id.map(str::to_string);
    }

    pub fn selected_filter(&self) -> FilterMode {
        self.selected_filter
    }

    pub fn set_selected_filter(&mut self, mode: FilterMode) {
        tracing::debug!("Selected filter changed to {}", mode);
        self.selected_filter = mode;
    }

    /// Append `message` at the tail of the conversation.
    ///
    /// The unread counter grows by one unless the conversation is the one
    /// currently selected, in which case it is left unchanged.
    #[tracing::instrument(skip(self, message), fields(message_id = %message.id))]
    pub fn append_message(&mut self, conversation_id: &str, message: Message) -> DomainResult<()> {
        self.append_message_at(conversation_id, message, Utc::now())
    }

    /// Same as [`Self::append_message`] with an explicit receive time for `lastMessageTime`
    pub fn append_message_at(
        &mut self,
        conversation_id: &str,
        message: Message,
        received_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        Message::validate_text(&message.text).map_err(DomainError::ValidationError)?;

        let is_selected = self.selected_conversation_id.as_deref() == Some(conversation_id);
        let conversation = self.find_mut(conversation_id)?;
        if conversation.has_message(&message.id) {
            return Err(DomainError::ValidationError(format!(
                "Message {} already exists in conversation {}",
                message.id, conversation_id
            )));
        }

        let message_id = message.id.clone();
        let sender = message.sender;
        conversation.push_message(message, received_at);
        if !is_selected {
            conversation.unread_count = conversation.unread_count.saturating_add(1);
        }
        let unread_count = conversation.unread_count;

        tracing::info!(
            "Message appended: id={}, conversation_id={}, unread_count={}",
            message_id,
            conversation_id,
            unread_count
        );

        self.publish(SystemEvent::MessageAppended {
            message_id,
            conversation_id: conversation_id.to_string(),
            sender,
            unread_count,
            timestamp: received_at.to_rfc3339(),
        });

        Ok(())
    }

    /// Build an agent reply authored by the current agent and append it.
    ///
    /// Replies in the same millisecond get a `-<n>` suffix so ids stay unique
    /// within the conversation.
    pub fn send_reply(&mut self, conversation_id: &str, text: &str) -> DomainResult<Message> {
        let now = Utc::now();
        let agent_id = self
            .current_agent()
            .map(|agent| agent.id.clone())
            .ok_or_else(|| DomainError::ValidationError("No team member to author the reply".to_string()))?;

        let mut message = Message::agent_reply(text, agent_id, now);
        let conversation = self
            .conversation(conversation_id)
            .ok_or_else(|| DomainError::NotFound(format!("Conversation {} not found", conversation_id)))?;
        message.id = conversation.free_message_id(&message.id);

        self.append_message_at(conversation_id, message.clone(), now)?;
        Ok(message)
    }

    /// Set status to resolved. Resolving twice has the same effect as once.
    #[tracing::instrument(skip(self))]
    pub fn mark_resolved(&mut self, conversation_id: &str) -> DomainResult<()> {
        let conversation = self.find_mut(conversation_id)?;
        let previous_status = conversation.status;
        conversation.status = ConversationStatus::Resolved;

        if previous_status == ConversationStatus::Resolved {
            tracing::debug!("Conversation {} already resolved", conversation_id);
            return Ok(());
        }

        tracing::info!(
            "Conversation {} resolved (was {})",
            conversation_id,
            previous_status
        );

        self.publish(SystemEvent::ConversationResolved {
            conversation_id: conversation_id.to_string(),
            previous_status,
            timestamp: Utc::now().to_rfc3339(),
        });

        Ok(())
    }

    /// Set the assignee. `None` or a blank id clears the assignment.
    /// The id is not checked against the team member list.
    #[tracing::instrument(skip(self))]
    pub fn assign(&mut self, conversation_id: &str, team_member_id: Option<&str>) -> DomainResult<()> {
        let assignee = team_member_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let conversation = self.find_mut(conversation_id)?;
        let previous_assignee = std::mem::replace(&mut conversation.assigned_to, assignee.clone());

        let timestamp = Utc::now().to_rfc3339();
        let event = match assignee {
            Some(assigned_to) => {
                tracing::info!(
                    "Conversation {} assigned to {} (was {:?})",
                    conversation_id,
                    assigned_to,
                    previous_assignee
                );
                SystemEvent::ConversationAssigned {
                    conversation_id: conversation_id.to_string(),
                    previous_assignee,
                    assigned_to,
                    timestamp,
                }
            }
            None => {
                tracing::info!(
                    "Conversation {} unassigned (was {:?})",
                    conversation_id,
                    previous_assignee
                );
                SystemEvent::ConversationUnassigned {
                    conversation_id: conversation_id.to_string(),
                    previous_assignee,
                    timestamp,
                }
            }
        };
        self.publish(event);

        Ok(())
    }

    /// Reset the unread counter. The only path that lowers it.
    #[tracing::instrument(skip(self))]
    pub fn mark_read(&mut self, conversation_id: &str) -> DomainResult<()> {
        let conversation = self.find_mut(conversation_id)?;
        let cleared = std::mem::take(&mut conversation.unread_count);

        if cleared == 0 {
            return Ok(());
        }

        tracing::info!("Conversation {} read, cleared {} unread", conversation_id, cleared);
        self.publish(SystemEvent::ConversationRead {
            conversation_id: conversation_id.to_string(),
            cleared,
            timestamp: Utc::now().to_rfc3339(),
        });

        Ok(())
    }

    /// Conversations matching `mode`, in store order
    pub fn filter_conversations(&self, mode: FilterMode) -> Vec<&Conversation> {
        let agent_id = self.current_agent().map(|agent| agent.id.as_str());
        let view = conversation_filter::filter_conversations(&self.conversations, mode, agent_id);
        tracing::debug!("Filter {} matched {} conversations", mode, view.len());
        view
    }

    /// Mode filter followed by text narrowing on customer name, subject and last message
    pub fn search_conversations(&self, mode: FilterMode, query: &str) -> Vec<&Conversation> {
        conversation_filter::narrow_by_text(self.filter_conversations(mode), &self.users, query)
    }

    /// What the conversation list shows: the selected filter narrowed by `query`
    pub fn visible_conversations(&self, query: &str) -> Vec<&Conversation> {
        self.search_conversations(self.selected_filter, query)
    }

    fn find_mut(&mut self, conversation_id: &str) -> DomainResult<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| DomainError::NotFound(format!("Conversation {} not found", conversation_id)))
    }

    fn publish(&self, event: SystemEvent) {
        if let Some(ref event_bus) = self.event_bus {
            if let Err(e) = event_bus.publish(event) {
                tracing::warn!("Failed to publish event: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Priority, SenderRole};
    use chrono::TimeZone;

    fn store() -> ConversationStore {
        let created = Utc.with_ymd_and_hms(2023, 5, 1, 9, 30, 0).unwrap();
        let conversation = Conversation {
            id: "conv1".to_string(),
            user_id: "user1".to_string(),
            assigned_to: None,
            status: ConversationStatus::Active,
            priority: Priority::High,
            subject: None,
            messages: Vec::new(),
            created_at: created,
            last_message: None,
            last_message_time: None,
            tags: None,
            source: None,
            unread_count: 0,
        };
        ConversationStore::new(vec![conversation], Vec::new(), Vec::new())
    }

    fn customer_message(text: &str) -> Message {
        Message::new(
            "msg-1",
            text,
            SenderRole::User,
            Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
            "user1",
        )
    }

    #[test]
    fn test_unknown_conversation_is_not_found() {
        let mut store = store();
        let result = store.append_message("nope", customer_message("hi"));
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert!(matches!(store.mark_resolved("nope"), Err(DomainError::NotFound(_))));
        assert!(matches!(store.assign("nope", Some("team1")), Err(DomainError::NotFound(_))));
        assert!(matches!(store.mark_read("nope"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_empty_message_rejected_without_state_change() {
        let mut store = store();
        let result = store.append_message("conv1", customer_message("  "));
        assert!(matches!(result, Err(DomainError::ValidationError(_))));

        let conv = store.conversation("conv1").unwrap();
        assert!(conv.messages.is_empty());
        assert_eq!(conv.unread_count, 0);
    }

    #[test]
    fn test_reply_without_team_member_is_rejected() {
        let mut store = store();
        let result = store.send_reply("conv1", "Looking into it");
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
        assert!(store.conversation("conv1").unwrap().messages.is_empty());
    }

    #[test]
    fn test_duplicate_message_id_rejected_without_state_change() {
        let mut store = store();
        store.append_message("conv1", customer_message("first")).unwrap();

        let result = store.append_message("conv1", customer_message("second"));
        assert!(matches!(result, Err(DomainError::ValidationError(_))));

        let conv = store.conversation("conv1").unwrap();
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.last_message.as_deref(), Some("first"));
        assert_eq!(conv.unread_count, 1);
    }

    #[test]
    fn test_blank_assignee_clears_assignment() {
        let mut store = store();
        store.assign("conv1", Some("team3")).unwrap();
        assert!(store.conversation("conv1").unwrap().is_assigned_to("team3"));

        store.assign("conv1", Some("   ")).unwrap();
        assert!(!store.conversation("conv1").unwrap().is_assigned());
    }

    #[test]
    fn test_selected_filter_drives_visible_view() {
        let mut store = store();
        assert_eq!(store.visible_conversations("").len(), 1);

        store.set_selected_filter(FilterMode::Resolved);
        assert!(store.visible_conversations("").is_empty());
    }
}
