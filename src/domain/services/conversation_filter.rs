use crate::domain::entities::{Conversation, User};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named predicate selecting which conversations the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Unassigned,
    Assigned,
    Mine,
    Resolved,
    Unread,
}

impl FilterMode {
    pub const ALL_MODES: [FilterMode; 6] = [
        FilterMode::All,
        FilterMode::Unassigned,
        FilterMode::Assigned,
        FilterMode::Mine,
        FilterMode::Resolved,
        FilterMode::Unread,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Unassigned => "unassigned",
            FilterMode::Assigned => "assigned",
            FilterMode::Mine => "mine",
            FilterMode::Resolved => "resolved",
            FilterMode::Unread => "unread",
        }
    }

    /// Whether `conversation` belongs in this view.
    ///
    /// `current_agent_id` only matters for `Mine`; with no current agent nothing is "mine".
    pub fn matches(&self, conversation: &Conversation, current_agent_id: Option<&str>) -> bool {
        let open = !conversation.is_resolved();
        match self {
            FilterMode::Unassigned => !conversation.is_assigned() && open,
            FilterMode::Assigned => conversation.is_assigned() && open,
            FilterMode::Mine => {
                current_agent_id.map_or(false, |agent| conversation.is_assigned_to(agent)) && open
            }
            FilterMode::Resolved => conversation.is_resolved(),
            FilterMode::Unread => conversation.unread_count > 0 && open,
            FilterMode::All => open,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Unknown names fall back to `All`
impl FromStr for FilterMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "unassigned" => FilterMode::Unassigned,
            "assigned" => FilterMode::Assigned,
            "mine" => FilterMode::Mine,
            "resolved" => FilterMode::Resolved,
            "unread" => FilterMode::Unread,
            _ => FilterMode::All,
        })
    }
}

/// Conversations matching `mode`, in collection order
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    mode: FilterMode,
    current_agent_id: Option<&str>,
) -> Vec<&'a Conversation> {
    conversations
        .iter()
        .filter(|conv| mode.matches(conv, current_agent_id))
        .collect()
}

/// Case-insensitive match on customer name, subject or last message.
/// A blank query matches everything.
pub fn matches_search(conversation: &Conversation, customer: Option<&User>, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |field: Option<&str>| field.map_or(false, |v| v.to_lowercase().contains(&needle));

    contains(customer.map(|c| c.name.as_str()))
        || contains(conversation.subject.as_deref())
        || contains(conversation.last_message.as_deref())
}

/// Text narrowing applied downstream of the mode filter
pub fn narrow_by_text<'a>(
    conversations: Vec<&'a Conversation>,
    customers: &[User],
    query: &str,
) -> Vec<&'a Conversation> {
    conversations
        .into_iter()
        .filter(|conv| {
            let customer = customers.iter().find(|u| u.id == conv.user_id);
            matches_search(conv, customer, query)
        })
        .collect()
}
