use serde::{Deserialize, Serialize};

/// Canned reply suggestion surfaced in the assistant panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub id: String,
    pub text: String,
    /// In `[0, 1]`
    pub confidence: f64,
}

impl AiResponse {
    pub fn new(id: &str, text: &str, confidence: f64) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Case-insensitive substring match on the suggestion text
    pub fn matches(&self, query: &str) -> bool {
        self.text.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Fixed suggestion set offered for every conversation
pub fn default_suggestions() -> Vec<AiResponse> {
    vec![
        AiResponse::new(
            "1",
            "I understand your concern with the billing issue. Let me check your account details and get this resolved for you right away.",
            0.92,
        ),
        AiResponse::new(
            "2",
            "I can see you're on our Pro plan. The charge you're seeing is for the annual renewal. Would you like me to break down the details for you?",
            0.85,
        ),
        AiResponse::new(
            "3",
            "Let me offer you a 10% discount on your next renewal as an apology for the confusion.",
            0.78,
        ),
    ]
}

/// Digest produced by the summarize action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub conversation_id: String,
    pub subject: Option<String>,
    pub customer_messages: usize,
    pub agent_messages: usize,
    pub last_message: Option<String>,
}
