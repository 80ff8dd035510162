use crate::domain::entities::{default_suggestions, AiResponse, Conversation, ConversationSummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::fault_injector::{AssistantOperation, FaultInjector};
use crate::domain::ports::time_service::TimeService;
use std::sync::Arc;
use std::time::Duration;

/// Simulated latencies for the assistant panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantLatency {
    pub search: Duration,
    pub generate: Duration,
}

impl Default for AssistantLatency {
    fn default() -> Self {
        Self {
            search: Duration::from_millis(1000),
            generate: Duration::from_millis(2000),
        }
    }
}

/// Canned "AI" suggestions with artificial latency.
///
/// Calls are independent: nothing stops a second call while one is pending,
/// and both complete on their own.
#[derive(Clone)]
pub struct AssistantService {
    suggestions: Vec<AiResponse>,
    latency: AssistantLatency,
    time_service: Arc<dyn TimeService>,
    fault_injector: Arc<dyn FaultInjector>,
}

impl AssistantService {
    pub fn new(
        time_service: Arc<dyn TimeService>,
        fault_injector: Arc<dyn FaultInjector>,
        latency: AssistantLatency,
    ) -> Self {
        Self {
            suggestions: default_suggestions(),
            latency,
            time_service,
            fault_injector,
        }
    }

    /// The fixed suggestion list shown before any search
    pub fn suggestions(&self) -> &[AiResponse] {
        &self.suggestions
    }

    /// Suggestions whose text contains `query`, ignoring case.
    /// A blank query returns nothing, immediately.
    #[tracing::instrument(skip(self))]
    pub async fn search_ai_responses(&self, query: &str) -> DomainResult<Vec<AiResponse>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.simulate_call(AssistantOperation::Search, self.latency.search)
            .await?;

        let results: Vec<AiResponse> = self
            .suggestions
            .iter()
            .filter(|s| s.matches(query))
            .cloned()
            .collect();

        tracing::debug!("Suggestion search matched {} of {}", results.len(), self.suggestions.len());
        Ok(results)
    }

    /// Fresh suggestions for the conversation's latest message.
    /// Empty, without delay, when there is nothing to respond to.
    #[tracing::instrument(skip(self, conversation), fields(conversation_id = %conversation.id))]
    pub async fn generate_more(&self, conversation: &Conversation) -> DomainResult<Vec<AiResponse>> {
        if conversation.latest_message().is_none() {
            return Ok(Vec::new());
        }

        self.simulate_call(AssistantOperation::GenerateMore, self.latency.generate)
            .await?;

        Ok(self.suggestions.clone())
    }

    #[tracing::instrument(skip(self, conversation), fields(conversation_id = %conversation.id))]
    pub async fn summarize(&self, conversation: &Conversation) -> DomainResult<ConversationSummary> {
        self.simulate_call(AssistantOperation::Summarize, self.latency.generate)
            .await?;

        let customer_messages = conversation
            .messages
            .iter()
            .filter(|m| m.is_from_customer())
            .count();

        Ok(ConversationSummary {
            conversation_id: conversation.id.clone(),
            subject: conversation.subject.clone(),
            customer_messages,
            agent_messages: conversation.messages.len() - customer_messages,
            last_message: conversation.latest_message().map(|m| m.text.clone()),
        })
    }

    async fn simulate_call(&self, operation: AssistantOperation, latency: Duration) -> DomainResult<()> {
        self.time_service.sleep(latency).await;

        if self.fault_injector.should_fail(operation) {
            tracing::warn!("Simulated {} failure", operation);
            return Err(DomainError::SimulatedFault(
                operation.failure_message().to_string(),
            ));
        }

        Ok(())
    }
}
