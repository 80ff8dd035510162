use std::fmt;

/// Assistant calls that can be made to fail synthetically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistantOperation {
    Search,
    GenerateMore,
    Summarize,
}

impl AssistantOperation {
    /// Text shown to the agent when the call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            AssistantOperation::Search => "Failed to search responses. Please try again.",
            AssistantOperation::GenerateMore => "Failed to generate responses. Please try again.",
            AssistantOperation::Summarize => "Failed to summarize conversation. Please try again.",
        }
    }
}

impl fmt::Display for AssistantOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantOperation::Search => write!(f, "search"),
            AssistantOperation::GenerateMore => write!(f, "generate_more"),
            AssistantOperation::Summarize => write!(f, "summarize"),
        }
    }
}

/// Decides whether the next assistant call fails
pub trait FaultInjector: Send + Sync {
    fn should_fail(&self, operation: AssistantOperation) -> bool;
}
