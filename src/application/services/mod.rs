pub mod assistant_service;
pub mod conversation_store;
pub mod preference_service;

pub use assistant_service::{AssistantLatency, AssistantService};
pub use conversation_store::ConversationStore;
pub use preference_service::{PreferenceService, DARK_MODE_KEY};
