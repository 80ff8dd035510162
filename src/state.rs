use crate::application::services::{AssistantService, ConversationStore, PreferenceService};
use crate::shared::events::LocalEventBus;
use std::sync::Arc;

/// Everything the dashboard front end talks to, owned by its single actor
pub struct AppState {
    pub store: ConversationStore,
    pub assistant: AssistantService,
    pub preferences: PreferenceService,
    pub event_bus: Arc<LocalEventBus>,
}
