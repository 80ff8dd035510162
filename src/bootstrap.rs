pub mod seed;

use crate::application::services::{AssistantLatency, AssistantService, PreferenceService};
use crate::config::Config;
use crate::domain::errors::DomainResult;
use crate::domain::ports::event_bus::EventBus;
use crate::domain::ports::fault_injector::FaultInjector;
use crate::domain::ports::preference_store::PreferenceStore;
use crate::domain::ports::theme_probe::ThemeProbe;
use crate::domain::ports::time_service::TimeService;
use crate::infrastructure::persistence::FilePreferenceStore;
use crate::infrastructure::providers::{NoFaults, StaticThemeProbe};
use crate::infrastructure::runtime::tokio::TokioTimeService;
use crate::shared::events::LocalEventBus;
use crate::state::AppState;
use seed::SeedData;
use std::sync::Arc;

/// Wire the dashboard from configuration: seeded store, assistant and file-backed preferences
pub async fn build_app_state(config: &Config) -> DomainResult<AppState> {
    let preference_store =
        Arc::new(FilePreferenceStore::new(config.preferences_path.clone())) as Arc<dyn PreferenceStore>;
    let theme_probe = Arc::new(StaticThemeProbe::new(config.prefers_dark)) as Arc<dyn ThemeProbe>;

    build_app_state_with(
        config,
        preference_store,
        theme_probe,
        Arc::new(TokioTimeService::new()),
        Arc::new(NoFaults),
    )
    .await
}

/// Same as [`build_app_state`] with the outer collaborators supplied by the caller
pub async fn build_app_state_with(
    config: &Config,
    preference_store: Arc<dyn PreferenceStore>,
    theme_probe: Arc<dyn ThemeProbe>,
    time_service: Arc<dyn TimeService>,
    fault_injector: Arc<dyn FaultInjector>,
) -> DomainResult<AppState> {
    let event_bus = Arc::new(LocalEventBus::new(config.event_capacity));
    tracing::info!("Event bus initialized with capacity {}", config.event_capacity);

    let seed_data = SeedData::from_seed(config.seed);
    tracing::info!(
        "Seed data generated: {} customers, {} team members, {} conversations (seed: {:?})",
        seed_data.users.len(),
        seed_data.team_members.len(),
        seed_data.conversations.len(),
        config.seed
    );

    let store = seed_data
        .into_store()
        .with_event_bus(event_bus.clone() as Arc<dyn EventBus>);
    tracing::info!("Conversation store initialized");

    let assistant = AssistantService::new(
        time_service,
        fault_injector,
        AssistantLatency {
            search: config.search_latency,
            generate: config.assist_latency,
        },
    );
    tracing::info!("Assistant service initialized");

    let preferences = PreferenceService::load(preference_store, theme_probe)
        .await?
        .with_event_bus(event_bus.clone() as Arc<dyn EventBus>);
    tracing::info!("Preference service initialized");

    Ok(AppState {
        store,
        assistant,
        preferences,
        event_bus,
    })
}
