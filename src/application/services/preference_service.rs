use crate::domain::errors::DomainResult;
use crate::domain::events::SystemEvent;
use crate::domain::ports::event_bus::EventBus;
use crate::domain::ports::preference_store::PreferenceStore;
use crate::domain::ports::theme_probe::ThemeProbe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Key the dark-mode flag is stored under
pub const DARK_MODE_KEY: &str = "darkMode";

/// Dark-mode preference, the one piece of state that outlives the process.
///
/// Values are stored JSON encoded (`"true"` / `"false"`).
pub struct PreferenceService {
    store: Arc<dyn PreferenceStore>,
    theme_probe: Arc<dyn ThemeProbe>,
    event_bus: Option<Arc<dyn EventBus>>,
    dark_mode: AtomicBool,
}

impl PreferenceService {
    /// Read the stored preference, falling back to the host colour scheme
    pub async fn load(
        store: Arc<dyn PreferenceStore>,
        theme_probe: Arc<dyn ThemeProbe>,
    ) -> DomainResult<Self> {
        let stored = store.get(DARK_MODE_KEY).await?;

        let dark_mode = match stored.as_deref().map(|raw| serde_json::from_str::<bool>(raw)) {
            Some(Ok(value)) => value,
            Some(Err(e)) => {
                tracing::warn!(
                    "Ignoring malformed {} preference {:?}: {}",
                    DARK_MODE_KEY,
                    stored,
                    e
                );
                theme_probe.prefers_dark()
            }
            None => theme_probe.prefers_dark(),
        };

        tracing::info!("Dark mode preference loaded: {}", dark_mode);

        Ok(Self {
            store,
            theme_probe,
            event_bus: None,
            dark_mode: AtomicBool::new(dark_mode),
        })
    }

    pub fn with_event_bus(mut self, event_bus: Arc<dyn EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::SeqCst)
    }

    /// What the host would pick with nothing stored
    pub fn system_prefers_dark(&self) -> bool {
        self.theme_probe.prefers_dark()
    }

    /// Flip and persist. Returns the new value.
    pub async fn toggle(&self) -> DomainResult<bool> {
        let enabled = !self.is_dark_mode();
        self.set_dark_mode(enabled).await?;
        Ok(enabled)
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> DomainResult<()> {
        let encoded = serde_json::to_string(&enabled)?;
        self.store.set(DARK_MODE_KEY, &encoded).await?;
        self.dark_mode.store(enabled, Ordering::SeqCst);

        tracing::info!("Dark mode set to {}", enabled);

        self.publish(SystemEvent::DarkModeChanged {
            enabled,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        Ok(())
    }

    fn publish(&self, event: SystemEvent) {
        if let Some(ref event_bus) = self.event_bus {
            if let Err(e) = event_bus.publish(event) {
                tracing::warn!("Failed to publish event: {}", e);
            }
        }
    }
}
