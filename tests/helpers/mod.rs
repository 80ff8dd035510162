#![allow(dead_code)]
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use support_dashboard::bootstrap::seed::SeedData;
use support_dashboard::domain::entities::Conversation;
use support_dashboard::domain::ports::time_service::TimeService;
use support_dashboard::ConversationStore;

pub const TEST_SEED: u64 = 20230501;

pub fn seed_data() -> SeedData {
    let mut rng = StdRng::seed_from_u64(TEST_SEED);
    SeedData::generate(&mut rng)
}

/// Store loaded with the deterministic seed data set
pub fn seeded_store() -> ConversationStore {
    seed_data().into_store()
}

pub fn ids(conversations: &[&Conversation]) -> Vec<String> {
    conversations.iter().map(|c| c.id.clone()).collect()
}

/// Records requested sleeps and returns immediately
#[derive(Default)]
pub struct RecordingTimeService {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingTimeService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimeService for RecordingTimeService {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}

/// Fresh path under the system temp dir; the file does not exist yet
pub fn temp_preferences_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("support-dashboard-test-{}", uuid::Uuid::new_v4()))
        .join("preferences.json")
}
