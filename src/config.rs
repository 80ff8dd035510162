use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub preferences_path: PathBuf,
    pub search_latency: Duration,
    pub assist_latency: Duration,
    /// Seed for the seed-data RNG; `None` draws from entropy
    pub seed: Option<u64>,
    /// Host colour-scheme signal used when no dark-mode preference is stored
    pub prefers_dark: bool,
    pub event_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from("./dashboard-preferences.json"),
            search_latency: Duration::from_millis(1000),
            assist_latency: Duration::from_millis(2000),
            seed: None,
            prefers_dark: false,
            event_capacity: 100,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let preferences_path = env::var("DASHBOARD_PREFERENCES_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.preferences_path);

        let search_latency = parse_var::<u64>("DASHBOARD_SEARCH_LATENCY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.search_latency);

        let assist_latency = parse_var::<u64>("DASHBOARD_ASSIST_LATENCY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.assist_latency);

        let seed = parse_var::<u64>("DASHBOARD_SEED")?;

        let prefers_dark = parse_var::<bool>("DASHBOARD_PREFERS_DARK")?.unwrap_or(defaults.prefers_dark);

        let event_capacity =
            parse_var::<usize>("DASHBOARD_EVENT_CAPACITY")?.unwrap_or(defaults.event_capacity);

        Ok(Config {
            preferences_path,
            search_latency,
            assist_latency,
            seed,
            prefers_dark,
            event_capacity,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_value(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
