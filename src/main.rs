use support_dashboard::bootstrap;
use support_dashboard::config::Config;
use support_dashboard::domain::services::conversation_filter::FilterMode;
use support_dashboard::infrastructure::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_tracing().map_err(|e| anyhow::anyhow!(e))?;

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = bootstrap::build_app_state(&config).await?;

    for mode in FilterMode::ALL_MODES {
        let view = state.store.filter_conversations(mode);
        tracing::info!(
            "{:<10} {} conversation(s): {:?}",
            mode,
            view.len(),
            view.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
        );
    }

    tracing::info!("Dark mode: {}", state.preferences.is_dark_mode());

    let results = state.assistant.search_ai_responses("billing").await?;
    for suggestion in &results {
        tracing::info!(
            "Suggestion {} ({:.2}): {}",
            suggestion.id,
            suggestion.confidence,
            suggestion.text
        );
    }

    Ok(())
}
