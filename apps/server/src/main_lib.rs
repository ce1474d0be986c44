use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthspectrum_ai::{AnalysisCoordinator, LlmPortfolioAnalyst, PortfolioAnalystTrait};
use wealthspectrum_core::sunburst::LayoutConfig;

pub struct AppState {
    /// Layout used when a request does not carry its own config.
    pub layout_config: LayoutConfig,
    pub analysis: AnalysisCoordinator,
}

/// Installs the global subscriber. `log` records from the library crates
/// are forwarded through the `tracing-log` bridge.
pub fn init_tracing() {
    let log_format = std::env::var("WS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    tracing::info!(
        "Portfolio analysis via provider {} model {}",
        config.analyst.provider_id,
        config.analyst.model_id
    );
    if config.analyst.api_key.is_none() && config.analyst.provider_id != "ollama" {
        tracing::warn!("No AI API key configured; analysis requests will fail");
    }
    let analyst = Arc::new(LlmPortfolioAnalyst::new(config.analyst.clone()));
    build_state_with_analyst(config, analyst)
}

/// Same as `build_state` with an injected analyst, used by tests.
pub fn build_state_with_analyst(
    config: &Config,
    analyst: Arc<dyn PortfolioAnalystTrait>,
) -> Arc<AppState> {
    Arc::new(AppState {
        layout_config: config.layout.clone(),
        analysis: AnalysisCoordinator::new(analyst),
    })
}
