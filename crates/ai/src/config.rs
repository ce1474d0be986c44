//! Analyst configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROVIDER_ID: &str = "gemini";
pub const DEFAULT_MODEL_ID: &str = "gemini-2.5-flash";

/// Environment variables consulted for the API key, in order.
const API_KEY_VARS: [&str; 3] = ["WS_AI_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Which provider and model the analyst talks to.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystConfig {
    pub provider_id: String,
    pub model_id: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Only used by self-hosted providers (ollama).
    pub base_url: Option<String>,
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            provider_id: DEFAULT_PROVIDER_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_key: None,
            base_url: None,
        }
    }
}

impl std::fmt::Debug for AnalystConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalystConfig")
            .field("provider_id", &self.provider_id)
            .field("model_id", &self.model_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AnalystConfig {
    /// Reads `WS_AI_PROVIDER`, `WS_AI_MODEL`, `WS_AI_BASE_URL` and the first
    /// non-empty key among `WS_AI_API_KEY`, `GEMINI_API_KEY`, `API_KEY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            provider_id: non_empty("WS_AI_PROVIDER").unwrap_or(defaults.provider_id),
            model_id: non_empty("WS_AI_MODEL").unwrap_or(defaults.model_id),
            api_key: API_KEY_VARS.iter().find_map(|key| non_empty(*key)),
            base_url: non_empty("WS_AI_BASE_URL"),
        }
    }
}
