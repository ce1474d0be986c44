//! AI analysis error types.

use thiserror::Error;
use wealthspectrum_core::Error as CoreError;

const GENERIC_FAILURE_MESSAGE: &str = "分析失败，请稍后重试。";
const MISSING_KEY_MESSAGE: &str = "API Key is missing";

/// Errors raised while producing a portfolio analysis.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Core error from wealthspectrum-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Error code for programmatic handling by the UI.
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::Core(_) => "CORE_ERROR",
            AiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the user in place of the report.
    ///
    /// Upstream details stay in the logs; the user only sees a retry hint.
    pub fn user_message(&self) -> String {
        match self {
            AiError::MissingApiKey(_) => MISSING_KEY_MESSAGE.to_string(),
            AiError::InvalidInput(msg) => msg.clone(),
            AiError::Core(err) => err.to_string(),
            AiError::Provider(_) | AiError::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
