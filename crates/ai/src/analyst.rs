//! Portfolio analyst service.
//!
//! Sends the formatted holdings to an LLM provider and returns the
//! markdown report as opaque display text.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use rig::{
    client::{CompletionClient, Nothing},
    completion::Prompt,
    providers::{anthropic, gemini, groq, ollama, openai},
};
use wealthspectrum_core::positions::{validate_positions, Position};

use crate::config::AnalystConfig;
use crate::error::AiError;
use crate::prompt::build_analysis_prompt;

/// Returned in place of a report when the provider answers with nothing.
pub const EMPTY_REPORT_FALLBACK: &str = "无法生成分析报告。";

// ============================================================================
// Analyst Trait
// ============================================================================

/// Produces a natural-language analysis of a portfolio.
#[async_trait]
pub trait PortfolioAnalystTrait: Send + Sync {
    /// Analyze the given positions.
    ///
    /// An empty list is rejected with `AiError::InvalidInput`.
    async fn analyze(&self, positions: &[Position]) -> Result<String, AiError>;
}

// ============================================================================
// LLM Implementation
// ============================================================================

/// Analyst backed by a rig-core provider client.
pub struct LlmPortfolioAnalyst {
    config: AnalystConfig,
}

impl LlmPortfolioAnalyst {
    pub fn new(config: AnalystConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalystConfig {
        &self.config
    }

    fn require_key(&self) -> Result<String, AiError> {
        self.config
            .api_key
            .clone()
            .ok_or_else(|| AiError::MissingApiKey(self.config.provider_id.clone()))
    }

    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let model_id = self.config.model_id.as_str();
        let provider_id = self.config.provider_id.as_str();

        debug!(
            "Requesting portfolio analysis from provider {} model {}",
            provider_id, model_id
        );

        match provider_id {
            "gemini" | "google" => {
                let key = self.require_key()?;
                let client: gemini::Client<HttpClient> =
                    gemini::Client::new(&key).map_err(provider_error)?;
                prompt_with(&client, model_id, prompt).await
            }
            "anthropic" => {
                let key = self.require_key()?;
                let client: anthropic::Client<HttpClient> =
                    anthropic::Client::new(&key).map_err(provider_error)?;
                prompt_with(&client, model_id, prompt).await
            }
            "groq" => {
                let key = self.require_key()?;
                let client: groq::Client<HttpClient> =
                    groq::Client::new(&key).map_err(provider_error)?;
                prompt_with(&client, model_id, prompt).await
            }
            "ollama" => {
                let mut builder = ollama::Client::<HttpClient>::builder().api_key(Nothing);
                if let Some(url) = self.config.base_url.as_deref() {
                    builder = builder.base_url(url);
                }
                let client = builder.build().map_err(provider_error)?;
                prompt_with(&client, model_id, prompt).await
            }
            _ => {
                // OpenAI-compatible
                let key = self.require_key()?;
                let client: openai::Client<HttpClient> =
                    openai::Client::new(&key).map_err(provider_error)?;
                prompt_with(&client, model_id, prompt).await
            }
        }
    }
}

/// Builds a bare agent for `model_id` on any provider client and sends one prompt.
async fn prompt_with<C: CompletionClient>(
    client: &C,
    model_id: &str,
    prompt: &str,
) -> Result<String, AiError> {
    client
        .agent(model_id)
        .build()
        .prompt(prompt)
        .await
        .map_err(provider_error)
}

fn provider_error(err: impl std::fmt::Display) -> AiError {
    AiError::Provider(err.to_string())
}

#[async_trait]
impl PortfolioAnalystTrait for LlmPortfolioAnalyst {
    async fn analyze(&self, positions: &[Position]) -> Result<String, AiError> {
        if positions.is_empty() {
            return Err(AiError::invalid_input("No positions to analyze"));
        }
        validate_positions(positions)?;

        let prompt = build_analysis_prompt(positions);
        let report = self.complete(&prompt).await.inspect_err(|e| {
            warn!("Portfolio analysis failed: {}", e);
        })?;

        Ok(finalize_report(&report))
    }
}

/// Trims the reply, substituting the fallback text when nothing is left.
pub fn finalize_report(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        EMPTY_REPORT_FALLBACK.to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Fake Analyst for Testing
// ============================================================================

/// Deterministic analyst for tests and local development.
pub struct FakePortfolioAnalyst {
    outcome: Result<String, AiError>,
    delay: Option<Duration>,
}

impl FakePortfolioAnalyst {
    /// Always returns the given report.
    pub fn with_report(report: &str) -> Self {
        Self {
            outcome: Ok(report.to_string()),
            delay: None,
        }
    }

    /// Always fails with the given error.
    pub fn with_error(error: AiError) -> Self {
        Self {
            outcome: Err(error),
            delay: None,
        }
    }

    /// Sleeps before answering, to exercise overlapping requests.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PortfolioAnalystTrait for FakePortfolioAnalyst {
    async fn analyze(&self, positions: &[Position]) -> Result<String, AiError> {
        if positions.is_empty() {
            return Err(AiError::invalid_input("No positions to analyze"));
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Ok(report) => Ok(finalize_report(report)),
            Err(err) => Err(clone_error(err)),
        }
    }
}

fn clone_error(err: &AiError) -> AiError {
    match err {
        AiError::InvalidInput(msg) => AiError::InvalidInput(msg.clone()),
        AiError::MissingApiKey(provider) => AiError::MissingApiKey(provider.clone()),
        AiError::Provider(msg) => AiError::Provider(msg.clone()),
        AiError::Core(core) => AiError::Internal(core.to_string()),
        AiError::Internal(msg) => AiError::Internal(msg.clone()),
    }
}

// ============================================================================
// Tests
// ============================================================================
