//! WealthSpectrum AI - portfolio analysis reports using rig-core.
//!
//! The analyst is an opaque collaborator of the sunburst core: it receives
//! the holdings as a formatted prompt and returns markdown text, or a
//! failure carrying a user-facing message. Failures never touch the
//! visualization state.
//!
//! # Architecture
//!
//! - `prompt`: Holdings summary and the fixed instruction template
//! - `analyst`: Provider dispatch through rig-core, plus a fake for tests
//! - `coordinator`: Single in-flight requests with generation-based supersession
//! - `config`: Provider/model/key selection from the environment
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wealthspectrum_ai::{AnalysisCoordinator, AnalystConfig, LlmPortfolioAnalyst};
//!
//! let analyst = LlmPortfolioAnalyst::new(AnalystConfig::from_env());
//! let coordinator = AnalysisCoordinator::new(Arc::new(analyst));
//! let outcome = coordinator.request(&positions).await;
//! if let Some(text) = outcome.display_text() {
//!     println!("{}", text);
//! }
//! ```

pub mod analyst;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod prompt;

pub use analyst::{
    finalize_report, FakePortfolioAnalyst, LlmPortfolioAnalyst, PortfolioAnalystTrait,
    EMPTY_REPORT_FALLBACK,
};
pub use config::AnalystConfig;
pub use coordinator::{AnalysisCoordinator, AnalysisOutcome};
pub use error::AiError;
pub use prompt::{build_analysis_prompt, build_portfolio_summary};
