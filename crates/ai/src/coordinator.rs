//! Single in-flight analysis coordination.
//!
//! Every request takes a new generation number. When a request finishes
//! after a newer one has started, its result is reported as superseded
//! instead of being delivered, so a slow reply can never overwrite a
//! fresher one.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use wealthspectrum_core::positions::Position;

use crate::analyst::PortfolioAnalystTrait;

/// Result of one analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnalysisOutcome {
    Completed { generation: u64, report: String },
    Failed {
        generation: u64,
        code: String,
        message: String,
    },
    /// A newer request was issued before this one finished.
    Superseded { generation: u64 },
}

impl AnalysisOutcome {
    pub fn generation(&self) -> u64 {
        match self {
            AnalysisOutcome::Completed { generation, .. }
            | AnalysisOutcome::Failed { generation, .. }
            | AnalysisOutcome::Superseded { generation } => *generation,
        }
    }

    /// Text to show in the report panel, if this outcome should be shown.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Completed { report, .. } => Some(report),
            AnalysisOutcome::Failed { message, .. } => Some(message),
            AnalysisOutcome::Superseded { .. } => None,
        }
    }
}

/// Serializes analysis requests against one analyst.
pub struct AnalysisCoordinator {
    analyst: Arc<dyn PortfolioAnalystTrait>,
    generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl AnalysisCoordinator {
    pub fn new(analyst: Arc<dyn PortfolioAnalystTrait>) -> Self {
        Self {
            analyst,
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Generation of the most recent request, 0 before the first one.
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether any request is still waiting on the analyst.
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Invalidates whatever is in flight without starting a new request.
    pub fn cancel(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Runs one analysis. Never panics and never returns an error: failures
    /// come back as `AnalysisOutcome::Failed` with a user-facing message.
    pub async fn request(&self, positions: &[Position]) -> AnalysisOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let in_flight = InFlightGuard::enter(&self.in_flight);
        debug!(
            "Analysis request {} started for {} positions",
            generation,
            positions.len()
        );

        let result = self.analyst.analyze(positions).await;
        drop(in_flight);

        if self.current_generation() != generation {
            info!("Analysis request {} superseded, dropping result", generation);
            return AnalysisOutcome::Superseded { generation };
        }

        match result {
            Ok(report) => AnalysisOutcome::Completed { generation, report },
            Err(err) => AnalysisOutcome::Failed {
                generation,
                code: err.code().to_string(),
                message: err.user_message(),
            },
        }
    }
}

/// Counts a request as in flight until dropped, including when the request
/// future itself is dropped mid-await.
struct InFlightGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyst::FakePortfolioAnalyst;
    use crate::error::AiError;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    fn positions() -> Vec<Position> {
        vec![Position::new("1", "债券/固收", "纯债", "招商产业债A", dec!(800))]
    }

    #[tokio::test]
    async fn test_completed_outcome() {
        let coordinator =
            AnalysisCoordinator::new(Arc::new(FakePortfolioAnalyst::with_report("稳健")));
        let outcome = coordinator.request(&positions()).await;
        assert_eq!(
            outcome,
            AnalysisOutcome::Completed {
                generation: 1,
                report: "稳健".to_string()
            }
        );
        assert_eq!(outcome.display_text(), Some("稳健"));
        assert!(!coordinator.is_pending());
    }

    #[tokio::test]
    async fn test_failure_maps_to_user_message() {
        let coordinator = AnalysisCoordinator::new(Arc::new(FakePortfolioAnalyst::with_error(
            AiError::MissingApiKey("gemini".to_string()),
        )));
        match coordinator.request(&positions()).await {
            AnalysisOutcome::Failed { code, message, .. } => {
                assert_eq!(code, "MISSING_API_KEY");
                assert_eq!(message, "API Key is missing");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_newer_request_supersedes_older() {
        let analyst =
            FakePortfolioAnalyst::with_report("ok").delayed(Duration::from_millis(30));
        let coordinator = AnalysisCoordinator::new(Arc::new(analyst));
        let positions = positions();

        let (first, second) = tokio::join!(
            coordinator.request(&positions),
            coordinator.request(&positions)
        );

        assert_eq!(first, AnalysisOutcome::Superseded { generation: 1 });
        assert_eq!(first.display_text(), None);
        assert_eq!(second.generation(), 2);
        assert!(matches!(second, AnalysisOutcome::Completed { .. }));
        assert!(!coordinator.is_pending());
    }

    #[tokio::test]
    async fn test_cancel_drops_in_flight_result() {
        let analyst =
            FakePortfolioAnalyst::with_report("late").delayed(Duration::from_millis(30));
        let coordinator = AnalysisCoordinator::new(Arc::new(analyst));
        let positions = positions();

        let (outcome, _) = tokio::join!(coordinator.request(&positions), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            assert!(coordinator.is_pending());
            coordinator.cancel()
        });
        assert_eq!(outcome, AnalysisOutcome::Superseded { generation: 1 });
        assert_eq!(coordinator.current_generation(), 2);
    }

    #[tokio::test]
    async fn test_abandoned_request_is_no_longer_pending() {
        let analyst =
            FakePortfolioAnalyst::with_report("slow").delayed(Duration::from_millis(200));
        let coordinator = AnalysisCoordinator::new(Arc::new(analyst));
        let positions = positions();

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), coordinator.request(&positions))
                .await;
        assert!(timed_out.is_err());
        assert!(!coordinator.is_pending());

        let outcome = coordinator.request(&positions).await;
        assert_eq!(outcome.generation(), 2);
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn test_outcome_wire_format() {
        let outcome = AnalysisOutcome::Failed {
            generation: 3,
            code: "PROVIDER_ERROR".to_string(),
            message: "分析失败，请稍后重试。".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["generation"], 3);
        assert_eq!(json["code"], "PROVIDER_ERROR");
    }
}
