use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, transform and write in order. Nothing is written if an earlier step fails.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("📥 Fetching board comments...");
        let payload = self.pipeline.extract().await?;
        tracing::debug!(
            "Fetched {} actions",
            payload.actions.as_ref().map_or(0, Vec::len)
        );

        tracing::info!("🔄 Building report...");
        let report = self.pipeline.transform(payload).await?;

        tracing::info!("💾 Writing report...");
        let output = self.pipeline.load(report).await?;
        tracing::debug!("Report saved to: {}", output);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardPayload, Report};
    use crate::utils::error::ReportError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubPipeline {
        payload_has_actions: bool,
        loaded: AtomicBool,
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<BoardPayload> {
            Ok(BoardPayload {
                actions: self.payload_has_actions.then(Vec::new),
            })
        }

        async fn transform(&self, payload: BoardPayload) -> Result<Report> {
            payload.actions.ok_or_else(|| ReportError::DataUnavailable {
                message: "no actions".to_string(),
            })?;
            Ok(Report {
                title: "t".to_string(),
                body: String::new(),
            })
        }

        async fn load(&self, _report: Report) -> Result<String> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok("out.txt".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_returns_output() {
        let engine = ReportEngine::new(StubPipeline {
            payload_has_actions: true,
            loaded: AtomicBool::new(false),
        });

        assert_eq!(engine.run().await.unwrap(), "out.txt");
        assert!(engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_failed_transform_skips_load() {
        let engine = ReportEngine::new(StubPipeline {
            payload_has_actions: false,
            loaded: AtomicBool::new(false),
        });

        assert!(engine.run().await.is_err());
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }
}
