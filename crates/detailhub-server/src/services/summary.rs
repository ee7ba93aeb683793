use std::time::Duration;

use async_trait::async_trait;

use detailhub_core::error::Result;
use detailhub_core::model::Call;
use detailhub_core::summary::{simulated_summary, SummaryGenerator};

/// Stand-in for an external AI summarizer: waits a fixed delay, then returns
/// a canned summary. No timeout, cancellation, or retry.
pub struct SimulatedSummarizer {
    delay: Duration,
}

impl SimulatedSummarizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SummaryGenerator for SimulatedSummarizer {
    async fn summarize(&self, call: &Call) -> Result<String> {
        tracing::debug!(call_id = %call.id, delay_ms = self.delay.as_millis() as u64, "simulating summary");
        tokio::time::sleep(self.delay).await;
        Ok(simulated_summary(&call.client_phone_number))
    }
}
