//! Call summary generation seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Call;

/// Produces a summary for a call that has a transcript.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn summarize(&self, call: &Call) -> Result<String>;
}

/// Canned summary text used by the simulated generator.
pub fn simulated_summary(client_phone_number: &str) -> String {
    format!(
        "This is a simulated AI-generated summary for the call with {client_phone_number}. \
         The transcript was analyzed to extract key points. The client discussed booking a \
         full-detail service for their sedan and asked about pricing and availability for \
         next Tuesday."
    )
}
