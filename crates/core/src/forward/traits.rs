use async_trait::async_trait;

use crate::submission::Submission;

use super::Result;

/// The single outbound call that turns a submission into generated text.
///
/// Implementations only ever see submissions that passed both the presence
/// checks and the business rules. One call per submission, no retries;
/// re-issuing the same submission is safe because the backend call is a
/// pure computation.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Forwards both fields to the backend and returns its generated text.
    async fn forward(&self, submission: &Submission) -> Result<String>;
}
