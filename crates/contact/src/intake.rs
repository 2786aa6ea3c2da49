use std::sync::Arc;

use async_trait::async_trait;

use crate::{Confirmation, ContactFormData, SubmissionError};

/// The external service that accepts contact messages.
///
/// Implementations own transport concerns such as timeouts; the workflow
/// calls `create_message` at most once per submission and never retries.
#[async_trait]
pub trait MessageIntake: Send + Sync {
    async fn create_message(
        &self,
        message: &ContactFormData,
    ) -> Result<Confirmation, SubmissionError>;
}

#[async_trait]
impl<T: MessageIntake + ?Sized> MessageIntake for Arc<T> {
    async fn create_message(
        &self,
        message: &ContactFormData,
    ) -> Result<Confirmation, SubmissionError> {
        (**self).create_message(message).await
    }
}
