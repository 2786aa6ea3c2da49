use std::sync::Mutex;

use async_trait::async_trait;
use portfolio_contact::{
    Confirmation, ContactFormData, ContactWorkflow, Field, MessageIntake, SubmissionError,
};
use tokio::sync::{Notify, Semaphore};

/// In-memory collaborator that records every payload it receives and can
/// hold requests open until released.
pub struct RecordingIntake {
    outcome: Result<Confirmation, SubmissionError>,
    calls: Mutex<Vec<ContactFormData>>,
    started: Notify,
    release: Semaphore,
}

#[allow(dead_code)]
impl RecordingIntake {
    pub fn ok(message: impl Into<String>) -> Self {
        Self::with_outcome(Ok(Confirmation::new(message)))
    }

    pub fn failing(err: SubmissionError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<Confirmation, SubmissionError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(vec![]),
            started: Notify::new(),
            release: Semaphore::new(Semaphore::MAX_PERMITS),
        }
    }

    /// Requests stay pending until [`RecordingIntake::release`] is called.
    pub fn held(mut self) -> Self {
        self.release = Semaphore::new(0);
        self
    }

    pub fn release(&self) {
        self.release.add_permits(1);
    }

    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn calls(&self) -> Vec<ContactFormData> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageIntake for RecordingIntake {
    async fn create_message(
        &self,
        message: &ContactFormData,
    ) -> Result<Confirmation, SubmissionError> {
        self.calls.lock().unwrap().push(message.clone());
        self.started.notify_one();

        let permit = self
            .release
            .acquire()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        permit.forget();

        self.outcome.clone()
    }
}

#[allow(dead_code)]
pub fn jane() -> ContactFormData {
    ContactFormData {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello there".to_owned(),
    }
}

#[allow(dead_code)]
pub fn fill<I: MessageIntake>(workflow: &ContactWorkflow<I>, data: &ContactFormData) {
    workflow.update_field(Field::Name, &data.name);
    workflow.update_field(Field::Email, &data.email);
    workflow.update_field(Field::Subject, &data.subject);
    workflow.update_field(Field::Message, &data.message);
}
