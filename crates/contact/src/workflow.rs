use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    Confirmation, ContactError, ContactForm, ContactFormData, Field, MessageIntake,
    Notification, SubmissionError, SubmissionState,
};

/// A contact form wired to its message-intake collaborator.
///
/// The form lock is only held for state transitions, never across the
/// request, so field updates keep working while a submission is pending.
pub struct ContactWorkflow<I> {
    form: Mutex<ContactForm>,
    intake: I,
}

impl<I: MessageIntake> ContactWorkflow<I> {
    pub fn new(intake: I) -> Self {
        Self {
            form: Mutex::new(ContactForm::new()),
            intake,
        }
    }

    pub fn intake(&self) -> &I {
        &self.intake
    }

    fn form(&self) -> MutexGuard<'_, ContactForm> {
        lock(&self.form)
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.form().update_field(field, value);
    }

    pub fn data(&self) -> ContactFormData {
        self.form().data().clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.form().state().clone()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.form().is_submit_enabled()
    }

    pub fn dismiss(&self) {
        self.form().dismiss();
    }

    /// Validates, sends one create-message request and settles the form.
    ///
    /// The notification for the visitor is returned alongside the outcome;
    /// errors map to theirs through [`Notification::from_error`]. Dropping
    /// the future while the request is pending settles the form as failed.
    pub async fn submit(&self) -> Result<(Confirmation, Notification), ContactError> {
        let payload = self.form().begin_submit()?;
        let pending = Pending {
            form: &self.form,
            settled: false,
        };

        tracing::info!(subject = %payload.subject, "submitting contact message");

        let outcome = self.intake.create_message(&payload).await;
        let notification = pending.settle(&outcome);

        match outcome {
            Ok(confirmation) => {
                tracing::info!("contact message sent");

                Ok((confirmation, notification))
            }
            Err(err) => {
                tracing::warn!(error = %err, reason = err.reason(), "contact message failed");

                Err(err.into())
            }
        }
    }
}

fn lock(form: &Mutex<ContactForm>) -> MutexGuard<'_, ContactForm> {
    // Transitions never panic halfway, so a poisoned form is still consistent
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the `Submitting` state between `begin_submit` and `settle`.
struct Pending<'a> {
    form: &'a Mutex<ContactForm>,
    settled: bool,
}

impl Pending<'_> {
    fn settle(mut self, outcome: &Result<Confirmation, SubmissionError>) -> Notification {
        self.settled = true;

        lock(self.form)
            .settle(outcome)
            .unwrap_or_else(|| Notification::for_outcome(outcome))
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        tracing::warn!("contact submission dropped before the intake answered");

        lock(self.form).settle(&Err(SubmissionError::Transport(
            "submission abandoned".to_owned(),
        )));
    }
}
