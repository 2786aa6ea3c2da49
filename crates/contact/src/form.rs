use crate::{
    Confirmation, ContactError, ContactFormData, Field, Notification, SubmissionError,
    SubmissionState,
};

/// Synchronous half of the contact workflow: the form fields and the
/// submission state, with every transition except the network call.
#[derive(Default, Clone, Debug)]
pub struct ContactForm {
    data: ContactFormData,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.state.is_submitting()
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Validates the form and, if it passes, moves to `Submitting` and
    /// returns the payload to send. The state is untouched on error.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, ContactError> {
        if self.state.is_submitting() {
            return Err(ContactError::InFlight);
        }

        if let Err(err) = self.data.check() {
            tracing::debug!(code = err.code(), "contact form rejected");

            return Err(err.into());
        }

        self.state = SubmissionState::Submitting;

        Ok(self.data.clone())
    }

    /// Applies the collaborator's answer to a submission started with
    /// [`ContactForm::begin_submit`]. Without a pending submission the form
    /// is left alone and `None` is returned.
    pub fn settle(
        &mut self,
        outcome: &Result<Confirmation, SubmissionError>,
    ) -> Option<Notification> {
        if !self.state.is_submitting() {
            tracing::warn!(state = %self.state, "settle without a pending submission");

            return None;
        }

        match outcome {
            Ok(_) => {
                self.state = SubmissionState::Succeeded;
                self.data = ContactFormData::default();
            }
            Err(err) => {
                self.state = SubmissionState::Failed(err.reason().to_owned());
            }
        }

        Some(Notification::for_outcome(outcome))
    }

    /// Returns a settled form to `Idle` once its notification is gone.
    pub fn dismiss(&mut self) {
        if self.state.is_settled() {
            self.state = SubmissionState::Idle;
        }
    }
}
