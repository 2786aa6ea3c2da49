use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::{ContactError, SubmissionError};

#[derive(Display, AsRefStr, Default, Clone, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded | SubmissionState::Failed(_)
        )
    }
}

/// Success body returned by the message-intake collaborator.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    #[serde(default)]
    pub message: Option<String>,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Toast shown to the visitor once a submission attempt resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
}

impl Notification {
    pub fn sent(confirmation: &Confirmation) -> Self {
        Self {
            title: "Message Sent!".to_owned(),
            description: confirmation.message.clone(),
            variant: Variant::Default,
        }
    }

    pub fn failed(err: &SubmissionError) -> Self {
        Self {
            title: "Error".to_owned(),
            description: Some(err.reason().to_owned()),
            variant: Variant::Destructive,
        }
    }

    pub fn for_outcome(outcome: &Result<Confirmation, SubmissionError>) -> Self {
        match outcome {
            Ok(confirmation) => Self::sent(confirmation),
            Err(err) => Self::failed(err),
        }
    }

    /// `None` for an in-flight rejection: the submit control is disabled and
    /// nothing is shown.
    pub fn from_error(err: &ContactError) -> Option<Self> {
        match err {
            ContactError::Validation(err) => Some(Self {
                title: "Validation Error".to_owned(),
                description: Some(err.description().to_owned()),
                variant: Variant::Destructive,
            }),
            ContactError::Submission(err) => Some(Self::failed(err)),
            ContactError::InFlight => None,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}
