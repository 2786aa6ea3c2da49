/// Shown when the collaborator gave no usable explanation for a failure.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Rejections raised locally, before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing_fields")]
    MissingFields,

    #[error("invalid_email")]
    InvalidEmail,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "missing_fields",
            ValidationError::InvalidEmail => "invalid_email",
        }
    }

    /// Text the visitor is shown.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Please fill in all fields",
            ValidationError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// The message-intake collaborator did not accept the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The collaborator answered with a non-success status.
    #[error("rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request never produced a response.
    #[error("transport: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// The server-provided explanation, if it sent a non-blank one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn reason(&self) -> &str {
        self.server_message().unwrap_or(FALLBACK_FAILURE_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Submission(#[from] SubmissionError),

    #[error("a submission is already in flight")]
    InFlight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_prefers_server_message() {
        let err = SubmissionError::Rejected {
            status: 400,
            message: Some("Invalid email".to_owned()),
        };
        assert_eq!(err.reason(), "Invalid email");
    }

    #[test]
    fn reason_falls_back() {
        let cases = [
            SubmissionError::Rejected {
                status: 500,
                message: None,
            },
            SubmissionError::Rejected {
                status: 502,
                message: Some("  ".to_owned()),
            },
            SubmissionError::Transport("connection refused".to_owned()),
        ];

        for err in cases {
            assert_eq!(err.reason(), FALLBACK_FAILURE_MESSAGE, "{err:?}");
        }
    }

    #[test]
    fn validation_codes() {
        assert_eq!(ValidationError::MissingFields.code(), "missing_fields");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid_email");
    }
}
