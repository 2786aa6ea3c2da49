use std::time::Duration;

use async_trait::async_trait;
use portfolio_contact::{Confirmation, ContactFormData, MessageIntake, SubmissionError};
use serde::Deserialize;

use crate::config::IntakeConfig;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Posts contact messages as JSON to the portfolio's message-intake endpoint.
#[derive(Clone, Debug)]
pub struct HttpIntake {
    client: reqwest::Client,
    endpoint: url::Url,
}

impl HttpIntake {
    pub fn new(config: &IntakeConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint()?,
        })
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

#[async_trait]
impl MessageIntake for HttpIntake {
    async fn create_message(
        &self,
        message: &ContactFormData,
    ) -> Result<Confirmation, SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    endpoint = %self.endpoint,
                    error = %e,
                    "contact intake unreachable"
                );
                SubmissionError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, %status, "failed to read contact intake response");
            SubmissionError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);

            tracing::warn!(
                endpoint = %self.endpoint,
                %status,
                ?message,
                "contact intake rejected message"
            );

            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // A 2xx without a readable body still means the message was accepted
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }
}
