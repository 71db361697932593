use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::agents::synthesizer::current_timestamp;
use crate::agents::AgentResponse;
use crate::errors::ProcessingFailure;

/// Body accepted by the interaction endpoint. `agent` carries the division
/// hint under the name the endpoint expects.
#[derive(Debug, Clone, Serialize)]
pub struct InteractRequest<'a> {
    pub command: &'a str,
    pub agent: Option<&'a str>,
    pub context: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct InteractClient {
    endpoint: Arc<String>,
    http: reqwest::Client,
}

impl InteractClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ProcessingFailure> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ProcessingFailure::ClientBuild(error.to_string()))?;

        Ok(Self {
            endpoint: Arc::new(endpoint.trim().to_string()),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub async fn interact(
        &self,
        request: &InteractRequest<'_>,
    ) -> Result<AgentResponse, ProcessingFailure> {
        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(request)
            .send()
            .await
            .map_err(|error| ProcessingFailure::Transport {
                endpoint: self.endpoint.to_string(),
                message: error.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ProcessingFailure::Transport {
                endpoint: self.endpoint.to_string(),
                message: error.to_string(),
            })?;

        if !status.is_success() {
            return Err(ProcessingFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_response(&body)
    }
}

fn decode_response(body: &str) -> Result<AgentResponse, ProcessingFailure> {
    let mut parsed: AgentResponse = serde_json::from_str(body.trim())
        .map_err(|error| ProcessingFailure::Decode(format!("{error}. Raw body:\n{body}")))?;

    if parsed.timestamp.trim().is_empty() {
        parsed.timestamp = current_timestamp();
    }

    Ok(parsed)
}
