pub mod client;

use std::time::Duration;

use tokio::time::sleep;

use crate::agents::classifier::classify;
use crate::agents::synthesizer::synthesize;
use crate::agents::AgentResponse;
use crate::errors::ProcessingFailure;
use crate::runtime_config::{BackendMode, RuntimeConfig};

use self::client::{InteractClient, InteractRequest};

/// Where responses come from. Both variants answer with the same
/// [`AgentResponse`] shape, so callers never branch on the backend.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Keyword classifier plus static templates, after an artificial delay.
    Simulated { latency: Duration },
    Remote(InteractClient),
}

impl Backend {
    pub fn simulated(latency: Duration) -> Self {
        Self::Simulated { latency }
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self, ProcessingFailure> {
        match config.backend_mode {
            BackendMode::Simulated => Ok(Self::simulated(config.simulated_latency())),
            BackendMode::Remote => Ok(Self::Remote(InteractClient::new(
                &config.backend_url,
                config.backend_timeout(),
            )?)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Simulated { .. } => "simulated",
            Self::Remote(_) => "remote",
        }
    }

    pub async fn respond(
        &self,
        command: &str,
        division_hint: Option<&str>,
        context: Option<&str>,
    ) -> Result<AgentResponse, ProcessingFailure> {
        match self {
            Self::Simulated { latency } => {
                if !latency.is_zero() {
                    sleep(*latency).await;
                }
                let key = classify(command);
                Ok(synthesize(key, division_hint, command))
            }
            Self::Remote(client) => {
                client
                    .interact(&InteractRequest {
                        command,
                        agent: division_hint,
                        context,
                    })
                    .await
            }
        }
    }
}
