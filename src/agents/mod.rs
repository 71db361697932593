pub mod classifier;
pub mod divisions;
pub mod orchestrator;
pub mod synthesizer;
pub mod templates;

use serde::{Deserialize, Serialize};

/// Fabricated provenance entry attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUsage {
    pub tool: String,
    pub input: String,
    pub output: String,
}

/// Result of processing one command. Field names are the wire names the
/// dashboard reads, so they stay snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub response: String,
    pub division: String,
    #[serde(default)]
    pub tool_usage: Vec<ToolUsage>,
    #[serde(default)]
    pub collaboration_log: Vec<String>,
    pub sentiment: String,
    #[serde(default)]
    pub cost_incurred: f64,
    #[serde(default)]
    pub timestamp: String,
}
