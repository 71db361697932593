use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/interact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendMode {
    Simulated,
    Remote,
}

impl BackendMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "simulated" | "simulation" | "local" => Some(Self::Simulated),
            "remote" | "http" => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub simulated_latency_ms: u64,
    pub backend_mode: BackendMode,
    pub backend_url: String,
    pub backend_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfigUpdate {
    pub simulated_latency_ms: Option<u64>,
    pub backend_mode: Option<BackendMode>,
    pub backend_url: Option<String>,
    pub backend_timeout_secs: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1500,
            backend_mode: BackendMode::Simulated,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            simulated_latency_ms: env_u64(
                "AEOS_SIMULATED_LATENCY_MS",
                defaults.simulated_latency_ms,
                0,
                30_000,
            ),
            backend_mode: std::env::var("AEOS_BACKEND_MODE")
                .ok()
                .and_then(|value| BackendMode::parse(&value))
                .unwrap_or(defaults.backend_mode),
            backend_url: env_non_empty("AEOS_BACKEND_URL").unwrap_or(defaults.backend_url),
            backend_timeout_secs: env_u64(
                "AEOS_BACKEND_TIMEOUT_SECS",
                defaults.backend_timeout_secs,
                1,
                300,
            ),
            log_format: std::env::var("AEOS_LOG_FORMAT")
                .ok()
                .and_then(|value| LogFormat::parse(&value))
                .unwrap_or(defaults.log_format),
        }
    }

    pub fn apply_update(&mut self, input: RuntimeConfigUpdate) {
        if let Some(value) = input.simulated_latency_ms {
            self.simulated_latency_ms = value.min(30_000);
        }
        if let Some(value) = input.backend_mode {
            self.backend_mode = value;
        }
        if let Some(value) = input.backend_url {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.backend_url = trimmed.to_string();
            }
        }
        if let Some(value) = input.backend_timeout_secs {
            self.backend_timeout_secs = value.clamp(1, 300);
        }
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_u64(key: &str, default: u64, min: u64, max: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(|value| value.clamp(min, max))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_clamps_and_ignores_blank_url() {
        let mut config = RuntimeConfig::default();
        config.apply_update(RuntimeConfigUpdate {
            simulated_latency_ms: Some(90_000),
            backend_mode: Some(BackendMode::Remote),
            backend_url: Some("   ".to_string()),
            backend_timeout_secs: Some(0),
        });

        assert_eq!(config.simulated_latency_ms, 30_000);
        assert_eq!(config.backend_mode, BackendMode::Remote);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.backend_timeout_secs, 1);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn empty_update_keeps_defaults() {
        let mut config = RuntimeConfig::default();
        config.apply_update(RuntimeConfigUpdate::default());
        assert_eq!(config.simulated_latency(), Duration::from_millis(1500));
        assert_eq!(config.backend_timeout(), Duration::from_secs(30));
        assert_eq!(config.backend_mode, BackendMode::Simulated);
    }

    #[test]
    fn mode_and_format_parsing_accepts_aliases() {
        assert_eq!(BackendMode::parse(" HTTP "), Some(BackendMode::Remote));
        assert_eq!(BackendMode::parse("local"), Some(BackendMode::Simulated));
        assert_eq!(BackendMode::parse("grpc"), None);
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn update_deserializes_from_camel_case() {
        let update: RuntimeConfigUpdate =
            serde_json::from_str(r#"{"simulatedLatencyMs": 0, "backendMode": "remote"}"#)
                .expect("update should deserialize");
        assert_eq!(update.simulated_latency_ms, Some(0));
        assert_eq!(update.backend_mode, Some(BackendMode::Remote));
        assert!(update.backend_url.is_none());
    }

    #[test]
    fn from_env_clamps_values_and_falls_back_on_garbage() {
        let keys = [
            "AEOS_SIMULATED_LATENCY_MS",
            "AEOS_BACKEND_MODE",
            "AEOS_BACKEND_URL",
            "AEOS_BACKEND_TIMEOUT_SECS",
            "AEOS_LOG_FORMAT",
        ];

        std::env::set_var("AEOS_SIMULATED_LATENCY_MS", "999999");
        std::env::set_var("AEOS_BACKEND_MODE", " REMOTE ");
        std::env::set_var("AEOS_BACKEND_URL", "   ");
        std::env::set_var("AEOS_BACKEND_TIMEOUT_SECS", "0");
        std::env::set_var("AEOS_LOG_FORMAT", "Json");
        let config = RuntimeConfig::from_env();
        assert_eq!(config.simulated_latency_ms, 30_000);
        assert_eq!(config.backend_mode, BackendMode::Remote);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.backend_timeout_secs, 1);
        assert_eq!(config.log_format, LogFormat::Json);

        std::env::set_var("AEOS_SIMULATED_LATENCY_MS", "250");
        std::env::set_var("AEOS_BACKEND_MODE", "grpc");
        std::env::set_var("AEOS_BACKEND_URL", " http://10.0.0.7:8000/interact ");
        std::env::set_var("AEOS_BACKEND_TIMEOUT_SECS", "900");
        std::env::set_var("AEOS_LOG_FORMAT", "xml");
        let config = RuntimeConfig::from_env();
        assert_eq!(config.simulated_latency_ms, 250);
        assert_eq!(config.backend_mode, BackendMode::Simulated);
        assert_eq!(config.backend_url, "http://10.0.0.7:8000/interact");
        assert_eq!(config.backend_timeout_secs, 300);
        assert_eq!(config.log_format, LogFormat::Pretty);

        std::env::set_var("AEOS_SIMULATED_LATENCY_MS", "soon");
        std::env::set_var("AEOS_BACKEND_TIMEOUT_SECS", "-5");
        let config = RuntimeConfig::from_env();
        assert_eq!(config.simulated_latency_ms, 1500);
        assert_eq!(config.backend_timeout_secs, 30);

        for key in keys {
            std::env::remove_var(key);
        }
    }
}
