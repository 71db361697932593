pub mod agents;
pub mod commands;
pub mod errors;
pub mod interaction;
pub mod logging;
pub mod runtime_config;

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use agents::orchestrator::Orchestrator;
use errors::FailureNotice;
use interaction::Backend;
use runtime_config::{RuntimeConfig, RuntimeConfigUpdate};

pub use agents::classifier::{classify, TemplateKey};
pub use agents::synthesizer::synthesize;
pub use agents::{AgentResponse, ToolUsage};

pub struct AppState {
    pub orchestrator: Orchestrator,
    pub runtime_config: RuntimeConfig,
    pub workspace_root: PathBuf,
}

impl AppState {
    pub fn new(
        runtime_config: RuntimeConfig,
        workspace_root: PathBuf,
        notice_sink: Option<mpsc::UnboundedSender<FailureNotice>>,
    ) -> Result<Self, String> {
        let backend = Backend::from_config(&runtime_config).map_err(|error| error.to_string())?;
        let orchestrator = match notice_sink {
            Some(sink) => Orchestrator::new(backend).with_notice_sink(sink),
            None => Orchestrator::new(backend),
        };

        Ok(Self {
            orchestrator,
            runtime_config,
            workspace_root,
        })
    }

    /// Applies a partial update and rebuilds the backend from the result. On
    /// error nothing changes.
    pub fn apply_config_update(&mut self, update: RuntimeConfigUpdate) -> Result<(), String> {
        let mut next = self.runtime_config.clone();
        next.apply_update(update);
        let backend = Backend::from_config(&next).map_err(|error| error.to_string())?;

        self.orchestrator.replace_backend(backend);
        self.runtime_config = next;
        Ok(())
    }
}

fn resolve_workspace_root() -> Result<PathBuf, String> {
    if let Some(override_root) = std::env::var_os("AEOS_WORKSPACE_ROOT") {
        return Ok(PathBuf::from(override_root));
    }
    std::env::current_dir().map_err(|error| format!("Failed to determine workspace root: {error}"))
}

fn load_env_files(workspace_root: &Path) {
    let _ = dotenvy::from_path(workspace_root.join(".env"));
    let _ = dotenvy::from_path(workspace_root.join(".env.local"));
}

pub fn initialize_state(
    notice_sink: mpsc::UnboundedSender<FailureNotice>,
) -> Result<AppState, String> {
    let workspace_root = resolve_workspace_root()?;
    load_env_files(&workspace_root);

    let runtime_config = RuntimeConfig::from_env();
    logging::init(runtime_config.log_format);

    let state = AppState::new(runtime_config, workspace_root, Some(notice_sink))?;
    tracing::info!(
        backend = state.orchestrator.backend().name(),
        latency_ms = state.runtime_config.simulated_latency_ms,
        workspace_root = %state.workspace_root.display(),
        "AEOS core initialized"
    );

    Ok(state)
}

/// Interactive console over stdin/stdout. Failure notices are printed as they
/// arrive, independently of the command that caused them.
pub async fn run() -> Result<(), String> {
    let (notice_sink, mut notices) = mpsc::unbounded_channel::<FailureNotice>();
    let mut state = initialize_state(notice_sink)?;

    tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            eprintln!("!! {}: {}", notice.title, notice.description);
        }
    });

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    write_out(&mut stdout, &format!("{}\n", commands::HELP_TEXT)).await?;

    loop {
        write_out(&mut stdout, "aeos> ").await?;
        let Some(line) = lines
            .next_line()
            .await
            .map_err(|error| format!("Failed to read console input: {error}"))?
        else {
            break;
        };

        let output = match commands::parse_console_line(&line) {
            Ok(command) => match commands::execute(&mut state, command).await {
                Some(text) => text,
                None => break,
            },
            Err(message) => message,
        };
        if !output.is_empty() {
            write_out(&mut stdout, &format!("{output}\n")).await?;
        }
    }

    Ok(())
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> Result<(), String> {
    stdout
        .write_all(text.as_bytes())
        .await
        .map_err(|error| format!("Failed to write console output: {error}"))?;
    stdout
        .flush()
        .await
        .map_err(|error| format!("Failed to flush console output: {error}"))
}
