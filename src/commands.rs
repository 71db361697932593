use crate::agents::divisions::{self, CapabilityInvocation};
use crate::agents::AgentResponse;
use crate::runtime_config::{BackendMode, RuntimeConfigUpdate};
use crate::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Help,
    ListDivisions,
    RunCapability(CapabilityInvocation),
    FreeText(String),
    ShowConfig,
    UpdateConfig(RuntimeConfigUpdate),
    Quit,
    Empty,
}

pub const HELP_TEXT: &str = "Commands:\n\
    \x20 divisions                      list divisions and their capabilities\n\
    \x20 run <division-id> <number>     execute a capability, e.g. `run eid 1`\n\
    \x20 config                         show runtime configuration\n\
    \x20 set latency <ms>               simulated response delay (0-30000)\n\
    \x20 set mode <simulated|remote>    switch the interaction backend\n\
    \x20 set url <endpoint>             remote interaction endpoint\n\
    \x20 set timeout <secs>             remote request timeout (1-300)\n\
    \x20 help                           show this help\n\
    \x20 quit | exit                    leave the console\n\
    Any other input is sent to the AEOS core as a free-text command.";

pub fn parse_console_line(line: &str) -> Result<ConsoleCommand, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ConsoleCommand::Empty);
    }

    let mut words = trimmed.split_whitespace();
    let head = words.next().unwrap_or_default().to_ascii_lowercase();
    match head.as_str() {
        "help" | "?" => Ok(ConsoleCommand::Help),
        "divisions" | "ls" => Ok(ConsoleCommand::ListDivisions),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        "config" => Ok(ConsoleCommand::ShowConfig),
        "set" => {
            parse_set(words.next(), words.next(), words.next()).map(ConsoleCommand::UpdateConfig)
        }
        "run" => {
            let division_id = words
                .next()
                .ok_or_else(|| "Usage: run <division-id> <capability number>".to_string())?;
            let position = words
                .next()
                .ok_or_else(|| "Usage: run <division-id> <capability number>".to_string())?;
            if words.next().is_some() {
                return Err("Usage: run <division-id> <capability number>".to_string());
            }

            let division = divisions::find_division(division_id)
                .ok_or_else(|| format!("Unknown division '{division_id}'"))?;
            let capability = position
                .parse::<usize>()
                .ok()
                .and_then(|value| division.capability_at(value))
                .ok_or_else(|| {
                    format!(
                        "Division '{}' has capabilities 1-{}",
                        division.id,
                        division.capabilities.len()
                    )
                })?;

            division.invoke(capability).map(ConsoleCommand::RunCapability)
        }
        _ => Ok(ConsoleCommand::FreeText(trimmed.to_string())),
    }
}

const SET_USAGE: &str = "Usage: set <latency|mode|url|timeout> <value>";

fn parse_set(
    field: Option<&str>,
    value: Option<&str>,
    extra: Option<&str>,
) -> Result<RuntimeConfigUpdate, String> {
    let (Some(field), Some(value), None) = (field, value, extra) else {
        return Err(SET_USAGE.to_string());
    };

    let mut update = RuntimeConfigUpdate::default();
    match field.to_ascii_lowercase().as_str() {
        "latency" => update.simulated_latency_ms = Some(parse_number(value, "latency")?),
        "timeout" => update.backend_timeout_secs = Some(parse_number(value, "timeout")?),
        "mode" => {
            let mode = BackendMode::parse(value)
                .ok_or_else(|| format!("Unknown backend mode '{value}'; use simulated or remote"))?;
            update.backend_mode = Some(mode);
        }
        "url" => update.backend_url = Some(value.to_string()),
        _ => return Err(SET_USAGE.to_string()),
    }
    Ok(update)
}

fn parse_number(value: &str, field: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| format!("Invalid {field} '{value}'; expected a whole number"))
}

pub fn render_config(state: &AppState) -> String {
    let config = &state.runtime_config;
    [
        format!("workspace: {}", state.workspace_root.display()),
        format!(
            "backend: {} (configured mode: {})",
            state.orchestrator.backend().name(),
            config.backend_mode.as_str()
        ),
        format!("latency: {} ms", config.simulated_latency_ms),
        format!("url: {}", config.backend_url),
        format!("timeout: {} s", config.backend_timeout_secs),
    ]
    .join("\n")
}

pub fn render_divisions() -> String {
    let mut lines = Vec::new();
    for division in divisions::divisions() {
        lines.push(format!(
            "{} [{}] ID: {}-001",
            division.name,
            division.status.as_str(),
            division.id.to_ascii_uppercase()
        ));
        lines.push(format!("  {}", division.description));
        for (index, capability) in division.capabilities.iter().enumerate() {
            lines.push(format!("  {}. {capability}", index + 1));
        }
    }
    lines.join("\n")
}

pub fn render_response(response: &AgentResponse) -> String {
    let mut lines = vec![format!("[{}] {}", response.division, response.timestamp)];
    lines.extend(response.response.lines().map(|line| format!("| {line}")));
    for usage in &response.tool_usage {
        lines.push(format!(
            "  tool: {} ({} -> {})",
            usage.tool, usage.input, usage.output
        ));
    }
    for note in &response.collaboration_log {
        lines.push(format!("  note: {note}"));
    }
    lines.push(format!(
        "  sentiment: {}  cost: {:.3}",
        response.sentiment, response.cost_incurred
    ));
    lines.join("\n")
}

/// Runs one parsed command and returns the text to print, or `None` when the
/// console should exit.
pub async fn execute(state: &mut AppState, command: ConsoleCommand) -> Option<String> {
    match command {
        ConsoleCommand::Quit => None,
        ConsoleCommand::Empty => Some(String::new()),
        ConsoleCommand::Help => Some(HELP_TEXT.to_string()),
        ConsoleCommand::ListDivisions => Some(render_divisions()),
        ConsoleCommand::ShowConfig => Some(render_config(state)),
        ConsoleCommand::UpdateConfig(update) => Some(match state.apply_config_update(update) {
            Ok(()) => render_config(state),
            Err(message) => format!("> CONFIG UNCHANGED: {message}"),
        }),
        ConsoleCommand::RunCapability(invocation) => {
            let outcome = state
                .orchestrator
                .process_command(
                    &invocation.command,
                    Some(invocation.division_hint.as_str()),
                    Some(invocation.context.as_str()),
                )
                .await;
            Some(match outcome {
                Some(response) => format!(
                    "> {} EXECUTION COMPLETE\n{}",
                    invocation.capability,
                    render_response(&response)
                ),
                None => format!("> {} FAILED", invocation.capability),
            })
        }
        ConsoleCommand::FreeText(text) => Some(
            match state.orchestrator.process_command(&text, None, None).await {
                Some(response) => render_response(&response),
                None => "> COMMAND FAILED".to_string(),
            },
        ),
    }
}
