use chrono::{SecondsFormat, Utc};

use crate::agents::classifier::TemplateKey;
use crate::agents::templates::{self, ResponseTemplate};
use crate::agents::{AgentResponse, ToolUsage};

const CORE_DIVISION: &str = "AEOS Core";
const UNROUTED_TARGET: &str = "appropriate division";

pub fn synthesize(key: TemplateKey, division_hint: Option<&str>, command: &str) -> AgentResponse {
    if key.is_fallback() {
        return fallback_response(division_hint, command);
    }

    match templates::lookup(key) {
        Some(template) => from_template(template),
        None => {
            tracing::warn!(
                key = key.as_str(),
                "no template registered for routed key; serving fallback response"
            );
            fallback_response(division_hint, command)
        }
    }
}

/// RFC 3339 in UTC with millisecond precision, the same shape a browser
/// produces with `toISOString()`.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn normalize_hint(division_hint: Option<&str>) -> Option<&str> {
    division_hint
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn from_template(template: &ResponseTemplate) -> AgentResponse {
    AgentResponse {
        response: template.response_text.to_string(),
        division: template.division_label.to_string(),
        tool_usage: template
            .tool_usage
            .iter()
            .map(|entry| ToolUsage {
                tool: entry.tool.to_string(),
                input: entry.input.to_string(),
                output: entry.output.to_string(),
            })
            .collect(),
        collaboration_log: template
            .collaboration_log
            .iter()
            .map(|line| line.to_string())
            .collect(),
        sentiment: template.sentiment.to_string(),
        cost_incurred: template.cost_incurred,
        timestamp: current_timestamp(),
    }
}

fn fallback_response(division_hint: Option<&str>, command: &str) -> AgentResponse {
    let hint = normalize_hint(division_hint);
    AgentResponse {
        response: format!(
            "AEOS Core processing: \"{command}\". Routing to {}.",
            hint.unwrap_or(UNROUTED_TARGET)
        ),
        division: hint.unwrap_or(CORE_DIVISION).to_string(),
        tool_usage: Vec::new(),
        collaboration_log: Vec::new(),
        sentiment: "neutral".to_string(),
        cost_incurred: 0.0,
        timestamp: current_timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::agents::classifier::classify;

    fn without_timestamp(mut response: AgentResponse) -> AgentResponse {
        response.timestamp.clear();
        response
    }

    #[test]
    fn planetary_command_produces_earth_intelligence_report() {
        let command = "Check planetary status on Venus";
        let response = synthesize(classify(command), None, command);

        assert_eq!(response.division, "EID - Earth Intelligence");
        assert_eq!(response.sentiment, "neutral");
        assert_eq!(response.tool_usage.len(), 1);
        assert_eq!(response.tool_usage[0].tool, "Deep Space Relay");
        assert_eq!(
            response.collaboration_log,
            vec!["Aggregating data from deployed AI probes.".to_string()]
        );
        assert!(response.response.starts_with("PLANETARY MONITORING REPORT:"));
        assert!((response.cost_incurred - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn unmatched_command_with_hint_uses_hint_as_division() {
        let command = "random gibberish xyz";
        let response = synthesize(classify(command), Some("DTAD"), command);

        assert_eq!(response.division, "DTAD");
        assert_eq!(response.cost_incurred, 0.0);
        assert!(response.tool_usage.is_empty());
        assert!(response.collaboration_log.is_empty());
        assert_eq!(response.sentiment, "neutral");
        assert_eq!(
            response.response,
            "AEOS Core processing: \"random gibberish xyz\". Routing to DTAD."
        );
    }

    #[test]
    fn fallback_without_hint_uses_generic_labels() {
        let response = synthesize(TemplateKey::Fallback, None, "hello there");
        assert_eq!(response.division, "AEOS Core");
        assert!(response.response.contains("\"hello there\""));
        assert!(response.response.ends_with("Routing to appropriate division."));
    }

    #[test]
    fn blank_hint_counts_as_absent() {
        let response = synthesize(TemplateKey::Fallback, Some("   "), "");
        assert_eq!(response.division, "AEOS Core");
        assert_eq!(
            response.response,
            "AEOS Core processing: \"\". Routing to appropriate division."
        );
    }

    #[test]
    fn matched_templates_ignore_the_hint() {
        let response = synthesize(TemplateKey::Voice, Some("eid"), "voice");
        assert_eq!(response.division, "HID - Human Interaction");
        assert_eq!(response.sentiment, "secure");
    }

    #[test]
    fn repeated_synthesis_differs_only_in_timestamp() {
        for key in templates::all()
            .iter()
            .map(|template| template.key)
            .chain(std::iter::once(TemplateKey::Fallback))
        {
            let first = synthesize(key, Some("hid"), "same command");
            let second = synthesize(key, Some("hid"), "same command");
            assert_eq!(without_timestamp(first), without_timestamp(second));
        }
    }

    #[test]
    fn timestamp_is_parseable_utc_with_millis() {
        let response = synthesize(TemplateKey::Weather, None, "weather");
        assert!(response.timestamp.ends_with('Z'));
        DateTime::parse_from_rfc3339(&response.timestamp).expect("timestamp should be RFC 3339");
        let fraction = response
            .timestamp
            .split('.')
            .nth(1)
            .expect("timestamp should carry fractional seconds");
        assert_eq!(fraction.len(), "123Z".len());
    }

    #[test]
    fn response_serializes_with_wire_field_names() {
        let response = synthesize(TemplateKey::Audit, None, "audit");
        let value = serde_json::to_value(&response).expect("response should serialize");
        for field in [
            "response",
            "division",
            "tool_usage",
            "collaboration_log",
            "sentiment",
            "cost_incurred",
            "timestamp",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["tool_usage"][0]["tool"], "Ledger Verifier");
    }
}
