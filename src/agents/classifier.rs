#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Planetary,
    Weather,
    Satellite,
    Disaster,
    Marketing,
    Workflow,
    Compliance,
    Audit,
    Yield,
    Treasury,
    Risk,
    Payments,
    Support,
    Personalization,
    Tickets,
    Voice,
    Fallback,
}

impl TemplateKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planetary => "planetary",
            Self::Weather => "weather",
            Self::Satellite => "satellite",
            Self::Disaster => "disaster",
            Self::Marketing => "marketing",
            Self::Workflow => "workflow",
            Self::Compliance => "compliance",
            Self::Audit => "audit",
            Self::Yield => "yield",
            Self::Treasury => "treasury",
            Self::Risk => "risk",
            Self::Payments => "payments",
            Self::Support => "support",
            Self::Personalization => "personalization",
            Self::Tickets => "tickets",
            Self::Voice => "voice",
            Self::Fallback => "fallback",
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Keyword routes in priority order. The first route with any keyword contained
/// in the lower-cased command wins, so reordering this table changes routing.
pub const KEYWORD_ROUTES: &[(TemplateKey, &[&str])] = &[
    (TemplateKey::Planetary, &["planetary", "venus"]),
    (TemplateKey::Weather, &["weather"]),
    (TemplateKey::Satellite, &["satellite", "uplink"]),
    (TemplateKey::Disaster, &["disaster"]),
    (TemplateKey::Marketing, &["marketing"]),
    (TemplateKey::Workflow, &["workflow"]),
    (TemplateKey::Compliance, &["compliance", "kyc"]),
    (TemplateKey::Audit, &["audit"]),
    (TemplateKey::Yield, &["yield"]),
    (TemplateKey::Treasury, &["treasury"]),
    (TemplateKey::Risk, &["risk"]),
    (TemplateKey::Payments, &["pay", "instant"]),
    (TemplateKey::Support, &["support"]),
    (TemplateKey::Personalization, &["personal"]),
    (TemplateKey::Tickets, &["ticket", "resolve"]),
    (TemplateKey::Voice, &["voice"]),
];

pub fn classify(command: &str) -> TemplateKey {
    let value = command.to_lowercase();
    let key = KEYWORD_ROUTES
        .iter()
        .find(|(_, keywords)| contains_any(&value, keywords))
        .map(|(key, _)| *key)
        .unwrap_or(TemplateKey::Fallback);

    tracing::debug!(key = key.as_str(), command_len = command.len(), "command classified");
    key
}

fn contains_any(value: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| value.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venus_or_planetary_in_any_casing_routes_to_planetary() {
        for command in [
            "Check planetary status on Venus",
            "VENUS",
            "pLaNeTaRy overview",
            "what is the venusian pressure",
        ] {
            assert_eq!(classify(command), TemplateKey::Planetary, "{command}");
        }
    }

    #[test]
    fn unmatched_and_empty_commands_fall_back() {
        assert_eq!(classify(""), TemplateKey::Fallback);
        assert_eq!(classify("random gibberish xyz"), TemplateKey::Fallback);
        assert_eq!(classify("   \t\n"), TemplateKey::Fallback);
    }

    #[test]
    fn earlier_route_wins_when_several_keywords_match() {
        assert_eq!(classify("weather impact on yield"), TemplateKey::Weather);
        assert_eq!(classify("yield report, and the weather"), TemplateKey::Weather);
        assert_eq!(classify("audit the treasury"), TemplateKey::Audit);
        assert_eq!(classify("risk of payment delay"), TemplateKey::Risk);
        assert_eq!(classify("support ticket backlog"), TemplateKey::Support);
    }

    #[test]
    fn alternate_keywords_share_a_route() {
        assert_eq!(classify("open the uplink"), TemplateKey::Satellite);
        assert_eq!(classify("run KYC checks"), TemplateKey::Compliance);
        assert_eq!(classify("instant settlement"), TemplateKey::Payments);
        assert_eq!(classify("please resolve this"), TemplateKey::Tickets);
    }

    #[test]
    fn punctuation_and_whitespace_are_not_normalized() {
        assert_eq!(classify("sat-ellite"), TemplateKey::Fallback);
        assert_eq!(classify("w e a t h e r"), TemplateKey::Fallback);
        assert_eq!(classify("...WEATHER!!!"), TemplateKey::Weather);
    }

    #[test]
    fn flood_is_not_a_route_keyword() {
        // "risk" still routes, so flood alerts that mention it land on Risk.
        assert_eq!(classify("Flood risk detected in Sector 7"), TemplateKey::Risk);
        assert_eq!(classify("flood"), TemplateKey::Fallback);
        assert_eq!(classify("Flood warning for the delta"), TemplateKey::Fallback);
    }

    #[test]
    fn every_route_key_is_unique_and_never_fallback() {
        let mut seen = std::collections::HashSet::new();
        for (key, keywords) in KEYWORD_ROUTES {
            assert!(!key.is_fallback());
            assert!(!keywords.is_empty());
            assert!(seen.insert(*key), "duplicate route for {}", key.as_str());
        }
        assert_eq!(seen.len(), 16);
    }
}
