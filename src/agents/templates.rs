use crate::agents::classifier::TemplateKey;

pub const EID_LABEL: &str = "EID - Earth Intelligence";
pub const ENID_LABEL: &str = "ENID - Enterprise Intelligence";
pub const DTAD_LABEL: &str = "DTAD - DeFi & Transactions";
pub const HID_LABEL: &str = "HID - Human Interaction";

#[derive(Debug)]
pub struct TemplateTool {
    pub tool: &'static str,
    pub input: &'static str,
    pub output: &'static str,
}

#[derive(Debug)]
pub struct ResponseTemplate {
    pub key: TemplateKey,
    pub response_text: &'static str,
    pub division_label: &'static str,
    pub tool_usage: &'static [TemplateTool],
    pub collaboration_log: &'static [&'static str],
    pub sentiment: &'static str,
    pub cost_incurred: f64,
}

pub fn lookup(key: TemplateKey) -> Option<&'static ResponseTemplate> {
    TEMPLATES.iter().find(|template| template.key == key)
}

pub fn all() -> &'static [ResponseTemplate] {
    TEMPLATES
}

static TEMPLATES: &[ResponseTemplate] = &[
    ResponseTemplate {
        key: TemplateKey::Planetary,
        response_text: "PLANETARY MONITORING REPORT:\n\
            • VENUS: Atmospheric pressure nominal. Probe V-9 active.\n\
            • MARS: Terraforming sim running. Colony Alpha supports life.\n\
            • JUPITER: Storm tracking on Great Red Spot. Radiation levels high.\n\
            • MOON: Lunar Gateway operational. Helium-3 mining optimized.",
        division_label: EID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Deep Space Relay",
            input: "Solar System Scan",
            output: "Data Received",
        }],
        collaboration_log: &["Aggregating data from deployed AI probes."],
        sentiment: "neutral",
        cost_incurred: 0.05,
    },
    ResponseTemplate {
        key: TemplateKey::Weather,
        response_text: "GLOBAL WEATHER MATRIX:\n\
            • NORTH AMERICA: Polar Vortex stabilizing. Temp -5°C.\n\
            • APAC: Monsoon season early warning. Rainfall +20%.\n\
            • EMEA: Heatwave detected in Southern Sector. Grid load 95%.\n\
            • LATAM: Amazon humidity levels optimal for regeneration.",
        division_label: EID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Global Atmos Scan",
            input: "Multi-Region",
            output: "Map Generated",
        }],
        collaboration_log: &[],
        sentiment: "neutral",
        cost_incurred: 0.02,
    },
    ResponseTemplate {
        key: TemplateKey::Satellite,
        response_text: "SATELLITE CONSTELLATION STATUS:\n\
            • SAT-1 (Optics): 100% Uptime. Resolution 50cm.\n\
            • SAT-2 (Radar): Tracking maritime logistics in Pacific.\n\
            • SAT-3 (Comms): Relaying secure Masumi Block data.\n\
            • SAT-4 (Infrared): Wildfire detection active in Sector 4.",
        division_label: EID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Orbital Feed",
            input: "Constellation Link",
            output: "Connected",
        }],
        collaboration_log: &[],
        sentiment: "neutral",
        cost_incurred: 0.02,
    },
    ResponseTemplate {
        key: TemplateKey::Disaster,
        response_text: "DISASTER FORECAST SYSTEM:\n\
            • FLOOD: Critical Risk in Delta Region. Probability 89%.\n\
            • FIRE: High Risk in California Sector. Drone Swarm deployed.\n\
            • QUAKE: Minor tremors detected in Ring of Fire. Mag 2.3.\n\
            • STORM: Category 1 Cyclone forming in Atlantic.",
        division_label: EID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Risk Prediction Model",
            input: "Seismic Sensors",
            output: "Alert",
        }],
        collaboration_log: &["Triggering Drone Swarm for aerial survey."],
        sentiment: "serious",
        cost_incurred: 0.02,
    },
    ResponseTemplate {
        key: TemplateKey::Marketing,
        response_text: "MARKETING OPERATIONS CENTER:\n\
            • EMAIL: Open rate 24%. A/B test 'Subject Line B' winning.\n\
            • SOCIAL: Viral trend detected on Twitter. Auto-replying.\n\
            • SEO: Ranking #1 for 'AI OS'. Traffic +15% WoW.\n\
            • ADS: CPA reduced by 12% via autonomous bid optimization.",
        division_label: ENID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Campaign Manager",
            input: "Multi-Channel",
            output: "Active",
        }],
        collaboration_log: &[],
        sentiment: "positive",
        cost_incurred: 0.015,
    },
    ResponseTemplate {
        key: TemplateKey::Workflow,
        response_text: "WORKFLOW AUTOMATION METRICS:\n\
            • HR: Onboarding time reduced from 5 days to 4 hours.\n\
            • PROCUREMENT: Supplier invoices auto-paid via smart contract.\n\
            • IT: 45 support tickets resolved by Level 1 AI Agent.\n\
            • SALES: CRM updated with 200 new leads from web scraper.",
        division_label: ENID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Process Miner",
            input: "Corporate Logs",
            output: "Optimized",
        }],
        collaboration_log: &[],
        sentiment: "positive",
        cost_incurred: 0.015,
    },
    ResponseTemplate {
        key: TemplateKey::Compliance,
        response_text: "COMPLIANCE & IDENTITY SHIELD:\n\
            • KYC: User ID verified against Interpol database.\n\
            • AML: No suspicious transaction patterns detected.\n\
            • GDPR: Data privacy request processed automatically.\n\
            • SANCTIONS: Wallet address clean across 15 jurisdictions.",
        division_label: ENID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "RegTech Scanner",
            input: "Global Database",
            output: "Verified",
        }],
        collaboration_log: &[],
        sentiment: "secure",
        cost_incurred: 0.015,
    },
    ResponseTemplate {
        key: TemplateKey::Audit,
        response_text: "SMART AUDIT LOGS:\n\
            • TX-882: Treasury payout confirmed. Block #99281.\n\
            • AUTH: Admin login via DID at 14:02 UTC.\n\
            • DATA: EID accessed sensitive satellite feed. Authorized.\n\
            • CONFIG: Policy update deployed to ENID-Core.",
        division_label: ENID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Ledger Verifier",
            input: "Cardano Chain",
            output: "Synced",
        }],
        collaboration_log: &[],
        sentiment: "secure",
        cost_incurred: 0.015,
    },
    ResponseTemplate {
        key: TemplateKey::Yield,
        response_text: "YIELD FARMING OPPORTUNITIES:\n\
            • ADA/MIN: 12.5% APY. Low impermanent loss risk.\n\
            • ADA/AGIX: 8.2% APY. High volume pool.\n\
            • STABLE/ADA: 4.5% APY. Safe haven allocation.\n\
            • LENDING: Supply rate 3.1% on Liqwid Protocol.",
        division_label: DTAD_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Liquidity Scanner",
            input: "DEX Aggregator",
            output: "Found",
        }],
        collaboration_log: &[],
        sentiment: "positive",
        cost_incurred: 0.03,
    },
    ResponseTemplate {
        key: TemplateKey::Treasury,
        response_text: "TREASURY ALLOCATION:\n\
            • NATIVE (ADA): 60% - Staked for network security.\n\
            • STABLES: 25% - Dry powder for dips.\n\
            • GOVERNANCE: 10% - Voting power in partner DAOs.\n\
            • RWA: 5% - Tokenized real estate bonds.",
        division_label: DTAD_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Asset Manager",
            input: "DAO Vault",
            output: "Balanced",
        }],
        collaboration_log: &[],
        sentiment: "neutral",
        cost_incurred: 0.03,
    },
    ResponseTemplate {
        key: TemplateKey::Risk,
        response_text: "RISK ASSESSMENT PROFILE:\n\
            • CREDIT SCORE: 850 (Excellent). Eligible for under-collateral loans.\n\
            • VOLATILITY: Portfolio Beta 0.85 (Lower than market).\n\
            • LIQUIDATION: Health factor 2.4. Safe from margin calls.\n\
            • DIVERSIFICATION: High. Exposure to 12 asset classes.",
        division_label: DTAD_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Credit Engine",
            input: "Wallet Graph",
            output: "Scored",
        }],
        collaboration_log: &[],
        sentiment: "serious",
        cost_incurred: 0.03,
    },
    ResponseTemplate {
        key: TemplateKey::Payments,
        response_text: "PAYMENT ACTIVITY LOG:\n\
            • SENT: 50 ADA to User-Alice (Settled < 1s).\n\
            • RECEIVED: 200 DJED from Merchant-Bob.\n\
            • SUBSCRIPTION: Paid 5 ADA for Oracle Feed (Auto-renew).\n\
            • PENDING: Multisig approval needed for 10k ADA transfer.",
        division_label: DTAD_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Payment Rail",
            input: "Hydra Head",
            output: "Settled",
        }],
        collaboration_log: &[],
        sentiment: "positive",
        cost_incurred: 0.03,
    },
    ResponseTemplate {
        key: TemplateKey::Support,
        response_text: "ACTIVE SUPPORT SESSIONS:\n\
            • USER-1: Requesting API key reset. Handling...\n\
            • USER-2: Asking about staking APY. Answered.\n\
            • USER-3: Reporting bug in mobile UI. Logged.\n\
            • SYSTEM: All agents operating at 99.9% uptime.",
        division_label: HID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Chat Engine",
            input: "Queue",
            output: "Active",
        }],
        collaboration_log: &[],
        sentiment: "positive",
        cost_incurred: 0.005,
    },
    ResponseTemplate {
        key: TemplateKey::Personalization,
        response_text: "USER PERSONALIZATION PROFILE:\n\
            • PREFERENCE: Dark Mode, High Density Data.\n\
            • INTERESTS: DeFi, Space Tech, Governance.\n\
            • ACTIVITY: High frequency trader (Asia Timezone).\n\
            • SUGGESTION: Enable 'Pro Mode' for advanced charts.",
        division_label: HID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "User Graph",
            input: "Behavior",
            output: "Mapped",
        }],
        collaboration_log: &[],
        sentiment: "neutral",
        cost_incurred: 0.005,
    },
    ResponseTemplate {
        key: TemplateKey::Tickets,
        response_text: "TICKET RESOLUTION STATS:\n\
            • OPEN: 3 (Low Priority).\n\
            • RESOLVED: 142 today (Auto-closed by AI).\n\
            • ESCALATED: 0 requiring human intervention.\n\
            • CSAT SCORE: 4.8/5.0 based on recent feedback.",
        division_label: HID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Ticket Master",
            input: "CRM",
            output: "Updated",
        }],
        collaboration_log: &[],
        sentiment: "positive",
        cost_incurred: 0.005,
    },
    ResponseTemplate {
        key: TemplateKey::Voice,
        response_text: "VOICE INTERFACE METRICS:\n\
            • ACCURACY: 98.2% Word Error Rate.\n\
            • LANGUAGE: English (US) detected. Dialect: West Coast.\n\
            • SENTIMENT: Calm/Professional tone analyzed.\n\
            • SECURITY: Voiceprint matches User-Admin-01.",
        division_label: HID_LABEL,
        tool_usage: &[TemplateTool {
            tool: "Voice Biometrics",
            input: "Audio Stream",
            output: "Secure",
        }],
        collaboration_log: &[],
        sentiment: "secure",
        cost_incurred: 0.005,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::classifier::KEYWORD_ROUTES;

    #[test]
    fn every_routed_key_has_exactly_one_template() {
        for (key, _) in KEYWORD_ROUTES {
            let count = TEMPLATES.iter().filter(|template| template.key == *key).count();
            assert_eq!(count, 1, "template count for {}", key.as_str());
        }
        assert_eq!(TEMPLATES.len(), KEYWORD_ROUTES.len());
    }

    #[test]
    fn fallback_has_no_static_template() {
        assert!(lookup(TemplateKey::Fallback).is_none());
    }

    #[test]
    fn templates_are_well_formed() {
        for template in all() {
            assert!(template.cost_incurred >= 0.0);
            assert_eq!(template.tool_usage.len(), 1);
            assert_eq!(template.response_text.lines().count(), 5);
            assert!(!template.sentiment.is_empty());
            assert!(template.response_text.ends_with('.'));
        }
    }

    #[test]
    fn continuation_lines_keep_bullet_prefix() {
        let planetary = lookup(TemplateKey::Planetary).expect("planetary template should exist");
        let second_line = planetary
            .response_text
            .lines()
            .nth(1)
            .expect("report should have bullet lines");
        assert_eq!(
            second_line,
            "• VENUS: Atmospheric pressure nominal. Probe V-9 active."
        );
    }
}
