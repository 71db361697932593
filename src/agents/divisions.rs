use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionStatus {
    Active,
    Idle,
    Processing,
}

impl DivisionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Processing => "processing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: &'static str,
    pub name: &'static str,
    pub status: DivisionStatus,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
}

/// Arguments for one capability button press, ready for
/// `Orchestrator::process_command`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityInvocation {
    pub capability: String,
    pub command: String,
    pub division_hint: String,
    pub context: String,
}

impl Division {
    pub fn invoke(&self, capability: &str) -> Result<CapabilityInvocation, String> {
        let capability = self
            .capabilities
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(capability.trim()))
            .ok_or_else(|| {
                format!(
                    "Division '{}' has no capability '{}'",
                    self.id,
                    capability.trim()
                )
            })?;

        Ok(CapabilityInvocation {
            capability: capability.to_string(),
            command: format!("Execute {capability} for {}", self.name),
            division_hint: self.id.to_string(),
            context: format!("User triggered specific capability: {capability}"),
        })
    }

    /// Console and UI code number capabilities from 1.
    pub fn capability_at(&self, position: usize) -> Option<&'static str> {
        position
            .checked_sub(1)
            .and_then(|index| self.capabilities.get(index))
            .copied()
    }
}

pub fn divisions() -> &'static [Division] {
    DIVISIONS
}

pub fn find_division(id: &str) -> Option<&'static Division> {
    let id = id.trim();
    DIVISIONS
        .iter()
        .find(|division| division.id.eq_ignore_ascii_case(id))
}

static DIVISIONS: &[Division] = &[
    Division {
        id: "eid",
        name: "EID: Earth Intelligence",
        status: DivisionStatus::Active,
        description: "Planetary monitoring, weather analysis, IoT grid, disaster prediction.",
        capabilities: &[
            "Planetary Monitoring",
            "Weather Analysis",
            "Satellite Uplink",
            "Disaster Forecast",
        ],
    },
    Division {
        id: "enid",
        name: "ENID: Enterprise Intelligence",
        status: DivisionStatus::Active,
        description: "Business automation, marketing, compliance, data insights.",
        capabilities: &[
            "Workflow Automation",
            "Marketing GenAI",
            "Compliance & KYC",
            "Smart Audit",
        ],
    },
    Division {
        id: "dtad",
        name: "DTAD: DeFi & Transactions",
        status: DivisionStatus::Processing,
        description: "Financial brain, yield optimization, insurance, payments.",
        capabilities: &[
            "Yield Optimization",
            "Smart Treasury",
            "Risk Scoring",
            "Global Payments",
        ],
    },
    Division {
        id: "hid",
        name: "HID: Human Interaction",
        status: DivisionStatus::Active,
        description: "Support, personalization, user journey, recommendations.",
        capabilities: &[
            "24/7 Support",
            "Personalization",
            "Ticket Resolution",
            "Voice Interface",
        ],
    },
];
