use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Governing law every Palimpsest license declares
pub const GOVERNING_LAW: &str = "Dutch law";

/// Enforcement venue every Palimpsest license declares
pub const ENFORCEMENT: &str = "Scottish courts (per Hague Convention 2005)";

/// Version reported when a document does not name one
pub const DEFAULT_LICENSE_VERSION: &str = "v0.3.0";

/// Heading text → accumulated paragraph text
pub type SectionMap = BTreeMap<String, String>;

/// Allow/deny stance used by both license consent and manifest boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consent {
    Allow,
    Deny,
}

impl Consent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consent::Allow => "allow",
            Consent::Deny => "deny",
        }
    }
}

/// AI system categories a license can grant or withhold consent for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiType {
    #[serde(rename = "AGI")]
    Agi,
    Autonomous,
    Agentic,
    Ambient,
    /// Non-interpretive systems
    #[serde(rename = "NI")]
    Ni,
    /// Quantum AI
    #[serde(rename = "QAI")]
    Qai,
}

impl AiType {
    pub const ALL: [AiType; 6] = [
        AiType::Agi,
        AiType::Autonomous,
        AiType::Agentic,
        AiType::Ambient,
        AiType::Ni,
        AiType::Qai,
    ];
}

/// Serialization format of a synthetic lineage tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LineageFormat {
    #[serde(rename = "XML")]
    #[value(name = "XML")]
    Xml,
    #[serde(rename = "JSON")]
    #[value(name = "JSON")]
    Json,
}

impl std::fmt::Display for LineageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineageFormat::Xml => write!(f, "XML"),
            LineageFormat::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    pub governing_law: String,
    pub enforcement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgiConsent {
    pub default_policy: Consent,
    pub ai_types: Vec<AiType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticLineageRequirement {
    pub required: bool,
    pub format: LineageFormat,
}

/// Structured metadata extracted from a Palimpsest License document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub license_version: String,
    pub jurisdiction: Jurisdiction,
    pub agi_consent: AgiConsent,
    pub synthetic_lineage: SyntheticLineageRequirement,
    pub sections: SectionMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_type_serialization() {
        let json = serde_json::to_string(&AiType::ALL).unwrap();
        assert_eq!(
            json,
            r#"["AGI","Autonomous","Agentic","Ambient","NI","QAI"]"#
        );
    }

    #[test]
    fn test_consent_round_names() {
        assert_eq!(serde_json::to_string(&Consent::Deny).unwrap(), r#""deny""#);
        let parsed: Consent = serde_json::from_str(r#""allow""#).unwrap();
        assert_eq!(parsed, Consent::Allow);
        assert_eq!(parsed.as_str(), "allow");
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let record = LicenseRecord {
            license_version: "v0.3.1".to_string(),
            jurisdiction: Jurisdiction {
                governing_law: GOVERNING_LAW.to_string(),
                enforcement: ENFORCEMENT.to_string(),
            },
            agi_consent: AgiConsent {
                default_policy: Consent::Deny,
                ai_types: vec![AiType::Agi],
            },
            synthetic_lineage: SyntheticLineageRequirement {
                required: true,
                format: LineageFormat::Xml,
            },
            sections: SectionMap::new(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["licenseVersion"], "v0.3.1");
        assert_eq!(value["jurisdiction"]["governingLaw"], "Dutch law");
        assert_eq!(value["agiConsent"]["defaultPolicy"], "deny");
        assert_eq!(value["syntheticLineage"]["format"], "XML");
    }
}
