use super::license::Consent;
use serde::{Deserialize, Serialize};

/// Default consent declared per AI use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConsent {
    pub training: Consent,
    pub generation: Consent,
    pub agentic: Consent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiBoundaries {
    pub default_consent: DefaultConsent,
}

/// AIBDP manifest declaring the AI boundaries of a work
///
/// Keys keep the snake_case spelling used in manifest files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub manifest_version: String,
    pub palimpsest_license: String,
    pub ai_boundaries: AiBoundaries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl ManifestRecord {
    /// Consent the manifest declares for training use
    pub fn training_consent(&self) -> Consent {
        self.ai_boundaries.default_consent.training
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_manifest() {
        let json = r#"{
            "manifest_version": "1.0",
            "palimpsest_license": "Palimpsest License v0.3",
            "ai_boundaries": {
                "default_consent": { "training": "deny", "generation": "allow", "agentic": "deny" }
            }
        }"#;

        let manifest: ManifestRecord = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.training_consent(), Consent::Deny);
        assert_eq!(manifest.ai_boundaries.default_consent.generation, Consent::Allow);
        assert!(manifest.signature.is_none());

        let value = serde_json::to_value(&manifest).unwrap();
        assert!(value.get("signature").is_none());
    }

    #[test]
    fn test_rejects_unknown_consent() {
        let json = r#"{
            "manifest_version": "1.0",
            "palimpsest_license": "Palimpsest License v0.3",
            "ai_boundaries": {
                "default_consent": { "training": "maybe", "generation": "allow", "agentic": "deny" }
            }
        }"#;

        assert!(serde_json::from_str::<ManifestRecord>(json).is_err());
    }
}
