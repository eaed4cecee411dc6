//! Versioned manifest rules layered on top of the base schema

use serde_json::Value as JsonValue;
use std::str::FromStr;

/// Rule sets selectable by schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedSchema {
    /// Adds the quantum-AI consent requirement
    V1_1,
}

impl FromStr for AdvancedSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "v1.1" | "1.1" => Ok(AdvancedSchema::V1_1),
            other => Err(format!("Unknown schema version: {}", other)),
        }
    }
}

impl AdvancedSchema {
    pub fn validate(&self, manifest: &JsonValue) -> Vec<String> {
        match self {
            AdvancedSchema::V1_1 => validate_v1_1(manifest),
        }
    }
}

/// Apply the rules of a schema version to a manifest that passed the base schema
pub fn validate_advanced(manifest: &JsonValue, schema_version: &str) -> Vec<String> {
    match schema_version.parse::<AdvancedSchema>() {
        Ok(schema) => schema.validate(manifest),
        Err(e) => vec![e],
    }
}

fn validate_v1_1(manifest: &JsonValue) -> Vec<String> {
    let Some(consent) = manifest
        .get("ai_boundaries")
        .and_then(|b| b.get("default_consent"))
    else {
        return Vec::new();
    };

    match consent.get("qai") {
        None => vec!["Missing 'qai' policy in v1.1 schema".to_string()],
        Some(policy) if policy != "deny" => vec!["QAI must be denied in v1.1 schema".to_string()],
        Some(_) => Vec::new(),
    }
}
