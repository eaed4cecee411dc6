use super::markdown::parse_sections;
use crate::models::{
    AgiConsent, AiType, Consent, Jurisdiction, LicenseRecord, LineageFormat, SectionMap,
    SyntheticLineageRequirement, DEFAULT_LICENSE_VERSION, ENFORCEMENT, GOVERNING_LAW,
};
use regex::Regex;

/// Build the license record for a document.
///
/// Only the version is read from the text (`Palimpsest License vX.Y.Z`,
/// falling back to `v0.3.0`). Jurisdiction, consent policy and lineage
/// requirement are the fixed values every v0.3 license carries; they are not
/// derived from the document.
pub fn extract_license_metadata(markdown: &str, sections: SectionMap) -> LicenseRecord {
    LicenseRecord {
        license_version: extract_version(markdown),
        jurisdiction: Jurisdiction {
            governing_law: GOVERNING_LAW.to_string(),
            enforcement: ENFORCEMENT.to_string(),
        },
        agi_consent: AgiConsent {
            default_policy: Consent::Deny,
            ai_types: AiType::ALL.to_vec(),
        },
        synthetic_lineage: SyntheticLineageRequirement {
            required: true,
            format: LineageFormat::Xml,
        },
        sections,
    }
}

/// Parse sections and metadata in one pass over the text
pub fn parse_license(markdown: &str) -> LicenseRecord {
    extract_license_metadata(markdown, parse_sections(markdown))
}

/// First `Palimpsest License vX.Y.Z` in the text, as `vX.Y.Z`
pub fn extract_version(markdown: &str) -> String {
    Regex::new(r"Palimpsest License v(\d+\.\d+\.\d+)")
        .ok()
        .and_then(|re| re.captures(markdown))
        .and_then(|cap| cap.get(1))
        .map(|m| format!("v{}", m.as_str()))
        .unwrap_or_else(|| DEFAULT_LICENSE_VERSION.to_string())
}
