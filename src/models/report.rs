use super::license::{LicenseRecord, SectionMap};
use super::lineage::LineageTag;
use super::manifest::ManifestRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// =============================================================================
// Per-component results
// =============================================================================

/// Outcome of parsing and validating one license document
#[derive(Debug, Clone)]
pub struct LicenseCheck {
    pub valid: bool,
    /// `None` only when the file could not be read
    pub data: Option<LicenseRecord>,
    pub errors: Vec<String>,
    pub sections: SectionMap,
}

impl LicenseCheck {
    pub fn file_error(message: impl std::fmt::Display) -> Self {
        Self {
            valid: false,
            data: None,
            errors: vec![format!("File error: {}", message)],
            sections: SectionMap::new(),
        }
    }

    pub fn version(&self) -> &str {
        self.data
            .as_ref()
            .map(|d| d.license_version.as_str())
            .unwrap_or("unknown")
    }
}

/// Outcome of validating an AIBDP manifest
#[derive(Debug, Clone)]
pub struct ManifestCheck {
    pub valid: bool,
    /// Typed manifest, present once the file parsed and matched the base schema
    pub data: Option<ManifestRecord>,
    /// Raw manifest as read, for rules that look past the typed fields
    pub raw: Option<JsonValue>,
    pub errors: Vec<String>,
}

impl ManifestCheck {
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            valid: false,
            data: None,
            raw: None,
            errors: vec![format!("Manifest error: {}", message)],
        }
    }
}

/// Outcome of validating a synthetic lineage tag
#[derive(Debug, Clone)]
pub struct TagCheck {
    pub valid: bool,
    pub data: Option<LineageTag>,
    pub errors: Vec<String>,
}

impl TagCheck {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            data: None,
            errors: vec![message.into()],
        }
    }
}

// =============================================================================
// Report
// =============================================================================

/// Validity plus error messages for one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl CheckSummary {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseSummary {
    pub valid: bool,
    pub version: String,
    pub errors: Vec<String>,
}

impl From<&LicenseCheck> for LicenseSummary {
    fn from(check: &LicenseCheck) -> Self {
        Self {
            valid: check.valid,
            version: check.version().to_string(),
            errors: check.errors.clone(),
        }
    }
}

/// Verdict returned by the remote compliance endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceVerdict {
    pub valid: bool,
    pub message: String,
    pub schema_version: String,
}

impl ComplianceVerdict {
    /// Verdict used when license or manifest failed locally
    pub fn not_checked() -> Self {
        Self {
            valid: false,
            message: "Not checked".to_string(),
            schema_version: "unknown".to_string(),
        }
    }

    /// Verdict used when the endpoint cannot be reached or answers garbage
    pub fn unavailable() -> Self {
        Self {
            valid: false,
            message: "API unavailable".to_string(),
            schema_version: "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCheck {
    pub manifest_matches_license: bool,
}

/// Aggregated result of one compliance run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub license: LicenseSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_nl: Option<LicenseSummary>,
    pub manifest: CheckSummary,
    pub lineage_tag: CheckSummary,
    pub localization: CheckSummary,
    #[serde(rename = "complianceAPI")]
    pub compliance_api: ComplianceVerdict,
    pub compliance: CrossCheck,
}

impl ComplianceReport {
    /// Logical AND of every sub-check
    ///
    /// The license/manifest cross-check is informational and not included.
    pub fn is_valid(&self) -> bool {
        self.license.valid
            && self.license_nl.as_ref().map_or(true, |nl| nl.valid)
            && self.manifest.valid
            && self.lineage_tag.valid
            && self.localization.valid
            && self.compliance_api.valid
    }

    /// Every error in report order, with the API message when it failed
    pub fn all_errors(&self) -> Vec<String> {
        let mut errors = self.license.errors.clone();
        if let Some(nl) = &self.license_nl {
            errors.extend(nl.errors.iter().map(|e| format!("[nl] {}", e)));
        }
        errors.extend(self.manifest.errors.iter().cloned());
        errors.extend(self.lineage_tag.errors.iter().cloned());
        errors.extend(self.localization.errors.iter().cloned());
        if !self.compliance_api.valid {
            errors.push(self.compliance_api.message.clone());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_report() -> ComplianceReport {
        ComplianceReport {
            license: LicenseSummary {
                valid: true,
                version: "v0.3.1".to_string(),
                errors: vec![],
            },
            license_nl: None,
            manifest: CheckSummary::from_errors(vec![]),
            lineage_tag: CheckSummary::from_errors(vec![]),
            localization: CheckSummary::from_errors(vec![]),
            compliance_api: ComplianceVerdict {
                valid: true,
                message: "ok".to_string(),
                schema_version: "1.0".to_string(),
            },
            compliance: CrossCheck {
                manifest_matches_license: false,
            },
        }
    }

    #[test]
    fn test_valid_ignores_cross_check() {
        assert!(passing_report().is_valid());
    }

    #[test]
    fn test_any_failed_check_invalidates() {
        let mut report = passing_report();
        report.localization = CheckSummary::from_errors(vec!["differs".to_string()]);
        assert!(!report.is_valid());

        let mut report = passing_report();
        report.license_nl = Some(LicenseSummary {
            valid: false,
            version: "unknown".to_string(),
            errors: vec!["File error: missing".to_string()],
        });
        assert!(!report.is_valid());
        assert_eq!(report.all_errors(), vec!["[nl] File error: missing"]);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(passing_report()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["license", "manifest", "lineageTag", "localization", "complianceAPI", "compliance"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert!(value.get("licenseNl").is_none());
        assert_eq!(value["complianceAPI"]["schemaVersion"], "1.0");
        assert_eq!(value["compliance"]["manifestMatchesLicense"], false);
    }

    #[test]
    fn test_all_errors_includes_api_message() {
        let mut report = passing_report();
        report.compliance_api = ComplianceVerdict::unavailable();
        assert_eq!(report.all_errors(), vec!["API unavailable"]);
    }
}
