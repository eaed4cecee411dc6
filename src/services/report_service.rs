//! Report service - aggregates check results and renders them

use crate::models::{
    CheckSummary, ComplianceReport, ComplianceVerdict, CrossCheck, LicenseCheck, LicenseSummary,
    ManifestCheck, OutputFormat, TagCheck,
};
use crate::Result;

/// Whether the manifest's training consent equals the license default policy.
///
/// False unless both documents validated.
pub fn manifest_matches_license(license: &LicenseCheck, manifest: &ManifestCheck) -> bool {
    if !(license.valid && manifest.valid) {
        return false;
    }

    match (&license.data, &manifest.data) {
        (Some(l), Some(m)) => l.agi_consent.default_policy == m.training_consent(),
        _ => false,
    }
}

/// Assemble the report from individual results
pub fn build_report(
    license: &LicenseCheck,
    license_nl: Option<&LicenseCheck>,
    manifest: &ManifestCheck,
    tag: &TagCheck,
    localization: Vec<String>,
    compliance_api: ComplianceVerdict,
) -> ComplianceReport {
    ComplianceReport {
        license: LicenseSummary::from(license),
        license_nl: license_nl.map(LicenseSummary::from),
        manifest: CheckSummary {
            valid: manifest.valid,
            errors: manifest.errors.clone(),
        },
        lineage_tag: CheckSummary {
            valid: tag.valid,
            errors: tag.errors.clone(),
        },
        localization: CheckSummary::from_errors(localization),
        compliance_api,
        compliance: CrossCheck {
            manifest_matches_license: manifest_matches_license(license, manifest),
        },
    }
}

pub fn render_json(report: &ComplianceReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &ComplianceReport) -> String {
    let valid = |ok: bool| if ok { "Valid" } else { "Invalid" };
    let matches = |ok: bool| if ok { "✓ Matches" } else { "✗ Mismatch" };

    let mut out = String::new();
    out.push_str("Palimpsest License Parser Report\n");
    out.push_str("================================\n");
    out.push_str(&format!(
        "- License: {} ({})\n",
        valid(report.license.valid),
        report.license.version
    ));
    if let Some(nl) = &report.license_nl {
        out.push_str(&format!("- Dutch License: {} ({})\n", valid(nl.valid), nl.version));
    }
    out.push_str(&format!("- AIBDP Manifest: {}\n", valid(report.manifest.valid)));
    out.push_str(&format!("- Lineage Tag: {}\n", valid(report.lineage_tag.valid)));
    out.push_str(&format!("- Localization: {}\n", matches(report.localization.valid)));
    out.push_str(&format!(
        "- Compliance API: {} (Schema: {})\n",
        if report.compliance_api.valid { "✓ Valid" } else { "✗ Invalid" },
        report.compliance_api.schema_version
    ));
    out.push_str(&format!(
        "- Overall Compliance: {}\n",
        matches(report.compliance.manifest_matches_license)
    ));
    out.push_str("\nErrors:\n");
    let errors: Vec<String> = report
        .all_errors()
        .iter()
        .map(|error| format!("- {}", error))
        .collect();
    out.push_str(&errors.join("\n"));

    out
}

pub fn render(report: &ComplianceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_license;
    use crate::validator::validate_lineage_tag;
    use crate::models::{LineageFormat, ManifestRecord};

    fn license_check() -> LicenseCheck {
        let record = parse_license("# Palimpsest License v0.3.1\n\nBody.\n");
        LicenseCheck {
            valid: true,
            sections: record.sections.clone(),
            data: Some(record),
            errors: vec![],
        }
    }

    fn manifest_check(training: &str) -> ManifestCheck {
        let raw = serde_json::json!({
            "manifest_version": "1.0",
            "palimpsest_license": "Palimpsest License v0.3",
            "ai_boundaries": {
                "default_consent": { "training": training, "generation": "deny", "agentic": "deny" }
            }
        });
        let data: ManifestRecord = serde_json::from_value(raw.clone()).unwrap();
        ManifestCheck {
            valid: true,
            data: Some(data),
            raw: Some(raw),
            errors: vec![],
        }
    }

    fn tag_check() -> TagCheck {
        validate_lineage_tag(
            r#"<synthetic_lineage><original_work title="Dawn"/></synthetic_lineage>"#,
            LineageFormat::Xml,
        )
    }

    #[test]
    fn test_manifest_matches_license() {
        assert!(manifest_matches_license(&license_check(), &manifest_check("deny")));
        assert!(!manifest_matches_license(&license_check(), &manifest_check("allow")));

        let mut invalid = manifest_check("deny");
        invalid.valid = false;
        assert!(!manifest_matches_license(&license_check(), &invalid));
    }

    #[test]
    fn test_build_report_passing() {
        let verdict = ComplianceVerdict {
            valid: true,
            message: "Compliant".to_string(),
            schema_version: "1.0".to_string(),
        };
        let report = build_report(
            &license_check(),
            None,
            &manifest_check("deny"),
            &tag_check(),
            vec![],
            verdict,
        );

        assert!(report.is_valid());
        assert_eq!(report.license.version, "v0.3.1");
        assert!(report.compliance.manifest_matches_license);
        assert!(report.all_errors().is_empty());
    }

    #[test]
    fn test_render_text_template() {
        let report = build_report(
            &license_check(),
            None,
            &manifest_check("allow"),
            &tag_check(),
            vec![r#"Section "Clause 1" differs between English and Dutch"#.to_string()],
            ComplianceVerdict::unavailable(),
        );
        let text = render_text(&report);

        assert!(text.starts_with("Palimpsest License Parser Report\n================================\n"));
        assert!(text.contains("- License: Valid (v0.3.1)\n"));
        assert!(text.contains("- AIBDP Manifest: Valid\n"));
        assert!(text.contains("- Lineage Tag: Valid\n"));
        assert!(text.contains("- Localization: ✗ Mismatch\n"));
        assert!(text.contains("- Compliance API: ✗ Invalid (Schema: unknown)\n"));
        assert!(text.contains("- Overall Compliance: ✗ Mismatch\n"));
        assert!(text.ends_with(
            "\nErrors:\n- Section \"Clause 1\" differs between English and Dutch\n- API unavailable"
        ));
        assert!(!text.contains("Dutch License"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let report = build_report(
            &license_check(),
            Some(&LicenseCheck::file_error("not found")),
            &manifest_check("deny"),
            &tag_check(),
            vec![],
            ComplianceVerdict::not_checked(),
        );
        let json = render(&report, OutputFormat::Json).unwrap();
        let parsed: ComplianceReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report);
        assert!(!parsed.is_valid());
        assert_eq!(parsed.compliance_api.message, "Not checked");
        assert_eq!(parsed.license_nl.unwrap().errors, vec!["File error: not found"]);
    }
}
