//! Check service - runs the license/manifest/lineage compliance pipeline

use super::report_service::build_report;
use crate::api::{check_compliance, ComplianceApi, ComplianceRequest};
use crate::models::{
    ComplianceReport, ComplianceVerdict, LicenseCheck, LineageFormat, ManifestCheck,
    ManifestRecord, TagCheck,
};
use crate::parser::{extract_license_metadata, parse_sections};
use crate::validator::{
    check_localization, validate_advanced, validate_lineage_tag, verify_signature, SchemaValidator,
};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Inputs of one compliance run
#[derive(Debug, Clone)]
pub struct CheckInput {
    pub license: PathBuf,
    pub license_nl: Option<PathBuf>,
    pub manifest: PathBuf,
    pub lineage_tag: PathBuf,
    pub tag_format: LineageFormat,
    /// Trusted SHA-256 of the English license
    pub signature: Option<String>,
    /// Advanced manifest rule set
    pub schema_version: Option<String>,
    pub verbose: bool,
}

/// Read, parse and validate a license document
pub fn check_license_file(
    path: &Path,
    trusted_hash: Option<&str>,
    schemas: &SchemaValidator,
) -> LicenseCheck {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return LicenseCheck::file_error(e),
    };

    let sections = parse_sections(&content);
    let record = extract_license_metadata(&content, sections.clone());

    if !verify_signature(path, trusted_hash) {
        return LicenseCheck {
            valid: false,
            data: Some(record),
            errors: vec!["Signature validation failed".to_string()],
            sections,
        };
    }

    let errors = schemas.validate_license(&record);
    LicenseCheck {
        valid: errors.is_empty(),
        data: Some(record),
        errors,
        sections,
    }
}

/// Read and validate an AIBDP manifest
///
/// Advanced rules only run once the base schema passes.
pub fn check_manifest_file(
    path: &Path,
    schemas: &SchemaValidator,
    schema_version: Option<&str>,
) -> ManifestCheck {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return ManifestCheck::error(e),
    };

    let raw: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => return ManifestCheck::error(e),
    };

    let errors = schemas.validate_manifest(&raw);
    if !errors.is_empty() {
        return ManifestCheck {
            valid: false,
            data: None,
            raw: Some(raw),
            errors,
        };
    }

    let data: ManifestRecord = match serde_json::from_value(raw.clone()) {
        Ok(m) => m,
        Err(e) => return ManifestCheck::error(e),
    };

    let errors = schema_version
        .map(|version| validate_advanced(&raw, version))
        .unwrap_or_default();

    ManifestCheck {
        valid: errors.is_empty(),
        data: Some(data),
        raw: Some(raw),
        errors,
    }
}

/// Read and validate a synthetic lineage tag
pub fn check_lineage_tag_file(path: &Path, format: LineageFormat) -> TagCheck {
    match std::fs::read_to_string(path) {
        Ok(content) => validate_lineage_tag(&content, format),
        Err(e) => TagCheck::error(format!("Tag file error: {}", e)),
    }
}

/// Run every check and assemble the report
pub async fn run_checks(input: &CheckInput, api: &dyn ComplianceApi) -> Result<ComplianceReport> {
    let schemas = SchemaValidator::new()?;

    progress(input.verbose, &format!("Parsing license {}", input.license.display()));
    let license = check_license_file(&input.license, input.signature.as_deref(), &schemas);

    let license_nl = input.license_nl.as_deref().map(|path| {
        progress(input.verbose, &format!("Parsing Dutch license {}", path.display()));
        check_license_file(path, None, &schemas)
    });

    progress(input.verbose, &format!("Validating manifest {}", input.manifest.display()));
    let manifest = check_manifest_file(&input.manifest, &schemas, input.schema_version.as_deref());
    if let Some(data) = &manifest.data {
        let consent = &data.ai_boundaries.default_consent;
        progress(
            input.verbose,
            &format!(
                "Manifest default consent: training={} generation={} agentic={}",
                consent.training.as_str(),
                consent.generation.as_str(),
                consent.agentic.as_str()
            ),
        );
    }

    progress(
        input.verbose,
        &format!("Validating {} lineage tag {}", input.tag_format, input.lineage_tag.display()),
    );
    let tag = check_lineage_tag_file(&input.lineage_tag, input.tag_format);
    if let Some(work) = tag.data.as_ref().and_then(|t| t.original_work()) {
        progress(input.verbose, &format!("Lineage tag names original work {}", work));
    }

    let localization = license_nl
        .as_ref()
        .map(|nl| check_localization(&license.sections, &nl.sections))
        .unwrap_or_default();

    let verdict = match (&license.data, &manifest.raw) {
        (Some(license_data), Some(raw_manifest))
            if license.valid && manifest.valid && manifest.data.is_some() =>
        {
            progress(input.verbose, "Requesting remote compliance verdict");
            let request = ComplianceRequest {
                license: license_data,
                manifest: raw_manifest,
            };
            check_compliance(api, &request).await
        }
        _ => ComplianceVerdict::not_checked(),
    };

    Ok(build_report(
        &license,
        license_nl.as_ref(),
        &manifest,
        &tag,
        localization,
        verdict,
    ))
}

fn progress(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", format!("→ {}", message).cyan());
    }
}
