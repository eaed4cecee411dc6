//! Service layer for palimpsest
//!
//! Business logic shared by the CLI commands and library users.

pub mod check_service;
pub mod metadata_service;
pub mod report_service;

// Re-export commonly used types
pub use check_service::{
    check_license_file, check_lineage_tag_file, check_manifest_file, run_checks, CheckInput,
};
pub use metadata_service::{generate_html_meta, generate_jsonld, jsonld_value};
pub use report_service::{build_report, manifest_matches_license, render, render_json, render_text};
