// Palimpsest - License compliance tooling
// Parses Palimpsest License documents, validates AIBDP manifests and lineage tags,
// and reports on their compliance.

pub mod api;
pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod validator;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use models::{ComplianceReport, LicenseRecord, LineageTag, ManifestRecord, PalimpsestConfig};
pub use services::{run_checks, CheckInput};
