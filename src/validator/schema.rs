//! JSON Schema validation for license records and AIBDP manifests
//!
//! Both schemas are compiled into the binary; every violated constraint is
//! reported, not just the first.

use crate::models::LicenseRecord;
use anyhow::{Context, Result};
use jsonschema::Validator;
use serde_json::Value as JsonValue;

const LICENSE_SCHEMA: &str = include_str!("../../schemas/license.schema.json");
const MANIFEST_SCHEMA: &str = include_str!("../../schemas/manifest.schema.json");

/// Document shapes with a fixed schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    License,
    Manifest,
}

impl SchemaKind {
    /// Embedded schema source
    pub fn source(&self) -> &'static str {
        match self {
            SchemaKind::License => LICENSE_SCHEMA,
            SchemaKind::Manifest => MANIFEST_SCHEMA,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::License => "license",
            SchemaKind::Manifest => "manifest",
        }
    }
}

/// Compiled validators for both document shapes
pub struct SchemaValidator {
    license: Validator,
    manifest: Validator,
}

impl SchemaValidator {
    /// Compile the embedded schemas
    pub fn new() -> Result<Self> {
        Ok(Self {
            license: compile(SchemaKind::License)?,
            manifest: compile(SchemaKind::Manifest)?,
        })
    }

    fn validator(&self, kind: SchemaKind) -> &Validator {
        match kind {
            SchemaKind::License => &self.license,
            SchemaKind::Manifest => &self.manifest,
        }
    }

    /// Check a value against one schema, returning one message per violation
    pub fn validate(&self, kind: SchemaKind, value: &JsonValue) -> Vec<String> {
        self.validator(kind)
            .iter_errors(value)
            .map(|error| {
                let path = error.instance_path.to_string();
                if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{}: {}", path, error)
                }
            })
            .collect()
    }

    pub fn validate_license(&self, record: &LicenseRecord) -> Vec<String> {
        match serde_json::to_value(record) {
            Ok(value) => self.validate(SchemaKind::License, &value),
            Err(e) => vec![format!("Failed to serialize license record: {}", e)],
        }
    }

    pub fn validate_manifest(&self, manifest: &JsonValue) -> Vec<String> {
        self.validate(SchemaKind::Manifest, manifest)
    }
}

fn compile(kind: SchemaKind) -> Result<Validator> {
    let schema: JsonValue = serde_json::from_str(kind.source())
        .with_context(|| format!("Failed to parse {} schema", kind.name()))?;

    Validator::new(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile {} schema: {}", kind.name(), e))
}
