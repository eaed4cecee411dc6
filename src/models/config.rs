use super::license::LineageFormat;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Endpoint queried when no other is configured
pub const DEFAULT_COMPLIANCE_ENDPOINT: &str = "https://api.palimpsestlicense.org/compliance/check";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "PALIMPSEST_COMPLIANCE_ENDPOINT";

const CONFIG_FILENAME: &str = "palimpsest.toml";

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Language of generated notices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout; absent means the request waits indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_COMPLIANCE_ENDPOINT.to_string()
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_tag_format")]
    pub tag_format: LineageFormat,

    #[serde(default = "default_output")]
    pub output: OutputFormat,

    /// Advanced manifest rule set (e.g. "v1.1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
}

fn default_tag_format() -> LineageFormat {
    LineageFormat::Xml
}

fn default_output() -> OutputFormat {
    OutputFormat::Text
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            tag_format: default_tag_format(),
            output: default_output(),
            schema_version: None,
        }
    }
}

/// Description of a licensed work, used for generated metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    #[serde(default)]
    pub emotional_lineage: Option<String>,
    #[serde(default = "default_work_version")]
    pub version: String,
    #[serde(default = "default_license_url")]
    pub license_url: String,
    #[serde(default = "default_true")]
    pub agi_consent_required: bool,
    #[serde(default)]
    pub language: Language,
}

fn default_work_version() -> String {
    "0.4".to_string()
}

fn default_license_url() -> String {
    "https://palimpsestlicense.org/v0.4".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for WorkMetadata {
    fn default() -> Self {
        Self {
            title: None,
            author_name: None,
            author_url: None,
            emotional_lineage: None,
            version: default_work_version(),
            license_url: default_license_url(),
            agi_consent_required: true,
            language: Language::En,
        }
    }
}

// =============================================================================
// Palimpsest Configuration
// =============================================================================

/// Tool configuration read from `palimpsest.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PalimpsestConfig {
    #[serde(default)]
    pub compliance: ComplianceConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub work: WorkMetadata,
}

impl PalimpsestConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Otherwise `./palimpsest.toml`, then the
    /// user config dir, then built-in defaults. The endpoint env var wins
    /// over any file.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                config.compliance.endpoint = endpoint;
            }
        }

        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: PalimpsestConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILENAME);
        if local.exists() {
            return Some(local);
        }

        let user = dirs::config_dir()?.join("palimpsest").join("config.toml");
        user.exists().then_some(user)
    }
}
