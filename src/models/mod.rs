pub mod config;
pub mod license;
pub mod lineage;
pub mod manifest;
pub mod report;

pub use config::{
    ComplianceConfig, DefaultsConfig, Language, OutputFormat, PalimpsestConfig, WorkMetadata,
    DEFAULT_COMPLIANCE_ENDPOINT, ENDPOINT_ENV_VAR,
};
pub use license::{
    AgiConsent, AiType, Consent, Jurisdiction, LicenseRecord, LineageFormat, SectionMap,
    SyntheticLineageRequirement, DEFAULT_LICENSE_VERSION, ENFORCEMENT, GOVERNING_LAW,
};
pub use lineage::{LineageTag, OriginalWork};
pub use manifest::{AiBoundaries, DefaultConsent, ManifestRecord};
pub use report::{
    CheckSummary, ComplianceReport, ComplianceVerdict, CrossCheck, LicenseCheck, LicenseSummary,
    ManifestCheck, TagCheck,
};
