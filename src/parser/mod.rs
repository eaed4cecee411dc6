pub mod markdown;
pub mod metadata;
pub mod xml;

pub use markdown::parse_sections;
pub use metadata::{extract_license_metadata, extract_version, parse_license};
pub use xml::{xml_to_json, TagParseError};
