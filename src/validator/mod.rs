pub mod advanced;
pub mod lineage;
pub mod localization;
pub mod schema;
pub mod signature;

pub use advanced::{validate_advanced, AdvancedSchema};
pub use lineage::{parse_lineage_tag, validate_lineage_tag};
pub use localization::check_localization;
pub use schema::{SchemaKind, SchemaValidator};
pub use signature::{hash_file, sha256_hex, verify_signature};
