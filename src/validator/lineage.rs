use crate::models::{LineageFormat, LineageTag, TagCheck};
use crate::parser::{xml_to_json, TagParseError};
use serde_json::Value as JsonValue;

/// Parse tag content in the given format
pub fn parse_lineage_tag(content: &str, format: LineageFormat) -> Result<LineageTag, TagParseError> {
    let value = match format {
        LineageFormat::Xml => xml_to_json(content)?,
        LineageFormat::Json => serde_json::from_str(content)?,
    };
    Ok(LineageTag(value))
}

/// Parse a lineage tag and check it names its original work.
///
/// Presence only: `synthetic_lineage.original_work` must exist and be
/// non-empty. Attribute values are not inspected.
pub fn validate_lineage_tag(content: &str, format: LineageFormat) -> TagCheck {
    let tag = match parse_lineage_tag(content, format) {
        Ok(tag) => tag,
        Err(e) => return TagCheck::error(format!("Tag parse error: {}", e)),
    };

    let valid = tag.original_work_node().map_or(false, is_truthy);
    TagCheck {
        valid,
        errors: if valid {
            Vec::new()
        } else {
            vec!["Missing required fields (original_work)".to_string()]
        },
        data: Some(tag),
    }
}

/// Emptiness as a loosely typed tag would judge it
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
