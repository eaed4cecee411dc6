use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Attributes identifying the original work a derivative descends from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalWork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl fmt::Display for OriginalWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.title.as_deref().unwrap_or("untitled"))?;
        if let Some(creator) = &self.creator {
            write!(f, " by {}", creator)?;
        }
        if let Some(license) = &self.license {
            write!(f, " ({})", license)?;
        }
        Ok(())
    }
}

/// A parsed synthetic lineage tag
///
/// The tag keeps its parsed tree since validation is presence-only and
/// tags may carry arbitrary extra elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineageTag(pub JsonValue);

impl LineageTag {
    pub fn synthetic_lineage(&self) -> Option<&JsonValue> {
        self.0.get("synthetic_lineage")
    }

    /// Raw `synthetic_lineage.original_work` node, if any
    pub fn original_work_node(&self) -> Option<&JsonValue> {
        self.synthetic_lineage()?.get("original_work")
    }

    /// Typed view of the original work
    ///
    /// XML attributes sit under `$`; JSON tags may put them there or directly
    /// on the node.
    pub fn original_work(&self) -> Option<OriginalWork> {
        let node = self.original_work_node()?;
        let attrs = node.get("$").unwrap_or(node);
        if !attrs.is_object() {
            return None;
        }

        let field = |key: &str| attrs.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Some(OriginalWork {
            title: field("title"),
            creator: field("creator"),
            license: field("license"),
        })
    }
}
