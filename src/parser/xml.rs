use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value as JsonValue};

/// Errors raised while turning a lineage tag into a JSON tree
#[derive(Debug, thiserror::Error)]
pub enum TagParseError {
    #[error("{0}")]
    Xml(String),

    #[error("Non-whitespace text outside the root element")]
    TextOutsideRoot,

    #[error("Multiple root elements")]
    MultipleRoots,

    #[error("Unexpected closing tag")]
    UnexpectedClose,

    #[error("Unclosed element: {0}")]
    Unclosed(String),

    #[error("No root element")]
    NoRoot,

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Element under construction while walking the event stream
struct ElementNode {
    name: String,
    attrs: Map<String, JsonValue>,
    children: Map<String, JsonValue>,
    text: String,
}

impl ElementNode {
    fn open(start: &BytesStart<'_>) -> Result<Self, TagParseError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attrs = Map::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| TagParseError::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| TagParseError::Xml(e.to_string()))?;
            attrs.insert(key, JsonValue::String(value.into_owned()));
        }

        Ok(Self {
            name,
            attrs,
            children: Map::new(),
            text: String::new(),
        })
    }

    /// Repeated child names collapse into an array
    fn add_child(&mut self, name: String, value: JsonValue) {
        match self.children.get_mut(&name) {
            Some(JsonValue::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = JsonValue::Array(vec![first, value]);
            }
            None => {
                self.children.insert(name, value);
            }
        }
    }

    fn into_value(self) -> (String, JsonValue) {
        let text = self.text.trim();
        if self.attrs.is_empty() && self.children.is_empty() {
            return (self.name, JsonValue::String(text.to_string()));
        }

        let mut obj = Map::new();
        if !self.attrs.is_empty() {
            obj.insert("$".to_string(), JsonValue::Object(self.attrs));
        }
        if !text.is_empty() {
            obj.insert("_".to_string(), JsonValue::String(text.to_string()));
        }
        obj.extend(self.children);
        (self.name, JsonValue::Object(obj))
    }
}

/// Convert an XML document into the JSON shape it would have been written in.
///
/// The root element becomes the only top-level key. Attributes are grouped
/// under `$`, text-only elements become strings, text next to attributes or
/// children is kept under `_`, repeated siblings become arrays and empty
/// elements become `""`. Text is trimmed.
///
/// # Example
/// ```
/// use palimpsest::parser::xml_to_json;
/// let value = xml_to_json(r#"<synthetic_lineage><original_work title="Dawn"/></synthetic_lineage>"#).unwrap();
/// assert_eq!(value["synthetic_lineage"]["original_work"]["$"]["title"], "Dawn");
/// ```
pub fn xml_to_json(content: &str) -> Result<JsonValue, TagParseError> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<ElementNode> = Vec::new();
    let mut root: Option<(String, JsonValue)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| TagParseError::Xml(e.to_string()))?;

        match event {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(TagParseError::MultipleRoots);
                }
                stack.push(ElementNode::open(&start)?);
            }
            Event::Empty(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(TagParseError::MultipleRoots);
                }
                let node = ElementNode::open(&start)?;
                close_element(node, &mut stack, &mut root);
            }
            Event::End(_) => {
                let node = stack.pop().ok_or(TagParseError::UnexpectedClose)?;
                close_element(node, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| TagParseError::Xml(e.to_string()))?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&bytes))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(TagParseError::Unclosed(open.name.clone()));
    }

    let (name, value) = root.ok_or(TagParseError::NoRoot)?;
    let mut doc = Map::new();
    doc.insert(name, value);
    Ok(JsonValue::Object(doc))
}

fn close_element(
    node: ElementNode,
    stack: &mut [ElementNode],
    root: &mut Option<(String, JsonValue)>,
) {
    let (name, value) = node.into_value();
    match stack.last_mut() {
        Some(parent) => parent.add_child(name, value),
        None => *root = Some((name, value)),
    }
}

fn push_text(stack: &mut [ElementNode], text: &str) -> Result<(), TagParseError> {
    match stack.last_mut() {
        Some(top) => {
            top.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(TagParseError::TextOutsideRoot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attributes_under_dollar() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<synthetic_lineage>
  <original_work title="Dawn" creator="A. Author" license="Palimpsest v0.3"/>
</synthetic_lineage>"#;

        let value = xml_to_json(xml).unwrap();
        assert_eq!(
            value,
            json!({
                "synthetic_lineage": {
                    "original_work": {
                        "$": { "title": "Dawn", "creator": "A. Author", "license": "Palimpsest v0.3" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_text_only_and_empty_elements() {
        let value = xml_to_json("<work><title>Dawn</title><notes/></work>").unwrap();
        assert_eq!(value, json!({ "work": { "title": "Dawn", "notes": "" } }));
    }

    #[test]
    fn test_empty_root_is_empty_string() {
        let value = xml_to_json("<synthetic_lineage></synthetic_lineage>").unwrap();
        assert_eq!(value, json!({ "synthetic_lineage": "" }));
    }

    #[test]
    fn test_text_with_attributes() {
        let value = xml_to_json(r#"<quote lang="en">  Moments we cross  </quote>"#).unwrap();
        assert_eq!(
            value,
            json!({ "quote": { "$": { "lang": "en" }, "_": "Moments we cross" } })
        );
    }

    #[test]
    fn test_repeated_children_become_array() {
        let value = xml_to_json("<lineage><source>a</source><source>b</source><source>c</source></lineage>")
            .unwrap();
        assert_eq!(value, json!({ "lineage": { "source": ["a", "b", "c"] } }));
    }

    #[test]
    fn test_entities_unescaped() {
        let value = xml_to_json(r#"<w title="Salt &amp; Stone">R&amp;D</w>"#).unwrap();
        assert_eq!(value["w"]["$"]["title"], "Salt & Stone");
        assert_eq!(value["w"]["_"], "R&D");
    }

    #[test]
    fn test_cdata_is_text() {
        let value = xml_to_json("<w><![CDATA[<raw>]]></w>").unwrap();
        assert_eq!(value, json!({ "w": "<raw>" }));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(xml_to_json("").is_err());
        assert!(xml_to_json("not xml at all").is_err());
        assert!(xml_to_json("<a><b></a>").is_err());
        assert!(xml_to_json("<a>").is_err());
        assert!(matches!(
            xml_to_json("<a/><b/>"),
            Err(TagParseError::MultipleRoots)
        ));
    }
}
