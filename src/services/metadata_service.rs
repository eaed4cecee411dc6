//! Metadata service - JSON-LD and HTML meta tags for licensed works

use crate::models::{Language, WorkMetadata};
use crate::Result;
use serde_json::{json, Value as JsonValue};

fn property(name: &str, value: &str) -> JsonValue {
    json!({ "@type": "PropertyValue", "name": name, "value": value })
}

fn agi_consent_text(required: bool) -> &'static str {
    if required {
        "Explicit consent required for AI training. See license for details."
    } else {
        "Consent granted with attribution. See license for details."
    }
}

/// schema.org `CreativeWork` describing a Palimpsest-licensed work
pub fn jsonld_value(work: &WorkMetadata) -> JsonValue {
    let mut author = json!({
        "@type": "Person",
        "name": work.author_name.as_deref().unwrap_or("[Author Name]"),
    });
    if let Some(url) = &work.author_url {
        author["url"] = json!(url);
    }

    let mut properties = vec![property("Palimpsest:Version", &work.version)];
    if let Some(lineage) = &work.emotional_lineage {
        properties.push(property("Palimpsest:EmotionalLineage", lineage));
    }
    properties.push(property(
        "Palimpsest:AGIConsent",
        agi_consent_text(work.agi_consent_required),
    ));
    properties.push(property(
        "Palimpsest:MetadataPreservation",
        "Mandatory. Removal or modification constitutes license breach.",
    ));

    json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "name": work.title.as_deref().unwrap_or("[Work Title]"),
        "author": author,
        "license": work.license_url,
        "usageInfo": "https://palimpsestlicense.org",
        "additionalProperty": properties,
    })
}

pub fn generate_jsonld(work: &WorkMetadata) -> Result<String> {
    Ok(serde_json::to_string_pretty(&jsonld_value(work))?)
}

/// HTML `<meta>` tags, one per line
pub fn generate_html_meta(work: &WorkMetadata) -> String {
    let rights = match work.language {
        Language::Nl => format!(
            "Dit werk is beschermd onder de Palimpsest Licentie v{}",
            work.version
        ),
        Language::En => format!(
            "This work is protected under the Palimpsest License v{}",
            work.version
        ),
    };
    let license_type = format!("Palimpsest-{}", work.version);
    let consent = work.agi_consent_required.to_string();

    let mut tags = vec![
        meta("name", "license", &work.license_url),
        meta("name", "license-type", &license_type),
        meta("property", "og:license", &work.license_url),
        meta("name", "dcterms.license", &work.license_url),
        meta("name", "dcterms.rights", &rights),
        meta("name", "palimpsest:version", &work.version),
        meta("name", "palimpsest:agi-consent", &consent),
    ];

    if let Some(author) = &work.author_name {
        tags.push(meta("name", "author", author));
        tags.push(meta("name", "dcterms.creator", author));
    }

    if let Some(lineage) = &work.emotional_lineage {
        tags.push(meta("name", "palimpsest:emotional-lineage", lineage));
    }

    tags.join("\n")
}

fn meta(attr: &str, key: &str, content: &str) -> String {
    format!(r#"<meta {}="{}" content="{}">"#, attr, key, escape_attr(content))
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
