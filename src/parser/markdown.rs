use crate::models::SectionMap;
use pulldown_cmark::{Event, Options, Parser, Tag};

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Split a Markdown document into heading → body text.
///
/// Every top-level heading opens a section keyed by its trimmed source text,
/// inline markup included. Each following top-level paragraph is appended
/// to it verbatim with a trailing newline. Heading
/// levels are not nested, paragraphs inside lists, quotes or tables are
/// skipped, and anything before the first heading is dropped. A repeated
/// heading starts its section over.
///
/// # Example
/// ```
/// use palimpsest::parser::parse_sections;
/// let sections = parse_sections("preamble\n\n## Scope\n\nApplies to all works.\n");
/// assert_eq!(sections["Scope"], "Applies to all works.\n");
/// assert_eq!(sections.len(), 1);
/// ```
pub fn parse_sections(markdown: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<String> = None;
    let mut depth = 0usize;

    for (event, range) in Parser::new_ext(markdown, markdown_options()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    match tag {
                        Tag::Heading { .. } => {
                            let name = heading_key(&markdown[range]);
                            sections.insert(name.clone(), String::new());
                            current = Some(name);
                        }
                        Tag::Paragraph => {
                            if let Some(body) = current.as_ref().and_then(|s| sections.get_mut(s)) {
                                body.push_str(markdown[range].trim_end());
                                body.push('\n');
                            }
                        }
                        _ => {}
                    }
                }
                depth += 1;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    sections
}

/// Heading source with its markers removed, inline markup left as written
fn heading_key(source: &str) -> String {
    let mut lines: Vec<&str> = source.trim_end().lines().collect();
    if let Some(text) = lines.first().and_then(|line| atx_text(line.trim_start())) {
        return text.to_string();
    }

    // Setext: drop the underline
    let underline = |line: &&str| {
        let line = line.trim();
        !line.is_empty() && (line.chars().all(|c| c == '=') || line.chars().all(|c| c == '-'))
    };
    if lines.len() > 1 && lines.last().is_some_and(underline) {
        lines.pop();
    }
    lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of an ATX heading line, without the opening and optional closing `#` runs
fn atx_text(line: &str) -> Option<&str> {
    let level = line.len() - line.trim_start_matches('#').len();
    if !(1..=6).contains(&level) {
        return None;
    }

    let rest = &line[level..];
    if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
        return None;
    }

    let rest = rest.trim();
    let open = rest.trim_end_matches('#');
    if open.is_empty() || open.ends_with([' ', '\t']) {
        Some(open.trim_end())
    } else {
        Some(rest)
    }
}
