use crate::models::SectionMap;

/// Compare English and Dutch sections heading by heading.
///
/// Only headings present in both documents are compared, on trimmed text.
/// A heading missing from either side is not reported, and an empty Dutch
/// section counts as missing.
pub fn check_localization(en: &SectionMap, nl: &SectionMap) -> Vec<String> {
    en.iter()
        .filter_map(|(heading, en_text)| {
            let nl_text = nl.get(heading).filter(|text| !text.is_empty())?;
            (en_text.trim() != nl_text.trim()).then(|| {
                format!("Section \"{}\" differs between English and Dutch", heading)
            })
        })
        .collect()
}
