use crate::domain::model::SectionConfig;
use std::collections::HashSet;

/// First section configured for `card_id`.
pub fn resolve_section<'a>(card_id: &str, sections: &'a [SectionConfig]) -> Option<&'a SectionConfig> {
    sections.iter().find(|section| section.card_id == card_id)
}

/// Card ids that appear in more than one section, in first-seen order.
pub fn duplicate_card_ids(sections: &[SectionConfig]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for section in sections {
        let id = section.card_id.as_str();
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }

    duplicates
}
