use crate::core::link::humanize_link;
use crate::core::sections::resolve_section;
use crate::domain::model::{ParsedComment, RawComment, SectionConfig};

pub const NOT_STARTED: &str = "Not yet started";

const BODY_SEPARATOR: &str = "\n\n";
const LIST_MARKER: &str = "- ";
const NUMERICAL_PREFIX_LEN: usize = 3;

/// Parses one comment into a report entry.
///
/// Returns `None` when the comment has no card or the card has no configured
/// section; such comments are left out of the report.
pub fn parse_comment(comment: &RawComment, sections: &[SectionConfig]) -> Option<ParsedComment> {
    let card = comment.card.as_ref()?;
    let section = resolve_section(&card.id, sections)?;

    let title = if section.has_numerical_prefix {
        strip_numerical_prefix(&card.name)
    } else {
        card.name.clone()
    };

    let body = comment_body(comment.text.as_deref().unwrap_or_default());

    Some(ParsedComment {
        order: section.order,
        text: format!("{}\n{}", title, format_list(body)),
    })
}

/// Drops the fixed-width numbering in front of a card name ("1. ", "12.").
///
/// Always removes exactly three characters, whatever they are.
pub fn strip_numerical_prefix(name: &str) -> String {
    name.chars().skip(NUMERICAL_PREFIX_LEN).collect()
}

/// Everything after the first blank line, or the placeholder when there is none.
pub fn comment_body(text: &str) -> &str {
    match text.find(BODY_SEPARATOR) {
        Some(idx) => &text[idx + BODY_SEPARATOR.len()..],
        None => NOT_STARTED,
    }
}

/// Re-emits the body as `- ` items, humanizing items that hold a link.
///
/// Item text is kept verbatim, including any trailing newline, so items are
/// concatenated without an added separator.
pub fn format_list(body: &str) -> String {
    body.split(LIST_MARKER)
        .filter(|item| !item.is_empty())
        .map(|item| {
            if item.contains("http") {
                format!("{}{}", LIST_MARKER, humanize_link(item))
            } else {
                format!("{}{}", LIST_MARKER, item)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Card;

    fn sections() -> Vec<SectionConfig> {
        vec![
            SectionConfig {
                card_id: "numbered".to_string(),
                order: 2,
                has_numerical_prefix: true,
            },
            SectionConfig {
                card_id: "plain".to_string(),
                order: 1,
                has_numerical_prefix: false,
            },
        ]
    }

    fn comment(card_id: &str, name: &str, text: &str) -> RawComment {
        RawComment {
            text: Some(text.to_string()),
            card: Some(Card {
                id: card_id.to_string(),
                name: name.to_string(),
            }),
        }
    }

    #[test]
    fn test_numerical_prefix_strips_three_chars() {
        assert_eq!(strip_numerical_prefix("1. Build feature"), "uild feature");
        assert_eq!(strip_numerical_prefix("12.Build"), "Build");
        assert_eq!(strip_numerical_prefix("ab"), "");
    }

    #[test]
    fn test_parse_numbered_section() {
        let parsed = parse_comment(
            &comment("numbered", "1. Build feature", "03-07-2024\n\n- done"),
            &sections(),
        )
        .unwrap();

        assert_eq!(parsed.order, 2);
        assert_eq!(parsed.text, "uild feature\n- done");
    }

    #[test]
    fn test_parse_plain_section_keeps_full_title() {
        let parsed = parse_comment(
            &comment("plain", "Blockers", "Intro text\n\n- Task one\n- Task two"),
            &sections(),
        )
        .unwrap();

        assert_eq!(parsed.order, 1);
        assert_eq!(parsed.text, "Blockers\n- Task one\n- Task two");
    }

    #[test]
    fn test_list_markers_are_not_separated() {
        assert_eq!(format_list("- Task one- Task two"), "- Task one- Task two");
        assert_eq!(format_list("Intro - tail"), "- Intro - tail");
    }

    #[test]
    fn test_link_items_are_humanized() {
        let body = comment_body("x\n\n- https://trello.com/c/abc/3-write-tests\n- Review");
        assert_eq!(format_list(body), "- Write tests\n- Review");
    }

    #[test]
    fn test_missing_separator_uses_placeholder() {
        let parsed = parse_comment(&comment("plain", "Blockers", "03-07-2024 nothing"), &sections()).unwrap();
        assert_eq!(parsed.text, "Blockers\n- Not yet started");
    }

    #[test]
    fn test_only_first_separator_splits() {
        assert_eq!(comment_body("a\n\nb\n\nc"), "b\n\nc");
    }

    #[test]
    fn test_skips_comment_without_card() {
        let raw = RawComment {
            text: Some("03-07-2024\n\n- x".to_string()),
            card: None,
        };
        assert!(parse_comment(&raw, &sections()).is_none());
    }

    #[test]
    fn test_skips_unconfigured_card() {
        let raw = comment("unknown", "Other", "03-07-2024\n\n- x");
        assert!(parse_comment(&raw, &sections()).is_none());
    }
}
