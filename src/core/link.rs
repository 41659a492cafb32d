/// Turns a list item holding a card link into readable text.
///
/// `Check https://trello.com/c/abc123/12-update-the-api-docs` becomes
/// `Update the api docs`: the last path segment is split on `-`, the leading
/// slug token is dropped and the rest is joined with spaces. Malformed links
/// degrade to whatever is left, possibly an empty string.
pub fn humanize_link(item: &str) -> String {
    let segment = match item.rfind('/') {
        Some(idx) => &item[idx + 1..],
        None => item,
    };

    let words = segment.split('-').skip(1).collect::<Vec<_>>().join(" ");
    capitalize_first(&words)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
