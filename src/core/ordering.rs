use crate::domain::model::ParsedComment;

/// Drops skipped entries and stable-sorts the rest by ascending `order`.
pub fn sort_comments(comments: Vec<Option<ParsedComment>>) -> Vec<ParsedComment> {
    let mut ordered: Vec<ParsedComment> = comments.into_iter().flatten().collect();
    ordered.sort_by_key(|comment| comment.order);
    ordered
}
