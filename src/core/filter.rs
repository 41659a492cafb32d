use crate::domain::model::RawComment;
use crate::utils::error::{ReportError, Result};

/// Keeps the comments whose text mentions `report_date`, in input order.
///
/// `None` means the API response carried no action list at all, which is
/// different from an empty list.
pub fn filter_comments<'a>(
    comments: Option<&'a [RawComment]>,
    report_date: &str,
) -> Result<Vec<&'a RawComment>> {
    let comments = comments.ok_or_else(|| ReportError::DataUnavailable {
        message: "board response has no actions".to_string(),
    })?;

    Ok(comments
        .iter()
        .filter(|comment| {
            comment
                .text
                .as_deref()
                .is_some_and(|text| text.contains(report_date))
        })
        .collect())
}
