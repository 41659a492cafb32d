use crate::domain::model::{ParsedComment, Report};

pub fn report_title(report_date: &str) -> String {
    format!("1:1 Report for {}", report_date)
}

/// Builds the report: each entry is followed by a blank line.
pub fn format_report(report_date: &str, comments: &[ParsedComment]) -> Report {
    let body = comments.iter().fold(String::new(), |mut body, comment| {
        body.push_str(&comment.text);
        body.push_str("\n\n");
        body
    });

    Report {
        title: report_title(report_date),
        body,
    }
}
