//! Report date handling.
//!
//! `dateFormat` in the config file uses moment-style tokens (`MM-DD-YYYY`),
//! which are translated to a chrono strftime pattern here.

use crate::utils::error::{ReportError, Result};
use chrono::{Local, NaiveDate};
use std::fmt::Write;

// Longest tokens first so `MMMM` wins over `MM`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
];

pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Translates a moment-style format into a strftime pattern.
///
/// A format that already contains `%` is returned unchanged.
pub fn to_strftime(format: &str) -> String {
    if format.contains('%') {
        return format.to_string();
    }

    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        for (token, pattern) in TOKENS {
            if let Some(stripped) = rest.strip_prefix(token) {
                out.push_str(pattern);
                rest = stripped;
                continue 'outer;
            }
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Formats `date` with a `dateFormat` value.
///
/// Patterns chrono cannot render for a plain date (a stray `%`, time fields)
/// are rejected instead of producing partial output.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    let pattern = to_strftime(format);
    let mut out = String::new();

    write!(out, "{}", date.format(&pattern)).map_err(|_| ReportError::InvalidConfigValue {
        field: "dateFormat".to_string(),
        value: format.to_string(),
        reason: "not a valid date format".to_string(),
    })?;

    Ok(out)
}

/// The date used when none is given on the command line.
pub fn today(format: &str) -> Result<String> {
    format_date(Local::now().date_naive(), format)
}

/// Report date from the command line, falling back to today when absent or empty.
pub fn resolve_report_date(arg: Option<&str>, format: &str) -> Result<String> {
    match arg {
        Some(date) if !date.is_empty() => Ok(date.to_string()),
        _ => today(format),
    }
}
