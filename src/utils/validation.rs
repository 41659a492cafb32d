use crate::utils::error::{ReportError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReportError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Returns the value when it is present and not blank.
///
/// Blank strings count as missing, the same way an empty `boardId` in the
/// config file does.
pub fn validate_required_field<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ReportError::MissingConfiguration {
            field: field_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("apiBase", "https://trello.com").is_ok());
        assert!(validate_url("apiBase", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("apiBase", "").is_err());
        assert!(validate_url("apiBase", "invalid-url").is_err());
        assert!(validate_url("apiBase", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "reports").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "rep\0orts").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("abc".to_string());
        assert_eq!(validate_required_field("boardId", &present).unwrap(), "abc");

        let blank = Some("  ".to_string());
        let err = validate_required_field("boardId", &blank).unwrap_err();
        assert!(matches!(err, ReportError::MissingConfiguration { ref field } if field == "boardId"));

        assert!(validate_required_field("boardId", &None).is_err());
    }
}
