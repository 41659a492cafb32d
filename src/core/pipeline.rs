use crate::core::filter::filter_comments;
use crate::core::formatter::format_report;
use crate::core::ordering::sort_comments;
use crate::core::parser::parse_comment;
use crate::core::{BoardPayload, ConfigProvider, Pipeline, Report, Storage};
use crate::utils::error::{ReportError, Result};
use reqwest::Client;
use url::Url;

/// Fetches a board's comment actions and turns the ones for `report_date` into a report.
pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
    report_date: String,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C, report_date: String) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
            report_date,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.txt", self.report_date)
    }

    fn board_url(&self) -> Result<Url> {
        let url = Url::parse(&format!(
            "{}/b/{}.json",
            self.config.api_base(),
            self.config.board_id()
        ))?;
        Ok(url)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<BoardPayload> {
        let url = self.board_url()?;

        // 憑證不寫進日誌
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("key", self.config.api_key()),
                ("token", self.config.api_token()),
                ("fields", ""),
                ("actions", "commentCard"),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ReportError::DataUnavailable {
                message: format!("board API responded with {}", status),
            });
        }

        let body = response.text().await?;
        let payload: BoardPayload = serde_json::from_str(&body)?;
        Ok(payload)
    }

    async fn transform(&self, payload: BoardPayload) -> Result<Report> {
        let comments = payload.comments();
        let recent = filter_comments(comments.as_deref(), &self.report_date)?;
        tracing::debug!(
            "{} comments mention {}",
            recent.len(),
            self.report_date
        );

        let parsed: Vec<_> = recent
            .into_iter()
            .map(|comment| parse_comment(comment, self.config.sections()))
            .collect();

        let skipped = parsed.iter().filter(|entry| entry.is_none()).count();
        if skipped > 0 {
            tracing::debug!("Skipped {} comments without a configured section", skipped);
        }

        let ordered = sort_comments(parsed);
        Ok(format_report(&self.report_date, &ordered))
    }

    async fn load(&self, report: Report) -> Result<String> {
        let file_name = self.file_name();
        let content = report.to_string();

        tracing::debug!("Writing report ({} bytes) to {}", content.len(), file_name);
        self.storage.write_file(&file_name, content.as_bytes()).await?;

        Ok(file_name)
    }
}
