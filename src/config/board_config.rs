use crate::core::sections::duplicate_card_ids;
use crate::domain::model::SectionConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::date::DEFAULT_DATE_FORMAT;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_required_field, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_API_BASE: &str = "https://trello.com";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Contents of `config.json` (or a TOML file with the same keys).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    #[serde(default, alias = "board_id")]
    pub board_id: Option<String>,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default, alias = "date_format")]
    pub date_format: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default, alias = "api_base")]
    pub api_base: Option<String>,
}

impl BoardConfig {
    /// 從檔案載入配置，`.toml` 以 TOML 解析，其餘視為 JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(serde_json::from_str(&processed)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| ReportError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRELLO_TOKEN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Validates and converts into settings the pipeline can use directly.
    pub fn resolve(self) -> Result<ReportSettings> {
        self.validate()?;

        let api_base = self.api_base().trim_end_matches('/').to_string();
        let board_id = validate_required_field("boardId", &self.board_id)?.to_string();
        let api_key = validate_required_field("auth.key", &self.auth.key)?.to_string();
        let api_token = validate_required_field("auth.token", &self.auth.token)?.to_string();

        Ok(ReportSettings {
            api_base,
            board_id,
            api_key,
            api_token,
            sections: self.sections,
        })
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("boardId", &self.board_id)?;
        validate_required_field("auth.key", &self.auth.key)?;
        validate_required_field("auth.token", &self.auth.token)?;
        validate_url("apiBase", self.api_base())?;

        for card_id in duplicate_card_ids(&self.sections) {
            tracing::warn!(
                "⚠️ Card {} is configured in more than one section, only the first is used",
                card_id
            );
        }

        if self.sections.is_empty() {
            tracing::warn!("⚠️ No sections configured, the report will be empty");
        }

        Ok(())
    }
}

/// Validated configuration handed to the report pipeline.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub api_base: String,
    pub board_id: String,
    pub api_key: String,
    pub api_token: String,
    pub sections: Vec<SectionConfig>,
}

impl ConfigProvider for ReportSettings {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn board_id(&self) -> &str {
        &self.board_id
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn sections(&self) -> &[SectionConfig] {
        &self.sections
    }
}
