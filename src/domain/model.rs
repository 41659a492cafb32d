use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// The `data` object of a board action: comment text plus the card it sits on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub card: Option<Card>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardAction {
    #[serde(default)]
    pub data: RawComment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardPayload {
    #[serde(default)]
    pub actions: Option<Vec<BoardAction>>,
}

impl BoardPayload {
    /// Comment records of the payload, or `None` when the response has no action list.
    pub fn comments(self) -> Option<Vec<RawComment>> {
        self.actions
            .map(|actions| actions.into_iter().map(|action| action.data).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    #[serde(alias = "card_id")]
    pub card_id: String,
    pub order: i64,
    #[serde(default, alias = "has_numerical_prefix")]
    pub has_numerical_prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedComment {
    pub order: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.title, self.body)
    }
}
