//! Insight card model and the lenient extraction contract for model output.
//!
//! The model is asked for `{"theme", "quotes", "sentiment"}` objects but nothing
//! guarantees it complies. Extraction never rejects a card: a missing or mistyped
//! field becomes `None`/empty and the evaluator decides what counts as
//! well-formed.

use serde_json::Value;
use std::str::FromStr;

/// Shown in place of a missing theme or sentiment
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightCard {
    pub theme: Option<String>,
    pub quotes: Vec<String>,
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("unrecognized sentiment '{}'", other)),
        }
    }
}

impl InsightCard {
    pub fn new(theme: impl Into<String>, quotes: Vec<String>, sentiment: Option<&str>) -> Self {
        Self {
            theme: Some(theme.into()),
            quotes,
            sentiment: sentiment.map(String::from),
        }
    }

    /// Build a card from one element of the model's JSON array.
    ///
    /// Non-object elements yield an empty card. A bare string in `quotes` is
    /// treated as a single quote; non-string quote entries are dropped.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let theme = obj.get("theme").and_then(Value::as_str).map(String::from);
        let quotes = match obj.get("quotes") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
            Some(Value::String(single)) => vec![single.clone()],
            _ => Vec::new(),
        };
        let sentiment = obj
            .get("sentiment")
            .and_then(Value::as_str)
            .map(String::from);
        Self {
            theme,
            quotes,
            sentiment,
        }
    }

    /// Theme present and non-empty, and at least one quote
    pub fn is_well_formed(&self) -> bool {
        self.theme.as_deref().is_some_and(|t| !t.is_empty()) && !self.quotes.is_empty()
    }

    /// Parsed sentiment; `None` when absent or not one of the three labels
    pub fn sentiment_kind(&self) -> Option<Sentiment> {
        self.sentiment.as_deref().and_then(|s| s.parse().ok())
    }

    /// A sentiment string that is present but not positive/negative/neutral
    pub fn has_unrecognized_sentiment(&self) -> bool {
        self.sentiment.is_some() && self.sentiment_kind().is_none()
    }

    pub fn theme_or_placeholder(&self) -> &str {
        self.theme.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn sentiment_or_placeholder(&self) -> &str {
        self.sentiment.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn joined_quotes(&self) -> String {
        self.quotes.join("\n")
    }
}
