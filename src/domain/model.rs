use crate::domain::country::CountryCode;
use serde::{Deserialize, Serialize};

/// One input row of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRecord {
    pub postal_code: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub country_code: Option<String>,
}

impl PostalRecord {
    pub fn new(postal_code: impl Into<String>, country_code: Option<&str>) -> Self {
        Self {
            postal_code: postal_code.into(),
            country_code: country_code.map(str::to_string),
        }
    }
}

/// One output row of a batch; exactly one of `formatted` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRecord {
    pub postal_code: String,
    pub country_code: Option<String>,
    pub formatted: Option<String>,
    pub error: Option<String>,
}

impl FormattedRecord {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A row of `--list-countries` output.
#[derive(Debug, Clone, Serialize)]
pub struct CountryInfo {
    pub code: CountryCode,
    pub name: &'static str,
    pub has_layout_rule: bool,
}

impl From<CountryCode> for CountryInfo {
    fn from(code: CountryCode) -> Self {
        Self {
            code,
            name: code.name(),
            has_layout_rule: code.has_layout_rule(),
        }
    }
}

// CSV 空欄位視為未提供國碼
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
