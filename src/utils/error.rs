use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostalError {
    #[error("Invalid country code: {code}")]
    InvalidCountryCode { code: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PostalError {
    pub fn invalid_country_code(code: impl Into<String>) -> Self {
        Self::InvalidCountryCode { code: code.into() }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidCountryCode { code } => {
                format!("'{}' is not a supported country code", code)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::CsvError(e) => format!("Could not parse the CSV input: {}", e),
            Self::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValue { field, value, .. } => {
                format!("Configuration field '{}' has an invalid value '{}'", field, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidCountryCode { .. } => {
                "Use an uppercase ISO 3166-1 alpha-2 code, see --list-countries".to_string()
            }
            Self::IoError(_) => "Check that the path exists and is readable".to_string(),
            Self::CsvError(_) => {
                "The CSV file needs a header row with a 'postal_code' column and an optional 'country_code' column"
                    .to_string()
            }
            Self::SerializationError(_) => "Try --format text or --format csv".to_string(),
            Self::ConfigError { .. } => "Check the TOML file syntax".to_string(),
            Self::InvalidConfigValue { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PostalError>;
