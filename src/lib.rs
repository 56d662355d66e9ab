pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::batch::BatchFormatter;
pub use crate::core::formatter::{clean, format, format_with};
pub use crate::domain::country::CountryCode;
pub use crate::domain::model::{FormattedRecord, OutputFormat, PostalRecord};
pub use crate::utils::error::{PostalError, Result};
