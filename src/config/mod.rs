pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "postal-format")]
#[command(about = "Normalize and format European postal codes")]
pub struct CliConfig {
    /// Postal codes to format; read from stdin when none are given
    pub postal_codes: Vec<String>,

    /// ISO 3166-1 alpha-2 country code (case-sensitive, e.g. GB)
    #[arg(short, long)]
    pub country: Option<String>,

    /// CSV file with a `postal_code` column and an optional `country_code` column
    #[arg(short, long, conflicts_with = "postal_codes")]
    pub input: Option<String>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "List supported countries and exit")]
    pub list_countries: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn merge_file<C: ConfigProvider>(&mut self, file: &C) {
        if self.country.is_none() {
            self.country = file.default_country().map(str::to_string);
        }
        if self.format.is_none() {
            self.format = Some(file.output_format());
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn default_country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_optional_country_code(self.country.as_deref())?;

        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }

        Ok(())
    }
}
