use anyhow::Result;
use postal_format::core::batch::{self, BatchFormatter};
use postal_format::domain::ports::ConfigProvider;
use postal_format::{FormattedRecord, OutputFormat, TomlConfig};
use postal_format::utils::validation::Validate;
use std::io::{BufReader, Write};
use tempfile::{NamedTempFile, TempDir};

/// CSV 檔案 -> 批次格式化 -> CSV 輸出
#[test]
fn test_csv_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("codes.csv");
    std::fs::write(
        &input_path,
        "postal_code,country_code\n\
         sw1a1aa,GB\n\
         12345,PL\n\
         12345,\n\
         XYZ,AD\n\
         1050,XX\n",
    )?;

    let config = TomlConfig::from_toml_str("[formatter]\ndefault_country = \"CZ\"\n")?;
    config.validate()?;

    let records = batch::read_csv(BufReader::new(std::fs::File::open(&input_path)?))?;
    let results = BatchFormatter::from_config(&config).format_all(&records);

    let formatted: Vec<Option<&str>> = results.iter().map(|r| r.formatted.as_deref()).collect();
    assert_eq!(
        formatted,
        vec![Some("SW1A 1AA"), Some("12-345"), Some("123 45"), Some(""), None]
    );
    assert_eq!(results[2].country_code.as_deref(), Some("CZ"));
    assert_eq!(
        results[4].error.as_deref(),
        Some("Invalid country code: XX")
    );

    let mut out = Vec::new();
    batch::write_output(&results, OutputFormat::Csv, &mut out)?;
    let csv_output = String::from_utf8(out)?;

    assert!(csv_output.starts_with("postal_code,country_code,formatted,error\n"));
    assert!(csv_output.contains("sw1a1aa,GB,SW1A 1AA,\n"));
    assert!(csv_output.contains("1050,XX,,Invalid country code: XX\n"));

    Ok(())
}

#[test]
fn test_json_output_from_toml_settings() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(b"[formatter]\ndefault_country = \"IE\"\n\n[output]\nformat = \"json\"\n")?;

    let config = TomlConfig::from_file(config_file.path())?;
    config.validate()?;
    assert_eq!(config.output_format(), OutputFormat::Json);

    let records = batch::records_from_lines("a65f4e2\n\nd02 x285\n".as_bytes())?;
    let results = BatchFormatter::from_config(&config).format_all(&records);

    let mut out = Vec::new();
    batch::write_output(&results, config.output_format(), &mut out)?;
    let parsed: Vec<FormattedRecord> = serde_json::from_slice(&out)?;

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].formatted.as_deref(), Some("A65 F4E2"));
    assert_eq!(parsed[1].formatted.as_deref(), Some("D02 X285"));
    assert!(parsed.iter().all(|r| r.error.is_none()));

    Ok(())
}

#[test]
fn test_text_output_without_default_country() -> Result<()> {
    let records = batch::records_from_lines(" 1234 ab \nmla-1234\n".as_bytes())?;
    let results = BatchFormatter::default().format_all(&records);

    let mut out = Vec::new();
    batch::write_output(&results, OutputFormat::Text, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "1234AB\nMLA1234\n");

    Ok(())
}

#[test]
fn test_malformed_csv_is_reported() {
    let result = batch::read_csv("country_code\nGB\n".as_bytes());
    assert!(matches!(result, Err(postal_format::PostalError::CsvError(_))));
}
