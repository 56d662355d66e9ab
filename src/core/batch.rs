use crate::core::formatter;
use crate::domain::model::{FormattedRecord, OutputFormat, PostalRecord};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Read, Write};

/// Formats many postal codes at once; a bad row never aborts the batch.
#[derive(Debug, Clone, Default)]
pub struct BatchFormatter {
    default_country: Option<String>,
}

impl BatchFormatter {
    pub fn new(default_country: Option<String>) -> Self {
        Self { default_country }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.default_country().map(str::to_string))
    }

    pub fn default_country(&self) -> Option<&str> {
        self.default_country.as_deref()
    }

    pub fn format_record(&self, record: &PostalRecord) -> FormattedRecord {
        // 記錄本身的國碼優先，其次才是預設國碼
        let country = record
            .country_code
            .as_deref()
            .or(self.default_country.as_deref());

        match formatter::format(&record.postal_code, country) {
            Ok(formatted) => FormattedRecord {
                postal_code: record.postal_code.clone(),
                country_code: country.map(str::to_string),
                formatted: Some(formatted),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Skipping '{}': {}", record.postal_code, e);
                FormattedRecord {
                    postal_code: record.postal_code.clone(),
                    country_code: country.map(str::to_string),
                    formatted: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn format_all(&self, records: &[PostalRecord]) -> Vec<FormattedRecord> {
        let results: Vec<FormattedRecord> =
            records.iter().map(|r| self.format_record(r)).collect();

        let failed = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            "Formatted {} postal codes ({} failed)",
            results.len() - failed,
            failed
        );

        results
    }
}

/// Read `postal_code[,country_code]` rows; the header row is required.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<PostalRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: PostalRecord = row?;
        records.push(record);
    }

    tracing::debug!("Read {} records from CSV", records.len());
    Ok(records)
}

/// One postal code per line; blank lines are skipped.
///
/// Lines are decoded lossily, invalid UTF-8 is cleaned away later instead of
/// failing the whole batch.
pub fn records_from_lines<R: BufRead>(reader: R) -> Result<Vec<PostalRecord>> {
    let mut records = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        records.push(PostalRecord::new(line, None));
    }
    Ok(records)
}

pub fn write_output<W: Write>(
    records: &[FormattedRecord],
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                match (&record.formatted, &record.error) {
                    (Some(formatted), _) => writeln!(writer, "{}", formatted)?,
                    (None, Some(error)) => writeln!(writer, "error: {}", error)?,
                    (None, None) => writeln!(writer)?,
                }
            }
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut writer);
            for record in records {
                csv_writer.serialize(record)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
