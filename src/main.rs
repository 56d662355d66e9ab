use clap::Parser;
use postal_format::core::batch::{self, BatchFormatter};
use postal_format::domain::model::CountryInfo;
use postal_format::utils::{logger, validation::Validate};
use postal_format::{CliConfig, CountryCode, OutputFormat, PostalError, PostalRecord, TomlConfig};
use std::io::{self, BufReader, Write};

fn main() {
    // 參數錯誤一律以 1 結束，2 保留給格式化失敗的資料列
    let mut config = CliConfig::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file)) {
            Ok(file) => config.merge_file(&file),
            Err(e) => exit_with(&e, 1),
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e, 1);
    }

    if config.list_countries {
        if let Err(e) = list_countries(config.format.unwrap_or_default()) {
            exit_with(&e, 1);
        }
        return;
    }

    match run(&config) {
        Ok(failed) if failed > 0 => {
            tracing::warn!("{} postal codes could not be formatted", failed);
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => exit_with(&e, 1),
    }
}

/// Returns the number of rows that failed.
fn run(config: &CliConfig) -> postal_format::Result<usize> {
    let records = load_records(config)?;
    let batch = BatchFormatter::from_config(config);

    tracing::debug!(
        "Formatting {} postal codes (default country: {:?})",
        records.len(),
        batch.default_country()
    );

    let results = batch.format_all(&records);
    let stdout = io::stdout();
    batch::write_output(&results, config.format.unwrap_or_default(), stdout.lock())?;

    Ok(results.iter().filter(|r| r.is_error()).count())
}

fn load_records(config: &CliConfig) -> postal_format::Result<Vec<PostalRecord>> {
    if let Some(path) = &config.input {
        let file = std::fs::File::open(path)?;
        return batch::read_csv(BufReader::new(file));
    }

    if !config.postal_codes.is_empty() {
        return Ok(config
            .postal_codes
            .iter()
            .map(|code| PostalRecord::new(code.as_str(), None))
            .collect());
    }

    batch::records_from_lines(io::stdin().lock())
}

fn list_countries(format: OutputFormat) -> postal_format::Result<()> {
    let countries: Vec<CountryInfo> = CountryCode::ALL.into_iter().map(CountryInfo::from).collect();
    let mut out = io::stdout().lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &countries)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for country in &countries {
                writer.serialize(country)?;
            }
            writer.flush()?;
        }
        OutputFormat::Text => {
            for country in &countries {
                let marker = if country.has_layout_rule { "*" } else { " " };
                writeln!(out, "{} {} {}", country.code, marker, country.name)?;
            }
        }
    }

    Ok(())
}

fn exit_with(error: &PostalError, code: i32) -> ! {
    tracing::error!("💡 Suggestion: {}", error.recovery_suggestion());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(code);
}
