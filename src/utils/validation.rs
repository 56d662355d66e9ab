use crate::domain::country::CountryCode;
use crate::utils::error::{PostalError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 國碼必須完全符合支援清單（大小寫敏感）
pub fn validate_country_code(code: &str) -> Result<CountryCode> {
    code.parse::<CountryCode>()
}

pub fn validate_optional_country_code(code: Option<&str>) -> Result<()> {
    if let Some(code) = code {
        validate_country_code(code)?;
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PostalError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PostalError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PostalError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
