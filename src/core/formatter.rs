use crate::domain::country::CountryCode;
use crate::utils::error::Result;

/// Trim, uppercase and drop everything that is not `A-Z` or `0-9`.
pub fn clean(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Clean `postal_code` and, when a country is given, apply its layout.
///
/// Without a country the cleaned code is returned as is. A country code that
/// is not in [`CountryCode::ALL`] (the match is case-sensitive) fails with
/// [`PostalError::InvalidCountryCode`](crate::PostalError::InvalidCountryCode).
///
/// ```
/// assert_eq!(postal_format::format("12345", Some("CZ")).unwrap(), "123 45");
/// assert_eq!(postal_format::format("sw1a1aa", Some("GB")).unwrap(), "SW1A 1AA");
/// assert_eq!(postal_format::format(" 12345 ", None).unwrap(), "12345");
/// assert!(postal_format::format("12345", Some("XX")).is_err());
/// ```
pub fn format(postal_code: &str, country_code: Option<&str>) -> Result<String> {
    let cleaned = clean(postal_code);

    let Some(code) = country_code else {
        return Ok(cleaned);
    };

    let country: CountryCode = code.parse()?;
    let formatted = country.format_postal_code(&cleaned);
    tracing::debug!(country = %country, cleaned = %cleaned, formatted = %formatted, "Formatted postal code");

    Ok(formatted)
}

/// Typed variant of [`format`] for callers that already hold a [`CountryCode`].
pub fn format_with(postal_code: &str, country: CountryCode) -> String {
    country.format_postal_code(postal_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PostalError;

    #[test]
    fn test_clean() {
        assert_eq!(clean("  sw1a 1aa "), "SW1A1AA");
        assert_eq!(clean("12-345"), "12345");
        assert_eq!(clean("a.b/c_d"), "ABCD");
        assert_eq!(clean("   "), "");
        assert_eq!(clean(""), "");
        // 非 ASCII 字元直接移除
        assert_eq!(clean("straße 1"), "STRAE1");
        assert_eq!(clean("１２３"), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        for raw in ["  sw1a 1aa ", "AD-500", "ü12", "", "1234 ab", "\t\nX\r"] {
            let once = clean(raw);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn test_format_without_country_returns_cleaned() {
        assert_eq!(format("12345", None).unwrap(), "12345");
        assert_eq!(format(" sw1a-1aa ", None).unwrap(), "SW1A1AA");
        assert_eq!(format("", None).unwrap(), "");
    }

    #[test]
    fn test_format_unknown_country() {
        for code in ["XX", "", "gb", "GBR", "UK"] {
            match format("12345", Some(code)) {
                Err(PostalError::InvalidCountryCode { code: reported }) => {
                    assert_eq!(reported, code)
                }
                other => panic!("unexpected result for {:?}: {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_format_with_matches_format() {
        for country in CountryCode::ALL {
            assert_eq!(
                format_with("1234ab", country),
                format("1234ab", Some(country.as_str())).unwrap()
            );
        }
    }
}
