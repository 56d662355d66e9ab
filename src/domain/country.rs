use crate::domain::rules;
use crate::utils::error::PostalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 3166-1 alpha-2 codes of the European countries the formatter knows.
///
/// Each variant owns its postal code layout, applied by
/// [`CountryCode::format_postal_code`]. Countries without a layout rule
/// return the cleaned code untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CountryCode {
    AD, // Andorra (AD###)
    AL, // Albania (####)
    AT, // Austria (####)
    BA, // Bosnia & Herzegovina (#####)
    BE, // Belgium (####)
    BG, // Bulgaria (####)
    CH, // Switzerland (####)
    CZ, // Czech Republic (123 45)
    DE, // Germany (#####)
    DK, // Denmark (####)
    EE, // Estonia (#####)
    ES, // Spain (#####)
    FI, // Finland (#####)
    FR, // France (#####)
    GB, // United Kingdom (SW1A 1AA)
    GR, // Greece (#####)
    HR, // Croatia (#####)
    HU, // Hungary (####)
    IE, // Ireland (A65 F4E2)
    IS, // Iceland (###)
    IT, // Italy (#####)
    LI, // Liechtenstein (####)
    LT, // Lithuania (#####)
    LU, // Luxembourg (####)
    LV, // Latvia (LV-####)
    MC, // Monaco (MC#####)
    MD, // Moldova (MD-####)
    ME, // Montenegro (#####)
    MK, // North Macedonia (####)
    MT, // Malta (AAA NNNN)
    NL, // Netherlands (1234 AB)
    NO, // Norway (####)
    PL, // Poland (12-345)
    PT, // Portugal (1234-567)
    RO, // Romania (######)
    RS, // Serbia (#####)
    SE, // Sweden (123 45)
    SI, // Slovenia (####)
    SK, // Slovakia (123 45)
    SM, // San Marino (4789#)
    TR, // Turkey (#####)
    UA, // Ukraine (#####)
    VA, // Vatican City (00120)
}

impl CountryCode {
    pub const ALL: [CountryCode; 43] = [
        Self::AD,
        Self::AL,
        Self::AT,
        Self::BA,
        Self::BE,
        Self::BG,
        Self::CH,
        Self::CZ,
        Self::DE,
        Self::DK,
        Self::EE,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::GB,
        Self::GR,
        Self::HR,
        Self::HU,
        Self::IE,
        Self::IS,
        Self::IT,
        Self::LI,
        Self::LT,
        Self::LU,
        Self::LV,
        Self::MC,
        Self::MD,
        Self::ME,
        Self::MK,
        Self::MT,
        Self::NL,
        Self::NO,
        Self::PL,
        Self::PT,
        Self::RO,
        Self::RS,
        Self::SE,
        Self::SI,
        Self::SK,
        Self::SM,
        Self::TR,
        Self::UA,
        Self::VA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AD => "AD",
            Self::AL => "AL",
            Self::AT => "AT",
            Self::BA => "BA",
            Self::BE => "BE",
            Self::BG => "BG",
            Self::CH => "CH",
            Self::CZ => "CZ",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::EE => "EE",
            Self::ES => "ES",
            Self::FI => "FI",
            Self::FR => "FR",
            Self::GB => "GB",
            Self::GR => "GR",
            Self::HR => "HR",
            Self::HU => "HU",
            Self::IE => "IE",
            Self::IS => "IS",
            Self::IT => "IT",
            Self::LI => "LI",
            Self::LT => "LT",
            Self::LU => "LU",
            Self::LV => "LV",
            Self::MC => "MC",
            Self::MD => "MD",
            Self::ME => "ME",
            Self::MK => "MK",
            Self::MT => "MT",
            Self::NL => "NL",
            Self::NO => "NO",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::RO => "RO",
            Self::RS => "RS",
            Self::SE => "SE",
            Self::SI => "SI",
            Self::SK => "SK",
            Self::SM => "SM",
            Self::TR => "TR",
            Self::UA => "UA",
            Self::VA => "VA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AD => "Andorra",
            Self::AL => "Albania",
            Self::AT => "Austria",
            Self::BA => "Bosnia and Herzegovina",
            Self::BE => "Belgium",
            Self::BG => "Bulgaria",
            Self::CH => "Switzerland",
            Self::CZ => "Czech Republic",
            Self::DE => "Germany",
            Self::DK => "Denmark",
            Self::EE => "Estonia",
            Self::ES => "Spain",
            Self::FI => "Finland",
            Self::FR => "France",
            Self::GB => "United Kingdom",
            Self::GR => "Greece",
            Self::HR => "Croatia",
            Self::HU => "Hungary",
            Self::IE => "Ireland",
            Self::IS => "Iceland",
            Self::IT => "Italy",
            Self::LI => "Liechtenstein",
            Self::LT => "Lithuania",
            Self::LU => "Luxembourg",
            Self::LV => "Latvia",
            Self::MC => "Monaco",
            Self::MD => "Moldova",
            Self::ME => "Montenegro",
            Self::MK => "North Macedonia",
            Self::MT => "Malta",
            Self::NL => "Netherlands",
            Self::NO => "Norway",
            Self::PL => "Poland",
            Self::PT => "Portugal",
            Self::RO => "Romania",
            Self::RS => "Serbia",
            Self::SE => "Sweden",
            Self::SI => "Slovenia",
            Self::SK => "Slovakia",
            Self::SM => "San Marino",
            Self::TR => "Turkey",
            Self::UA => "Ukraine",
            Self::VA => "Vatican City",
        }
    }

    /// Whether this country rewrites the cleaned code at all.
    pub fn has_layout_rule(&self) -> bool {
        matches!(
            self,
            Self::AD
                | Self::PT
                | Self::CZ
                | Self::SK
                | Self::SE
                | Self::PL
                | Self::NL
                | Self::GB
                | Self::IE
                | Self::MT
                | Self::LV
                | Self::MD
        )
    }

    /// Format a postal code with this country's layout.
    ///
    /// The input is cleaned first (`A-Z0-9` only), so raw user input is
    /// accepted. A code that does not have the expected shape comes back
    /// cleaned but otherwise unchanged, except for Andorra where it becomes
    /// an empty string.
    pub fn format_postal_code(&self, raw: &str) -> String {
        let code = crate::core::formatter::clean(raw);

        match self {
            Self::AD => rules::andorra(&code),

            // 1234-567
            Self::PT => rules::split_fixed(&code, 7, 4, '-'),

            // 123 45
            Self::CZ | Self::SK | Self::SE => rules::split_fixed(&code, 5, 3, ' '),

            // 12-345
            Self::PL => rules::split_fixed(&code, 5, 2, '-'),

            Self::NL => rules::netherlands(&code),

            Self::GB => rules::united_kingdom(&code),

            // A65 F4E2
            Self::IE => rules::split_fixed(&code, 7, 3, ' '),

            Self::MT => rules::malta(&code),

            Self::LV | Self::MD => rules::prefixed_four_digits(self.as_str(), &code),

            _ => code,
        }
    }
}

impl FromStr for CountryCode {
    type Err = PostalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| PostalError::invalid_country_code(s))
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = PostalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
