//! Shape checks and layout helpers shared by the per-country rules.
//!
//! Every function here expects an already cleaned code (`A-Z0-9` only), so
//! byte offsets and char offsets coincide.

use once_cell::sync::Lazy;
use regex::Regex;

static ANDORRA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^AD[0-9]{3}$").unwrap());

static NETHERLANDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})([A-Z]{2})$").unwrap());

// outward code, inward code
static UNITED_KINGDOM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{1,2}[0-9][A-Z0-9]?)([0-9][A-Z]{2})$").unwrap());

static MALTA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]{3})([0-9]{4})$").unwrap());

static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})$").unwrap());

/// Insert `separator` at `position` when `code` is exactly `len` long.
pub(crate) fn split_fixed(code: &str, len: usize, position: usize, separator: char) -> String {
    if !code.is_ascii() || code.len() != len {
        return code.to_string();
    }
    let (head, tail) = code.split_at(position);
    format!("{}{}{}", head, separator, tail)
}

/// Join the two capture groups of `pattern` with a single space.
fn join_groups(pattern: &Regex, code: &str) -> String {
    match pattern.captures(code) {
        Some(caps) => format!("{} {}", &caps[1], &caps[2]),
        None => code.to_string(),
    }
}

/// Andorra drops anything that is not `AD###`.
pub(crate) fn andorra(code: &str) -> String {
    if ANDORRA.is_match(code) {
        code.to_string()
    } else {
        String::new()
    }
}

pub(crate) fn netherlands(code: &str) -> String {
    join_groups(&NETHERLANDS, code)
}

pub(crate) fn united_kingdom(code: &str) -> String {
    join_groups(&UNITED_KINGDOM, code)
}

pub(crate) fn malta(code: &str) -> String {
    join_groups(&MALTA, code)
}

/// `1050` -> `LV-1050` for Latvia and Moldova.
pub(crate) fn prefixed_four_digits(prefix: &str, code: &str) -> String {
    match FOUR_DIGITS.captures(code) {
        Some(caps) => format!("{}-{}", prefix, &caps[1]),
        None => code.to_string(),
    }
}
