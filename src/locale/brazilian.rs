use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
/// Most fraction digits a `Decimal` holds.
const MAX_SCALE: usize = 28;

/// Parses free-form numeric text written with either Brazilian or plain separators.
///
/// `1.000.000,50`, `1000000,50` and `1000000.50` all read as one million and fifty
/// centavos. A dot followed by more than two digits is a thousands separator, so
/// `1.000` is one thousand while `1.50` is one and a half. Only the leading numeric
/// part of the cleaned text is read (`12abc` is 12); text with no number is zero.
/// Magnitudes too large for `Decimal` saturate at `Decimal::MAX` (or `MIN`) and
/// ones too small read as zero. Never fails.
pub fn parse(text: &str) -> Decimal {
    let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if clean.is_empty() {
        return Decimal::ZERO;
    }

    let has_dots = clean.contains(THOUSANDS_SEPARATOR);
    let has_comma = clean.contains(DECIMAL_SEPARATOR);

    let canonical = match (has_dots, has_comma) {
        (true, true) => clean.replace(THOUSANDS_SEPARATOR, "").replacen(DECIMAL_SEPARATOR, ".", 1),
        (true, false) => {
            let after_last_dot = clean.rsplit(THOUSANDS_SEPARATOR).next().unwrap_or_default();
            if after_last_dot.chars().count() > 2 {
                clean.replace(THOUSANDS_SEPARATOR, "")
            } else {
                clean
            }
        }
        (false, true) => clean.replacen(DECIMAL_SEPARATOR, ".", 1),
        (false, false) => clean,
    };

    leading_number(&canonical).unwrap_or(Decimal::ZERO)
}

/// Reads the longest numeric prefix: optional sign, digits, optional fraction and
/// optional exponent.
fn leading_number(text: &str) -> Option<Decimal> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let integer = &text[int_start..pos];

    let mut fraction = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        fraction = &text[frac_start..end];
        pos = end;
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &text[pos + 1..end];
        }
    }

    let mut mantissa = String::with_capacity(pos + 2);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        mantissa.push('.');
        mantissa.push_str(fraction);
    }

    let parsed = if exponent.is_empty() {
        Decimal::from_str(&mantissa).ok()
    } else {
        Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok()
    };
    Some(parsed.unwrap_or_else(|| out_of_range(negative, integer, fraction, exponent)))
}

/// Resolves a well-formed number that `Decimal` cannot hold as written.
fn out_of_range(negative: bool, integer: &str, fraction: &str, exponent: &str) -> Decimal {
    let significant = integer.trim_start_matches('0');
    if significant.is_empty() && fraction.bytes().all(|b| b == b'0') {
        return Decimal::ZERO;
    }
    if significant.len() <= MAX_SCALE {
        if exponent.starts_with('-') {
            return Decimal::ZERO;
        }
        if exponent.is_empty() {
            // Too many fraction digits: keep the ones that fit
            let keep = fraction.len().min(MAX_SCALE - significant.len());
            let sign = if negative { "-" } else { "" };
            let digits = if significant.is_empty() { "0" } else { significant };
            let truncated = if keep == 0 {
                format!("{sign}{digits}")
            } else {
                format!("{sign}{digits}.{}", &fraction[..keep])
            };
            if let Ok(value) = Decimal::from_str(&truncated) {
                return value;
            }
        }
    }
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Formats a value with Brazilian grouping, e.g. `1.234.567,89`.
///
/// With `show_decimals` exactly two fraction digits are shown, otherwise none.
/// Rounds half away from zero. Zero renders as an empty string so a blank input
/// field stays blank.
pub fn format(value: Decimal, show_decimals: bool) -> String {
    if value.is_zero() {
        return String::new();
    }
    let (negative, body) = grouped(value, if show_decimals { 2 } else { 0 });
    if negative { format!("-{body}") } else { body }
}

/// Rounds `value` to `dp` places and groups the integer digits. Returns the sign
/// separately so callers can place a currency symbol between sign and digits.
pub(crate) fn grouped(value: Decimal, dp: u32) -> (bool, String) {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.*}", dp as usize, rounded.abs());

    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut body = String::with_capacity(plain.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            body.push(THOUSANDS_SEPARATOR);
        }
        body.push(c);
    }
    if let Some(fraction) = fraction {
        body.push(DECIMAL_SEPARATOR);
        body.push_str(fraction);
    }

    (negative, body)
}
