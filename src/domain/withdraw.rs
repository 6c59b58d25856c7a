//! Validation and display rules for withdrawal form input.
//!
//! These functions are total: malformed input yields `false` or is passed
//! through unchanged, never an error.

/// Returns `true` when `address` is a `0x`-prefixed string of exactly 40 hex
/// digits.
///
/// Casing is not checked: lowercase and mixed-case (checksummed) addresses
/// are both accepted without EIP-55 verification.
pub fn is_valid_address(address: &str) -> bool {
    let Some(digits) = address.strip_prefix("0x") else {
        return false;
    };
    digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns `true` when `amount` is a positive finite decimal number with at
/// most 18 fractional digits.
///
/// The numeric value comes from a lenient prefix parse, the way form input
/// is usually read: leading whitespace is skipped and trailing non-numeric
/// characters are ignored. The fractional-digit count runs on the literal
/// string, split on `.`, so trailing characters after the fraction still
/// count against the 18-digit limit.
pub fn is_valid_amount(amount: &str) -> bool {
    let Some(value) = parse_float_prefix(amount) else {
        return false;
    };
    if !value.is_finite() || value <= 0.0 {
        return false;
    }
    match amount.split_once('.') {
        Some((_, fraction)) => fraction.len() <= 18,
        None => true,
    }
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    numeric_prefix(s)?.parse().ok()
}

/// The longest numeric prefix of `s` after leading whitespace: an optional
/// sign, digits with an optional fraction, and an optional exponent.
/// Returns `None` when no digits are found.
pub fn numeric_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let mut has_digits = end > integer_start;
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        let fraction_start = end;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
        }
        has_digits |= end > fraction_start;
    }
    if !has_digits {
        return None;
    }
    // The exponent only counts if it carries digits of its own.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_start = exponent;
        while bytes.get(exponent).is_some_and(|b| b.is_ascii_digit()) {
            exponent += 1;
        }
        if exponent > exponent_start {
            end = exponent;
        }
    }
    Some(&s[..end])
}

/// Shortens a valid address to `0x1234…abcd` form, using a single horizontal
/// ellipsis character. Anything that fails [`is_valid_address`] is returned
/// unchanged.
pub fn shorten_address(address: &str) -> String {
    if !is_valid_address(address) {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[38..])
}
