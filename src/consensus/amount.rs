//! Exact decimal coin amounts
//!
//! Definitions state amounts such as dust thresholds in whole coins
//! ("0.001"). Parsing is exact: anything finer than one base unit is an
//! error, never rounded.

use crate::constants::{COIN, DECIMAL_PLACES};
use thiserror::Error;

/// Amount parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount syntax: {0}")]
    InvalidSyntax(String),
    #[error("amount {0} is finer than one base unit")]
    SubUnit(String),
    #[error("amount {0} overflows")]
    Overflow(String),
}

/// Parse a decimal coin amount into base units
pub fn parse_coin_amount(text: &str) -> Result<u64, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(AmountError::InvalidSyntax(text.to_string()));
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(frac) {
        return Err(AmountError::InvalidSyntax(text.to_string()));
    }

    // Trailing zeros past the last decimal place are harmless
    let frac = frac.trim_end_matches('0');
    if frac.len() > DECIMAL_PLACES as usize {
        return Err(AmountError::SubUnit(text.to_string()));
    }

    let whole_units = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .map_err(|_| AmountError::Overflow(text.to_string()))?
    };
    let mut frac_units: u64 = 0;
    for digit in frac.bytes() {
        frac_units = frac_units * 10 + u64::from(digit - b'0');
    }
    for _ in frac.len()..DECIMAL_PLACES as usize {
        frac_units *= 10;
    }

    whole_units
        .checked_mul(COIN)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or_else(|| AmountError::Overflow(text.to_string()))
}

/// Format base units as a decimal coin amount
pub fn format_coin_amount(units: u64) -> String {
    let whole = units / COIN;
    let frac = units % COIN;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = DECIMAL_PLACES as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
