//! Fixed-point token amount scaling.
//!
//! Budgets are entered as decimal strings and submitted on-chain as
//! 18-decimal fixed-point integers. Scaling is strict: an amount that cannot
//! be represented exactly is an [`EncodingError`], never a rounded value.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use alloy_primitives::U256;

/// Decimal places of the DAO governance token.
pub const TOKEN_DECIMALS: u32 = 18;

/// A value that cannot be scaled to its on-chain fixed-point representation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The input is empty or contains no digits.
    #[error("amount is empty")]
    Empty,
    /// The input contains a character other than digits and one decimal point.
    #[error("amount contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    /// More fractional digits than the token representation carries.
    #[error("amount has more than {max} decimal places")]
    TooPrecise {
        /// Maximum representable fractional digits.
        max: u32,
    },
    /// The scaled value does not fit in the encoded range.
    #[error("value does not fit in the encoded range")]
    Overflow,
}

/// Scale a decimal string to an integer with `decimals` fractional digits.
///
/// # Errors
///
/// Returns an [`EncodingError`] for empty input, non-decimal characters, too
/// many fractional digits, or values exceeding 256 bits.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, EncodingError> {
    let trimmed = amount.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(EncodingError::Empty);
    }
    if let Some(bad) = int_part
        .chars()
        .chain(frac_part.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(EncodingError::InvalidCharacter(bad));
    }
    if frac_part.len() > decimals as usize {
        return Err(EncodingError::TooPrecise { max: decimals });
    }

    let scale = U256::from(10u8).pow(U256::from(decimals));
    let int_value = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| EncodingError::Overflow)?
    };
    let frac_value = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{frac_part:0<width$}", width = decimals as usize);
        U256::from_str_radix(&padded, 10).map_err(|_| EncodingError::Overflow)?
    };

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or(EncodingError::Overflow)
}

/// Scale a decimal string to the governance token's 18-decimal representation.
///
/// # Errors
///
/// See [`parse_units`].
pub fn parse_token_amount(amount: &str) -> Result<U256, EncodingError> {
    parse_units(amount, TOKEN_DECIMALS)
}
