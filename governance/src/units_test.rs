use super::*;

fn wei(value: &str) -> U256 {
    U256::from_str_radix(value, 10).unwrap()
}

#[test]
fn whole_amounts_scale_by_token_decimals() {
    assert_eq!(
        parse_token_amount("10000"),
        Ok(wei("10000000000000000000000"))
    );
    assert_eq!(parse_token_amount("1"), Ok(wei("1000000000000000000")));
}

#[test]
fn fractional_amounts_pad_to_eighteen_places() {
    assert_eq!(parse_token_amount("2872.0"), Ok(wei("2872000000000000000000")));
    assert_eq!(parse_token_amount("0.5"), Ok(wei("500000000000000000")));
    assert_eq!(parse_token_amount(".5"), Ok(wei("500000000000000000")));
    assert_eq!(
        parse_token_amount("1.000000000000000001"),
        Ok(wei("1000000000000000001"))
    );
}

#[test]
fn zero_is_representable() {
    assert_eq!(parse_token_amount("0"), Ok(U256::ZERO));
    assert_eq!(parse_token_amount("0.0"), Ok(U256::ZERO));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_token_amount(" 7 "), Ok(wei("7000000000000000000")));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(parse_token_amount(""), Err(EncodingError::Empty));
    assert_eq!(parse_token_amount("   "), Err(EncodingError::Empty));
    assert_eq!(parse_token_amount("."), Err(EncodingError::Empty));
}

#[test]
fn non_decimal_characters_are_rejected() {
    assert_eq!(
        parse_token_amount("-1"),
        Err(EncodingError::InvalidCharacter('-'))
    );
    assert_eq!(
        parse_token_amount("1e5"),
        Err(EncodingError::InvalidCharacter('e'))
    );
    assert_eq!(
        parse_token_amount("1.2.3"),
        Err(EncodingError::InvalidCharacter('.'))
    );
}

#[test]
fn more_than_eighteen_fractional_digits_is_an_encoding_error() {
    assert_eq!(
        parse_token_amount("1.1234567890123456789"),
        Err(EncodingError::TooPrecise { max: 18 })
    );
}

#[test]
fn values_past_two_hundred_fifty_six_bits_overflow() {
    let oversized = "9".repeat(78);
    assert_eq!(parse_token_amount(&oversized), Err(EncodingError::Overflow));
}

#[test]
fn custom_decimals_are_respected() {
    assert_eq!(parse_units("1.25", 2), Ok(U256::from(125u32)));
    assert_eq!(
        parse_units("1.251", 2),
        Err(EncodingError::TooPrecise { max: 2 })
    );
}
