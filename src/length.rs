//! Validation of user-entered password lengths.

use crate::{PassgenError, PassgenErrorRepr};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 16;

pub fn clamp_length(length: usize) -> usize {
    let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
    if clamped != length {
        tracing::warn!(
            requested = length,
            clamped,
            "password length out of range; clamping"
        );
    }
    clamped
}

/// Parse a length typed by the user.
///
/// Anything that isn't a non-negative whole number is rejected. Whole numbers outside
/// `MIN_LENGTH..=MAX_LENGTH` are clamped to the nearest bound.
pub fn parse_length(input: &str) -> Result<usize, PassgenError> {
    Ok(clamp_length(parse_whole_number(input)?))
}

/// Check that `input` would be accepted by `parse_length`, without clamping or logging.
pub fn validate_length(input: &str) -> Result<(), PassgenError> {
    parse_whole_number(input).map(|_| ())
}

fn parse_whole_number(input: &str) -> Result<usize, PassgenError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PassgenErrorRepr::InvalidLength(input.to_owned()).into());
    }
    // All digits, so the only way to fail is overflow, which is as good as "too long".
    Ok(trimmed.parse::<usize>().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range() {
        assert_eq!(parse_length("1").unwrap(), 1);
        assert_eq!(parse_length(" 42 ").unwrap(), 42);
        assert_eq!(parse_length("128").unwrap(), 128);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(parse_length("0").unwrap(), MIN_LENGTH);
        assert_eq!(parse_length("129").unwrap(), MAX_LENGTH);
        assert_eq!(
            parse_length("99999999999999999999999999").unwrap(),
            MAX_LENGTH
        );
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["", "  ", "-3", "+3", "1.5", "twelve", "0x10"] {
            let err = parse_length(input).unwrap_err();
            assert!(err.is_invalid_length(), "{input:?} was accepted");
            assert!(validate_length(input).is_err());
        }
    }

    #[test]
    fn validation_agrees_with_parsing() {
        for input in ["0", "7", "128", "500"] {
            assert!(validate_length(input).is_ok());
            assert!(parse_length(input).is_ok());
        }
    }
}
