//! Conversion between base-2/8/10/16 textual numerals.

use crate::error::ConvertError;
use crate::padding::repair_zero;

/// Converts a numeral string between radices, e.g. `convert_base("15", 10, 16)`
/// renders decimal 15 as `"f"`.
///
/// The value is parsed as a signed 32-bit integer; negatives render as
/// two's-complement bit patterns in bases 2, 8 and 16 and with a leading sign in
/// base 10. Binary results of 4 to 7 digits are zero-padded to 8; shorter and
/// longer binary results are left as-is (historical quirk, kept for
/// compatibility). Any failure yields the literal `"0"` instead of an error.
pub fn convert_base(value: &str, from_radix: u32, to_radix: u32) -> String {
    try_convert_base(value, from_radix, to_radix).unwrap_or_else(|_| "0".to_owned())
}

/// Fallible variant of [`convert_base`] for callers that need to distinguish
/// unparsable input, overflow and unsupported radices from a genuine zero.
pub fn try_convert_base(value: &str, from_radix: u32, to_radix: u32) -> Result<String, ConvertError> {
    if !(2..=36).contains(&from_radix) {
        Err(ConvertError::UnsupportedRadixError(from_radix))?;
    }

    let number = i32::from_str_radix(value, from_radix)?;
    let result = match to_radix {
        2 => format!("{number:b}"),
        8 => format!("{number:o}"),
        10 => number.to_string(),
        16 => format!("{number:x}"),
        other => Err(ConvertError::UnsupportedRadixError(other))?,
    };

    // Pads 4-7 digit binary results up to a full octet; 1-3 digit results stay
    // unpadded, matching the original behavior.
    if to_radix == 2 && (4..=7).contains(&result.len()) {
        Ok(repair_zero(&result, 8))
    } else {
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_to_hexadecimal() {
        assert_eq!(convert_base("15", 10, 16), "f");
        assert_eq!(convert_base("255", 10, 16), "ff");
    }

    #[test]
    fn hexadecimal_to_binary_pads_to_octet() {
        assert_eq!(convert_base("ff", 16, 2), "11111111");
        assert_eq!(convert_base("f", 16, 2), "00001111");
    }

    #[test]
    fn short_binary_results_stay_unpadded() {
        assert_eq!(convert_base("1", 10, 2), "1");
        assert_eq!(convert_base("7", 10, 2), "111");
    }

    #[test]
    fn long_binary_results_stay_unpadded() {
        assert_eq!(convert_base("100", 16, 2), "100000000");
    }

    #[test]
    fn octal_and_decimal_targets() {
        assert_eq!(convert_base("255", 10, 8), "377");
        assert_eq!(convert_base("377", 8, 10), "255");
    }

    #[test]
    fn negative_values() {
        assert_eq!(convert_base("-15", 10, 10), "-15");
        assert_eq!(convert_base("-1", 10, 16), "ffffffff");
    }

    #[test]
    fn failures_yield_zero() {
        assert_eq!(convert_base("notanumber", 10, 16), "0");
        assert_eq!(convert_base("", 10, 16), "0");
        assert_eq!(convert_base("ff", 10, 16), "0");
        // Past i32::MAX
        assert_eq!(convert_base("2147483648", 10, 16), "0");
        // Unsupported radices
        assert_eq!(convert_base("15", 10, 7), "0");
        assert_eq!(convert_base("15", 1, 16), "0");
        assert_eq!(convert_base("15", 37, 16), "0");
    }

    #[test]
    fn try_variant_reports_the_failure() {
        assert!(matches!(
            try_convert_base("15", 10, 3),
            Err(ConvertError::UnsupportedRadixError(3))
        ));
        assert!(matches!(
            try_convert_base("oops", 10, 16),
            Err(ConvertError::ParseIntError(_))
        ));
        assert_eq!(try_convert_base("15", 10, 16).unwrap(), "f");
    }
}
