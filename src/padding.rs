//! Fixed-width zero-padding for numeral strings.

/// Left-pads `text` with ASCII zeros up to `limited_length` characters.
///
/// Text already at least `limited_length` characters long is returned unchanged;
/// this function never truncates. Padding counts characters, not bytes, so
/// multi-byte text pads by its visible length.
pub fn repair_zero(text: &str, limited_length: usize) -> String {
    let length = text.chars().count();
    if length >= limited_length {
        return text.to_owned();
    }

    let mut result = "0".repeat(limited_length - length);
    result.push_str(text);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_text() {
        assert_eq!(repair_zero("42", 5), "00042");
        assert_eq!(repair_zero("7", 2), "07");
        assert_eq!(repair_zero("", 3), "000");
    }

    #[test]
    fn keeps_text_at_or_above_limit() {
        assert_eq!(repair_zero("12345", 5), "12345");
        assert_eq!(repair_zero("123456", 5), "123456");
        assert_eq!(repair_zero("42", 0), "42");
    }

    #[test]
    fn result_has_exact_length_and_suffix() {
        let result = repair_zero("987", 9);
        assert_eq!(result.len(), 9);
        assert!(result.ends_with("987"));
        assert!(result[..6].chars().all(|c| c == '0'));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(repair_zero("五", 3), "00五");
    }
}
