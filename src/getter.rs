//! Safe getters that coerce an arbitrary source value into a target primitive,
//! falling back to a caller-supplied default on any failure.
//!
//! The source is an `Option<impl Display>`: `None` models an absent value, and a
//! present value is stringified before parsing. Every getter absorbs every
//! failure path into its default; none panics or returns an error.

use crate::error::ConvertError;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt::Display;

/// Date-time formats accepted by [`get_datetime`], tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
];

/// Date-only formats accepted by [`get_datetime`]; the time defaults to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Returns the textual form of `src`, or `default_val` when `src` is absent or
/// its textual form is empty. Equivalent to [`get_str_with`] with
/// `disallow_empty` set.
pub fn get_str(src: Option<impl Display>, default_val: &str) -> String {
    get_str_with(src, default_val, true)
}

/// Returns the textual form of `src`, or `default_val` when `src` is absent.
/// With `disallow_empty`, an empty textual form also yields `default_val`.
pub fn get_str_with(src: Option<impl Display>, default_val: &str, disallow_empty: bool) -> String {
    match src {
        Some(value) => {
            let text = value.to_string();
            if disallow_empty && text.is_empty() {
                default_val.to_owned()
            } else {
                text
            }
        }
        None => default_val.to_owned(),
    }
}

/// Clamps a wide integer into the unsigned 8-bit range (saturating, not wrapping).
pub fn get_byte(src: i64) -> u8 {
    src.clamp(u8::MIN as i64, u8::MAX as i64) as u8
}

/// Parses the trimmed textual form of `src` as an `i16`;
/// `default_val` on absence or parse failure.
pub fn get_short(src: Option<impl Display>, default_val: i16) -> i16 {
    match src {
        Some(value) => value.to_string().trim().parse().unwrap_or(default_val),
        None => default_val,
    }
}

/// Parses the trimmed textual form of `src` as an `i16` in the given radix;
/// `default_val` on absence, parse failure or a radix outside 2-36.
pub fn get_short_radix(src: Option<impl Display>, default_val: i16, radix: u32) -> i16 {
    if !valid_radix(radix) {
        return default_val;
    }
    match src {
        Some(value) => i16::from_str_radix(value.to_string().trim(), radix).unwrap_or(default_val),
        None => default_val,
    }
}

/// Clamps a wide integer into the signed 16-bit range (saturating, not wrapping).
pub fn get_short_saturating(src: i64) -> i16 {
    src.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

/// Parses the trimmed textual form of `src` as an `i32`;
/// `default_val` on absence or parse failure.
pub fn get_int(src: Option<impl Display>, default_val: i32) -> i32 {
    match src {
        Some(value) => value.to_string().trim().parse().unwrap_or(default_val),
        None => default_val,
    }
}

/// Parses the trimmed textual form of `src` as an `i32` in the given radix;
/// `default_val` on absence, parse failure or a radix outside 2-36.
pub fn get_int_radix(src: Option<impl Display>, default_val: i32, radix: u32) -> i32 {
    if !valid_radix(radix) {
        return default_val;
    }
    match src {
        Some(value) => i32::from_str_radix(value.to_string().trim(), radix).unwrap_or(default_val),
        None => default_val,
    }
}

/// Clamps a wide integer into the signed 32-bit range (saturating, not wrapping).
pub fn get_int_saturating(src: i64) -> i32 {
    src.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Parses the textual form of `src` as an `i64`;
/// `default_val` on absence or parse failure.
///
/// Unlike [`get_int`], the textual form is not trimmed, so surrounding
/// whitespace fails the parse (quirk of the original, kept for compatibility).
pub fn get_long(src: Option<impl Display>, default_val: i64) -> i64 {
    match src {
        Some(value) => value.to_string().parse().unwrap_or(default_val),
        None => default_val,
    }
}

/// Parses the trimmed textual form of `src` as an `i64` in the given radix;
/// `default_val` on absence, parse failure or a radix outside 2-36.
pub fn get_long_radix(src: Option<impl Display>, default_val: i64, radix: u32) -> i64 {
    if !valid_radix(radix) {
        return default_val;
    }
    match src {
        Some(value) => i64::from_str_radix(value.to_string().trim(), radix).unwrap_or(default_val),
        None => default_val,
    }
}

/// Parses the textual form of `src` as an `f64`;
/// `default_val` on absence or parse failure.
pub fn get_double(src: Option<impl Display>, default_val: f64) -> f64 {
    match src {
        Some(value) => value.to_string().parse().unwrap_or(default_val),
        None => default_val,
    }
}

/// Parses the trimmed textual form of `src` as a calendar date-time;
/// `default_val` on absence or when no accepted format matches.
pub fn get_datetime(src: Option<impl Display>, default_val: NaiveDateTime) -> NaiveDateTime {
    match src {
        Some(value) => parse_datetime(value.to_string().trim()).unwrap_or(default_val),
        None => default_val,
    }
}

/// Parses `text` against the accepted date-time formats: `2024-01-02 03:04:05`,
/// `2024-01-02T03:04:05`, `2024/01/02 03:04:05` (each with optional fractional
/// seconds) and the date-only forms `2024-01-02` / `2024/01/02` at midnight.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, ConvertError> {
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_hms_opt(0, 0, 0).expect("Append 00:00:00"));
        }
    }
    // Every format failed; surface the error from the primary one.
    NaiveDateTime::parse_from_str(text, DATETIME_FORMATS[0]).map_err(Into::into)
}

fn valid_radix(radix: u32) -> bool {
    (2..=36).contains(&radix)
}
