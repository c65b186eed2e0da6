//! # Type Conversion Helpers
//!
//! A small library of stateless, pure conversion functions for coercing values
//! between primitive representations: numeral strings, byte sequences and typed
//! primitives.
//!
//! ## Features
//!
//! - **Zero-padding**: pad numeral strings to a fixed width without truncation
//! - **Radix conversion**: convert numerals between base 2, 8, 10 and 16
//! - **Encoding conversions**: encode/decode text for any WHATWG-labelled
//!   encoding or Windows code page
//! - **Binary decoding**: read little-endian integers and floats from the front
//!   of a byte slice, with a zero default for short input
//! - **Safe getters**: coerce an arbitrary value into a string, integer, float
//!   or date-time, falling back to a caller-supplied default on any failure
//!
//! Every function is re-entrant and free of shared state, so the whole surface
//! is safe to call concurrently without synchronization. The main operations
//! are re-exported at the crate root:
//!
//! ```
//! use typeconv::{convert_base, get_int, repair_zero};
//!
//! assert_eq!(repair_zero("42", 5), "00042");
//! assert_eq!(convert_base("15", 10, 16), "f");
//! assert_eq!(get_int(Some("42"), 5), 42);
//! assert_eq!(get_int(None::<&str>, 5), 5);
//! ```

pub mod bytes;
pub mod encoding;
pub mod error;
pub mod getter;
pub mod padding;
pub mod radix;

pub use crate::bytes::bytes_to_f64;
pub use crate::bytes::bytes_to_i32;
pub use crate::bytes::bytes_to_i64;
pub use crate::bytes::bytes_to_u16;
pub use crate::bytes::bytes_to_u32;
pub use crate::bytes::bytes_to_u64;
pub use crate::encoding::bytes_to_string;
pub use crate::encoding::encoding_for_codepage;
pub use crate::encoding::encoding_for_label;
pub use crate::encoding::string_to_bytes;
pub use crate::error::ConvertError;
pub use crate::getter::get_byte;
pub use crate::getter::get_datetime;
pub use crate::getter::get_double;
pub use crate::getter::get_int;
pub use crate::getter::get_int_radix;
pub use crate::getter::get_int_saturating;
pub use crate::getter::get_long;
pub use crate::getter::get_long_radix;
pub use crate::getter::get_short;
pub use crate::getter::get_short_radix;
pub use crate::getter::get_short_saturating;
pub use crate::getter::get_str;
pub use crate::getter::get_str_with;
pub use crate::getter::parse_datetime;
pub use crate::padding::repair_zero;
pub use crate::radix::convert_base;
pub use crate::radix::try_convert_base;
