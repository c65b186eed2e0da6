//! Guarded little-endian decoding of numeric types from byte slices.
//!
//! Every function takes the leading bytes it needs and ignores the rest; a slice
//! too short to supply them returns the zero value of the target type instead of
//! panicking. Byte order is fixed little-endian rather than platform-native so
//! results match on every target.

/// Decodes the first 4 bytes of `data` as a little-endian signed 32-bit integer.
/// Returns 0 when fewer than 4 bytes are available.
pub fn bytes_to_i32(data: &[u8]) -> i32 {
    if data.len() < 4 {
        return 0;
    }
    i32::from_le_bytes(data[..4].try_into().expect("i32"))
}

/// Decodes the first 2 bytes of `data` as a little-endian unsigned 16-bit integer.
/// Returns 0 when fewer than 2 bytes are available.
pub fn bytes_to_u16(data: &[u8]) -> u16 {
    if data.len() < 2 {
        return 0;
    }
    u16::from_le_bytes(data[..2].try_into().expect("u16"))
}

/// Decodes the first 4 bytes of `data` as a little-endian unsigned 32-bit integer.
/// Returns 0 when fewer than 4 bytes are available.
pub fn bytes_to_u32(data: &[u8]) -> u32 {
    if data.len() < 4 {
        return 0;
    }
    u32::from_le_bytes(data[..4].try_into().expect("u32"))
}

/// Decodes the first 8 bytes of `data` as a little-endian signed 64-bit integer.
/// Returns 0 when fewer than 8 bytes are available.
pub fn bytes_to_i64(data: &[u8]) -> i64 {
    if data.len() < 8 {
        return 0;
    }
    i64::from_le_bytes(data[..8].try_into().expect("i64"))
}

/// Decodes the first 8 bytes of `data` as a little-endian unsigned 64-bit integer.
/// Returns 0 when fewer than 8 bytes are available.
pub fn bytes_to_u64(data: &[u8]) -> u64 {
    if data.len() < 8 {
        return 0;
    }
    u64::from_le_bytes(data[..8].try_into().expect("u64"))
}

/// Decodes the first 8 bytes of `data` as a little-endian 64-bit float.
/// Returns 0.0 when fewer than 8 bytes are available.
pub fn bytes_to_f64(data: &[u8]) -> f64 {
    if data.len() < 8 {
        return 0.0;
    }
    f64::from_le_bytes(data[..8].try_into().expect("f64"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_slices_decode_to_zero() {
        assert_eq!(bytes_to_i32(&[]), 0);
        assert_eq!(bytes_to_i32(&[1, 2, 3]), 0);
        assert_eq!(bytes_to_u16(&[1]), 0);
        assert_eq!(bytes_to_u32(&[1, 2, 3]), 0);
        assert_eq!(bytes_to_i64(&[1, 2, 3, 4, 5, 6, 7]), 0);
        assert_eq!(bytes_to_u64(&[1]), 0);
        assert_eq!(bytes_to_f64(&[0x3f]), 0.0);
    }

    #[test]
    fn i32_round_trips_with_le_encoder() {
        for value in [0, 1, -1, 42, i32::MIN, i32::MAX] {
            assert_eq!(bytes_to_i32(&value.to_le_bytes()), value);
        }
    }

    #[test]
    fn extra_bytes_are_ignored() {
        let mut data = 0x0403_0201i32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0xff, 0xff]);
        assert_eq!(bytes_to_i32(&data), 0x0403_0201);
    }

    #[test]
    fn wider_types_round_trip() {
        assert_eq!(bytes_to_u16(&0xbeefu16.to_le_bytes()), 0xbeef);
        assert_eq!(bytes_to_u32(&0xdead_beefu32.to_le_bytes()), 0xdead_beef);
        assert_eq!(bytes_to_i64(&(-42i64).to_le_bytes()), -42);
        assert_eq!(bytes_to_u64(&u64::MAX.to_le_bytes()), u64::MAX);
        assert_eq!(bytes_to_f64(&1.5f64.to_le_bytes()), 1.5);
    }
}
