//! Conversions between hex strings, big-endian bytes and unsigned integers.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::CurveError;

/// Decodes a hex string into bytes.
///
/// An optional `0x`/`0X` prefix is accepted and an odd number of digits is
/// left-padded with a zero nibble. Any non-hex character is an error.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, CurveError> {
    let digits = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };
    decoded.map_err(|_| CurveError::InvalidHex(hex_str.to_owned()))
}

/// Encodes bytes as a lowercase hex string without prefix.
#[inline]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Interprets bytes as a big-endian unsigned integer. Empty input is zero.
#[inline]
pub fn bytes_to_uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Big-endian encoding of `n` with no leading zero byte.
///
/// Zero encodes to an empty vector. The result may be shorter than any fixed
/// width a caller expects; use [`uint_to_fixed_bytes`] when padding matters.
pub fn uint_to_bytes(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Big-endian encoding of `n`, left-padded with zeros to exactly `N` bytes.
pub fn uint_to_fixed_bytes<const N: usize>(n: &BigUint) -> Result<[u8; N], CurveError> {
    let bytes = uint_to_bytes(n);
    if bytes.len() > N {
        return Err(CurveError::ValueTooLarge { len: N });
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Parses a hex string as a big-endian unsigned integer.
pub fn hex_to_uint(hex_str: &str) -> Result<BigUint, CurveError> {
    hex_to_bytes(hex_str).map(|bytes| bytes_to_uint(&bytes))
}
