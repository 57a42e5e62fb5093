//! Conversions between text, hex and the natural numbers the cipher
//! works over. Bytes are read big-endian, and integers are written back
//! with the minimal number of bytes that represents them.
//!
//! The minimal-byte convention has a sharp edge: leading zero bytes do
//! not survive a round trip, because nothing in the integer remembers
//! them. Text whose first byte is zero therefore comes back shortened.
//! This matches the behaviour the cipher layer was built against and is
//! deliberately left as is.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("recovered bytes are not valid utf-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("not a valid hex string")]
    Hex(#[from] hex::FromHexError),
}

/// Interprets the utf-8 bytes of `text` as a big-endian natural number.
/// Empty text maps to zero.
pub fn text_to_int(text: &str) -> BigUint {
    BigUint::from_bytes_be(text.as_bytes())
}

/// Decodes `num` back into text from its minimal big-endian bytes.
///
/// Fails when those bytes are not valid utf-8, which is what decrypting
/// with the wrong key, or a corrupted ciphertext, produces.
pub fn int_to_text(num: &BigUint) -> Result<String, DecodeError> {
    Ok(String::from_utf8(min_bytes_be(num))?)
}

/// Hex of the minimal big-endian bytes of `num`. Zero maps to the empty
/// string.
pub fn int_to_hex(num: &BigUint) -> String {
    hex::encode(min_bytes_be(num))
}

/// Parses a hex string back into a natural number.
pub fn hex_to_int(text: &str) -> Result<BigUint, DecodeError> {
    Ok(BigUint::from_bytes_be(&hex::decode(text)?))
}

// ceil(bits / 8) bytes; num-bigint renders zero as [0], the integer
// domain wants no bytes at all
fn min_bytes_be(num: &BigUint) -> Vec<u8> {
    if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    }
}
