//! Base62 alphabet and digit extraction.

/// The 62-symbol alphanumeric alphabet.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest code that can be filled from a `u128` without running out of
/// entropy (62^21 < 2^128 < 62^22).
pub const MAX_DIGITS: usize = 21;

/// Emits the `length` least-significant base62 digits of `value`.
///
/// Digits are written least-significant first. `length` must not exceed
/// [`MAX_DIGITS`], otherwise the tail is padded with the zero symbol.
pub fn encode_digits(mut value: u128, length: usize) -> String {
    let base = ALPHABET.len() as u128;
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(ALPHABET[(value % base) as usize] as char);
        value /= base;
    }
    out
}
