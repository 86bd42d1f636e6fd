//! UTF-8 packing seam.
//!
//! Both transcoders measure and write scalars through these helpers only,
//! so the measuring and writing passes cannot disagree on a width.

/// Number of UTF-8 bytes `ch` occupies (1–4).
#[inline(always)]
#[must_use]
pub fn encoded_len(ch: char) -> usize {
    ch.len_utf8()
}

/// Append the UTF-8 encoding of `ch` to `out`.
#[inline(always)]
pub fn encode_into(ch: char, out: &mut String) {
    out.push(ch);
}

/// Validate `input` as UTF-8 in one go.
///
/// # Errors
/// Returns the offset of the first byte that does not start or continue a
/// well-formed sequence (overlong forms, surrogates and truncated tails
/// included).
///
/// # Example
/// ```
/// use t61_core::codec::decode;
/// assert_eq!(decode("é".as_bytes()), Ok("é"));
/// assert_eq!(decode(&[b'a', 0xC3]), Err(1));
/// ```
pub fn decode(input: &[u8]) -> Result<&str, usize> {
    std::str::from_utf8(input).map_err(|e| e.valid_up_to())
}
