//! T.61 → UTF-8, lossless over the T.61 repertoire.
//!
//! T.61 writes an accent *before* its letter. Known pairs become one
//! precomposed scalar; unknown pairs are reordered to letter + combining
//! mark, which is the Unicode order.

use crate::error::TranscodeError;
use crate::sink::{Utf8Len, Utf8Sink};
use crate::tables::{self, AccentClass, SPACE};

/// Single traversal shared by the measuring and writing passes.
///
/// Consumes one byte for an ordinary character and two for an accent
/// followed by anything, except an accent at the very end of the input.
fn walk<S: Utf8Sink>(input: &[u8], sink: &mut S) -> Result<(), TranscodeError> {
    let mut i = 0;
    while i < input.len() {
        let byte = input[i];
        let ch = tables::base(byte).ok_or(TranscodeError::InvalidT61 { offset: i, byte })?;

        let Some(accent) = AccentClass::from_lead(byte) else {
            sink.emit(ch);
            i += 1;
            continue;
        };

        let next = input.get(i + 1).copied();
        match (next, accent.spacing()) {
            (None | Some(SPACE), Some(spacing)) => {
                sink.emit(spacing);
                i += 2;
            }
            // Underline has no spacing form: keep the bare mark.
            (None, None) => {
                sink.emit(ch);
                i += 1;
            }
            (Some(next), _) => {
                let letter = tables::base(next).ok_or(TranscodeError::InvalidT61 {
                    offset: i + 1,
                    byte: next,
                })?;
                if let Some(composed) = accent.compose(next) {
                    sink.emit(composed);
                } else {
                    sink.emit(letter);
                    sink.emit(ch);
                }
                i += 2;
            }
        }
    }
    Ok(())
}

/// Exact UTF-8 length of the transcoding of `input` (the measuring pass).
///
/// # Errors
/// [`TranscodeError::InvalidT61`] on the first undefined byte.
///
/// # Example
/// ```
/// use t61_core::t61_utf8_len;
/// assert_eq!(t61_utf8_len(b"\xC1A").unwrap(), 2);
/// ```
pub fn t61_utf8_len(input: &[u8]) -> Result<usize, TranscodeError> {
    let mut len = Utf8Len::default();
    walk(input, &mut len).inspect_err(|e| log::trace!("t61 rejeté : {e}"))?;
    Ok(len.bytes())
}

/// Transcode T.61 into an owned `String`.
///
/// The output buffer is reserved once, at the size computed by the
/// measuring pass, before anything is written.
///
/// # Errors
/// [`TranscodeError::InvalidT61`] for bytes outside the repertoire,
/// [`TranscodeError::OutOfMemory`] if the reservation fails.
///
/// # Example
/// ```
/// use t61_core::t61_to_string;
/// assert_eq!(t61_to_string(b"Caf\xC2e").unwrap(), "Café");
/// assert_eq!(t61_to_string(b"\xA6 1").unwrap(), "# 1");
/// ```
pub fn t61_to_string(input: &[u8]) -> Result<String, TranscodeError> {
    let requested = t61_utf8_len(input)?;
    let mut out = String::new();
    out.try_reserve_exact(requested)
        .map_err(|source| TranscodeError::OutOfMemory { requested, source })?;
    walk(input, &mut out)?;
    debug_assert_eq!(out.len(), requested, "passes de mesure et d'écriture divergentes");
    log::debug!("t61 → utf8 : {} → {} octets", input.len(), out.len());
    Ok(out)
}

/// Transcode T.61 into UTF-8 bytes.
///
/// # Errors
/// Same as [`t61_to_string`].
///
/// # Example
/// ```
/// use t61_core::t61_to_utf8;
/// assert_eq!(t61_to_utf8(b"\xC2").unwrap(), "\u{B4}".as_bytes());
/// ```
pub fn t61_to_utf8(input: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    t61_to_string(input).map(String::into_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8(input: &[u8]) -> String {
        t61_to_string(input).unwrap()
    }

    #[test]
    fn empty_input() {
        assert_eq!(utf8(b""), "");
        assert_eq!(t61_utf8_len(b"").unwrap(), 0);
    }

    #[test]
    fn ordinary_bytes_map_through_the_base_table() {
        for byte in 0..=255u8 {
            if AccentClass::from_lead(byte).is_some() {
                continue;
            }
            if let Some(ch) = tables::base(byte) {
                assert_eq!(utf8(&[byte]), ch.to_string(), "octet 0x{byte:02X}");
            }
        }
    }

    #[test]
    fn relocated_symbols() {
        assert_eq!(utf8(&[0xA6, 0xA4, 0xA8]), "#$¤");
        assert_eq!(utf8(&[0xB4, 0xB8]), "×÷");
        assert_eq!(utf8(&[0xE0]), "\u{2126}");
    }

    #[test]
    fn accent_at_end_is_spacing() {
        assert_eq!(utf8(&[0xC2]), "\u{00B4}");
        assert_eq!(utf8(&[b'a', 0xCF]), "a\u{02C7}");
    }

    #[test]
    fn accent_before_space_is_spacing() {
        assert_eq!(utf8(&[0xC1, b' ', b'x']), "`x");
        assert_eq!(utf8(&[0xC8, b' ']), "\u{00A8}");
    }

    #[test]
    fn known_pairs_compose() {
        assert_eq!(utf8(&[0xC1, b'A']), "À");
        assert_eq!(utf8(&[0xC2, b'e']), "é");
        assert_eq!(utf8(&[0xCB, b'c']), "ç");
        assert_eq!(utf8(&[0xCF, b'S']), "Š");
        assert_eq!(utf8(&[0xC5, 0xF1]), "\u{01E3}");
        assert_eq!(utf8(&[0xC8, b't']), "\u{1E97}");
    }

    #[test]
    fn unknown_pairs_reorder_letter_first() {
        // no grave composite for B
        assert_eq!(utf8(&[0xC1, b'B']), "B\u{0300}");
        // caron over a digit
        assert_eq!(utf8(&[0xCF, b'1']), "1\u{030C}");
        // relocated base still goes through the base table
        assert_eq!(utf8(&[0xC2, 0xA6]), "#\u{0301}");
    }

    #[test]
    fn underline_has_no_spacing_form() {
        assert_eq!(utf8(&[0xCC]), "\u{0332}");
        assert_eq!(utf8(&[0xCC, b' ']), " \u{0332}");
        assert_eq!(utf8(&[0xCC, b'a']), "a\u{0332}");
    }

    #[test]
    fn accent_consumes_following_accent() {
        assert_eq!(utf8(&[0xC1, 0xC2, b'a']), "\u{0301}\u{0300}a");
    }

    #[test]
    fn undefined_byte_is_rejected_with_offset() {
        let err = t61_to_utf8(b"ab{").unwrap_err();
        assert!(matches!(err, TranscodeError::InvalidT61 { offset: 2, byte: b'{' }));
        assert!(err.is_invalid_encoding());
    }

    #[test]
    fn undefined_following_byte_is_rejected() {
        let err = t61_to_utf8(&[b'x', 0xC2, b'~']).unwrap_err();
        assert!(matches!(err, TranscodeError::InvalidT61 { offset: 2, byte: b'~' }));
    }

    #[test]
    fn reserved_lead_bytes_are_rejected() {
        assert!(t61_to_utf8(&[0xC0, b'a']).is_err());
        assert!(t61_to_utf8(&[0xC9, b'a']).is_err());
    }

    #[test]
    fn validity_predicts_success() {
        let mut rng = fastrand::Rng::with_seed(0x7461);
        for _ in 0..2_000 {
            let len = rng.usize(0..12);
            let input: Vec<u8> = (0..len).map(|_| rng.u8(..)).collect();
            assert_eq!(
                crate::t61_is_valid(&input),
                t61_to_utf8(&input).is_ok(),
                "{input:02X?}"
            );
        }
    }

    #[test]
    fn measured_length_matches_written_length() {
        let defined: Vec<u8> = (0..=255u8).filter(|&b| tables::is_defined(b)).collect();
        let mut rng = fastrand::Rng::with_seed(61);
        for _ in 0..5_000 {
            let len = rng.usize(0..32);
            let input: Vec<u8> = (0..len).map(|_| defined[rng.usize(..defined.len())]).collect();
            let measured = t61_utf8_len(&input).unwrap();
            let written = t61_to_utf8(&input).unwrap();
            assert_eq!(measured, written.len(), "{input:02X?}");
        }
    }
}
