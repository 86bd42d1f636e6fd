//! UTF-8 → T.61, lossy.
//!
//! Only the Latin blocks and the OHM SIGN have T.61 forms; every other
//! scalar becomes `?`. Malformed UTF-8 is the only failure.

use crate::codec;
use crate::error::TranscodeError;
use crate::sink::{T61Len, T61Sink};
use crate::tables::{
    FALLBACK, LATIN_ADDITIONAL_ROWS, LATIN_ROWS, OHM_SIGN, OHM_T61, T61Form,
};

/// What one scalar contributes to the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Append the form.
    Append(T61Form),
    /// Combining mark: its accent byte goes before the previous byte.
    Reorder(u8),
}

#[inline(always)]
fn classify(ch: char) -> Step {
    let cp = u32::from(ch);
    let offset = (cp & 0x3F) as usize;
    match cp >> 8 {
        0x00..=0x02 => Step::Append(
            LATIN_ROWS[(cp >> 6) as usize].map_or(T61Form::FALLBACK, |row| {
                T61Form::unpack(row[offset])
            }),
        ),
        0x03 => match LATIN_ROWS[(cp >> 6) as usize].map(|row| row[offset]) {
            Some(packed) if packed != u16::from(FALLBACK) => Step::Reorder(packed as u8),
            _ => Step::Append(T61Form::FALLBACK),
        },
        0x1E => Step::Append(T61Form::unpack(
            LATIN_ADDITIONAL_ROWS[((cp >> 6) & 3) as usize][offset],
        )),
        _ if ch == OHM_SIGN => Step::Append(T61Form::Single(OHM_T61)),
        _ => Step::Append(T61Form::FALLBACK),
    }
}

/// Shared traversal. Returns the number of scalars replaced by `?`.
fn walk<S: T61Sink>(text: &str, sink: &mut S) -> usize {
    let mut substitutions = 0;
    for ch in text.chars() {
        match classify(ch) {
            Step::Append(T61Form::Single(byte)) => {
                if byte == FALLBACK && ch != '?' {
                    substitutions += 1;
                }
                sink.emit(byte);
            }
            Step::Append(T61Form::Pair { accent, base }) => {
                sink.emit(accent);
                sink.emit(base);
            }
            Step::Reorder(accent) => sink.splice_before_last(accent),
        }
    }
    substitutions
}

/// Result of a lossy conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lossy {
    /// The T.61 bytes.
    pub bytes: Vec<u8>,
    /// Scalars that had no T.61 form and were written as `?`.
    pub substitutions: usize,
}

impl Lossy {
    /// True when nothing had to be substituted.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.substitutions == 0
    }
}

/// Exact T.61 length of the transcoding of `text` (the measuring pass).
///
/// # Example
/// ```
/// use t61_core::utf8_t61_len;
/// assert_eq!(utf8_t61_len("é"), 2);
/// assert_eq!(utf8_t61_len("日本"), 2);
/// ```
#[must_use]
pub fn utf8_t61_len(text: &str) -> usize {
    let mut len = T61Len::default();
    walk(text, &mut len);
    len.bytes()
}

/// Transcode already-validated text, reporting substitutions.
///
/// # Errors
/// [`TranscodeError::OutOfMemory`] if the output reservation fails.
pub fn str_to_t61_report(text: &str) -> Result<Lossy, TranscodeError> {
    let requested = utf8_t61_len(text);
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(requested)
        .map_err(|source| TranscodeError::OutOfMemory { requested, source })?;
    let substitutions = walk(text, &mut bytes);
    debug_assert_eq!(bytes.len(), requested, "passes de mesure et d'écriture divergentes");
    log::debug!(
        "utf8 → t61 : {} → {} octets, {substitutions} substitution(s)",
        text.len(),
        bytes.len()
    );
    Ok(Lossy {
        bytes,
        substitutions,
    })
}

/// Transcode already-validated text.
///
/// # Errors
/// [`TranscodeError::OutOfMemory`] if the output reservation fails.
///
/// # Example
/// ```
/// use t61_core::str_to_t61;
/// assert_eq!(str_to_t61("Café #1").unwrap(), b"Caf\xC2e \xA61");
/// ```
pub fn str_to_t61(text: &str) -> Result<Vec<u8>, TranscodeError> {
    str_to_t61_report(text).map(|lossy| lossy.bytes)
}

/// Transcode UTF-8 bytes, reporting substitutions.
///
/// # Errors
/// [`TranscodeError::InvalidUtf8`] if `input` is not well-formed UTF-8,
/// [`TranscodeError::OutOfMemory`] if the output reservation fails.
pub fn utf8_to_t61_report(input: &[u8]) -> Result<Lossy, TranscodeError> {
    let text = codec::decode(input).map_err(|offset| {
        log::trace!("utf8 rejeté à la position {offset}");
        TranscodeError::InvalidUtf8 { offset }
    })?;
    str_to_t61_report(text)
}

/// Transcode UTF-8 bytes into T.61. Unrepresentable scalars become `?`.
///
/// # Errors
/// [`TranscodeError::InvalidUtf8`] if `input` is not well-formed UTF-8,
/// [`TranscodeError::OutOfMemory`] if the output reservation fails.
///
/// # Example
/// ```
/// use t61_core::utf8_to_t61;
/// assert_eq!(utf8_to_t61("Ω €".as_bytes()).unwrap(), b"? ?");
/// assert_eq!(utf8_to_t61("\u{2126}".as_bytes()).unwrap(), b"\xE0");
/// ```
pub fn utf8_to_t61(input: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    utf8_to_t61_report(input).map(|lossy| lossy.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;
    use crate::to_utf8::t61_to_utf8;

    fn t61(text: &str) -> Vec<u8> {
        str_to_t61(text).unwrap()
    }

    #[test]
    fn empty_input() {
        assert!(utf8_to_t61(b"").unwrap().is_empty());
        assert_eq!(utf8_t61_len(""), 0);
    }

    #[test]
    fn ascii_holes_and_relocations() {
        assert_eq!(t61("#$"), vec![0xA6, 0xA4]);
        assert_eq!(t61("a\\b{c}"), b"a?b?c?".to_vec());
        assert_eq!(t61("^`~"), vec![0xC3, 0x20, 0xC1, 0x20, 0xC4, 0x20]);
    }

    #[test]
    fn precomposed_latin_becomes_accent_then_letter() {
        assert_eq!(t61("À"), vec![0xC1, b'A']);
        assert_eq!(t61("ő"), vec![0xCD, b'o']);
        assert_eq!(t61("Ž"), vec![0xCF, b'Z']);
        assert_eq!(t61("Ǽ"), vec![0xC2, 0xE1]);
    }

    #[test]
    fn single_byte_letters() {
        assert_eq!(t61("ÆØßþ"), vec![0xE1, 0xE9, 0xFB, 0xFC]);
        assert_eq!(t61("Łł"), vec![0xE8, 0xF8]);
    }

    #[test]
    fn latin_extended_additional() {
        assert_eq!(t61("\u{1E80}"), vec![0xC1, b'W']);
        assert_eq!(t61("\u{1EF3}"), vec![0xC1, b'y']);
        assert_eq!(t61("\u{1E00}"), vec![FALLBACK]);
    }

    #[test]
    fn combining_mark_moves_before_its_letter() {
        assert_eq!(t61("e\u{0301}"), vec![0xC2, b'e']);
        assert_eq!(t61("xa\u{030C}y"), vec![b'x', 0xCF, b'a', b'y']);
    }

    #[test]
    fn combining_mark_at_start_stands_alone() {
        assert_eq!(t61("\u{0301}"), vec![0xC2]);
    }

    #[test]
    fn combining_mark_without_form_is_fallback_without_reorder() {
        // U+0305 combining overline: no T.61 accent
        assert_eq!(t61("a\u{0305}"), vec![b'a', FALLBACK]);
        // U+0370 lies in block 0x03 but has no row
        assert_eq!(t61("a\u{0370}"), vec![b'a', FALLBACK]);
    }

    #[test]
    fn ohm_sign_is_not_block_fallback() {
        assert_eq!(t61("\u{2126}"), vec![OHM_T61]);
        assert_eq!(t61("\u{2122}"), vec![FALLBACK]);
        // Greek capital omega is a different scalar
        assert_eq!(t61("\u{03A9}"), vec![FALLBACK]);
    }

    #[test]
    fn unknown_blocks_fall_back() {
        for ch in ['\u{0400}', '\u{05D0}', '\u{20AC}', '\u{4E2D}', '\u{1F600}', '\u{1F00}'] {
            assert_eq!(t61(&ch.to_string()), vec![FALLBACK], "U+{:04X}", u32::from(ch));
        }
    }

    #[test]
    fn latin_ext_b_without_row_falls_back() {
        // U+0180–U+01BF and U+0240–U+02BF have no row
        assert_eq!(t61("\u{0180}\u{0250}"), vec![FALLBACK, FALLBACK]);
    }

    #[test]
    fn substitutions_are_counted() {
        let lossy = utf8_to_t61_report("a€b?日".as_bytes()).unwrap();
        assert_eq!(lossy.bytes, b"a?b??".to_vec());
        assert_eq!(lossy.substitutions, 2);
        assert!(!lossy.is_exact());
        assert!(utf8_to_t61_report(b"plain?").unwrap().is_exact());
    }

    #[test]
    fn malformed_utf8_is_rejected() {
        let err = utf8_to_t61(&[b'o', b'k', 0xFF]).unwrap_err();
        assert!(matches!(err, TranscodeError::InvalidUtf8 { offset: 2 }));
        assert!(err.is_invalid_encoding());
        assert!(utf8_to_t61(&[0xE2, 0x84]).is_err());
    }

    #[test]
    fn ordinary_bytes_round_trip_exactly() {
        let ordinary: Vec<u8> = (0..=255u8)
            .filter(|&b| tables::is_defined(b) && tables::AccentClass::from_lead(b).is_none())
            .collect();
        let utf8 = t61_to_utf8(&ordinary).unwrap();
        assert_eq!(utf8_to_t61(&utf8).unwrap(), ordinary);
    }

    #[test]
    fn composed_pairs_round_trip() {
        let input = b"\xC1A\xC2e\xC3o\xC4n\xC8u\xCAa\xCBc\xCDo\xCEe\xCFs";
        let utf8 = t61_to_utf8(input).unwrap();
        assert_eq!(utf8_to_t61(&utf8).unwrap(), input.to_vec());
    }

    #[test]
    fn reordered_pair_round_trips_through_splice() {
        // grave + B has no composite: B U+0300 comes back as C1 B
        let utf8 = t61_to_utf8(b"\xC1B").unwrap();
        assert_eq!(utf8_to_t61(&utf8).unwrap(), b"\xC1B".to_vec());
    }

    #[test]
    fn measured_length_matches_written_length() {
        let mut rng = fastrand::Rng::with_seed(0x61);
        let ranges = [0x20..0x250, 0x300..0x370, 0x1E00..0x1F00, 0x2100..0x2130, 0x4E00..0x4E10];
        for _ in 0..5_000 {
            let len = rng.usize(0..24);
            let text: String = (0..len)
                .filter_map(|_| {
                    let range = ranges[rng.usize(..ranges.len())].clone();
                    char::from_u32(rng.u32(range))
                })
                .collect();
            let lossy = str_to_t61_report(&text).unwrap();
            assert_eq!(utf8_t61_len(&text), lossy.bytes.len(), "{text:?}");
        }
    }

    #[test]
    fn well_formed_input_never_fails() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..2_000 {
            let text: String = (0..16).map(|_| rng.char(..)).collect();
            assert!(utf8_to_t61(text.as_bytes()).is_ok());
        }
    }
}
