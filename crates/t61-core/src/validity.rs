use crate::tables;

/// True when every byte of `input` is in the T.61 repertoire.
///
/// Vacuously true for an empty string. Never allocates.
///
/// # Example
/// ```
/// use t61_core::t61_is_valid;
/// assert!(t61_is_valid(b""));
/// assert!(t61_is_valid(b"\xC2e"));
/// assert!(!t61_is_valid(b"a{b}"));
/// ```
#[must_use]
pub fn t61_is_valid(input: &[u8]) -> bool {
    input.iter().all(|&b| tables::is_defined(b))
}

/// Offset of the first byte outside the repertoire, if any.
///
/// # Example
/// ```
/// use t61_core::first_invalid_t61;
/// assert_eq!(first_invalid_t61(b"ab~"), Some(2));
/// assert_eq!(first_invalid_t61(b"abc"), None);
/// ```
#[must_use]
pub fn first_invalid_t61(input: &[u8]) -> Option<usize> {
    input.iter().position(|&b| !tables::is_defined(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_holes_are_rejected() {
        for byte in [b'#', b'$', b'\\', b'^', b'`', b'{', b'}', b'~'] {
            assert!(!t61_is_valid(&[b'a', byte]), "{} accepté", byte as char);
        }
    }

    #[test]
    fn nul_is_not_t61() {
        assert!(!t61_is_valid(&[0x00]));
        assert_eq!(first_invalid_t61(&[b'a', 0x00]), Some(1));
    }

    #[test]
    fn relocated_hash_and_dollar_are_accepted() {
        assert!(t61_is_valid(&[0xA6, 0xA4]));
    }

    #[test]
    fn dangling_accent_is_valid() {
        assert!(t61_is_valid(&[b'x', 0xC8]));
    }

    #[test]
    fn agrees_with_first_invalid() {
        for byte in 0..=255u8 {
            let input = [b'a', byte, b'z'];
            assert_eq!(t61_is_valid(&input), first_invalid_t61(&input).is_none());
        }
    }
}
