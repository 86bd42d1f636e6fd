use serde::{Deserialize, Serialize};

use crate::error::TranscodeError;

/// Sens de conversion.
///
/// # Example
/// ```
/// use t61_core::Direction;
/// let direction = Direction::default();
/// assert!(matches!(direction, Direction::T61ToUtf8));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Direction {
    /// T.61 → UTF-8, lossless.
    #[default]
    T61ToUtf8,
    /// UTF-8 → T.61, lossy.
    Utf8ToT61,
}

impl Direction {
    /// Parse a command-line name (`t61-to-utf8`, `utf8-to-t61`).
    ///
    /// # Example
    /// ```
    /// use t61_core::Direction;
    /// assert_eq!(Direction::from_name("utf8-to-t61"), Some(Direction::Utf8ToT61));
    /// assert_eq!(Direction::from_name("latin1"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "t61-to-utf8" | "decode" => Some(Self::T61ToUtf8),
            "utf8-to-t61" | "encode" => Some(Self::Utf8ToT61),
            _ => None,
        }
    }

    /// Nom lisible, inverse de [`Direction::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::T61ToUtf8 => "t61-to-utf8",
            Self::Utf8ToT61 => "utf8-to-t61",
        }
    }
}

/// Run the transcoder for `direction` over `input`.
///
/// # Errors
/// Whatever the selected transcoder returns.
///
/// # Example
/// ```
/// use t61_core::{Direction, transcode};
/// let utf8 = transcode(Direction::T61ToUtf8, b"\xC8u").unwrap();
/// assert_eq!(utf8, "ü".as_bytes());
/// assert_eq!(transcode(Direction::Utf8ToT61, &utf8).unwrap(), b"\xC8u");
/// ```
pub fn transcode(direction: Direction, input: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    match direction {
        Direction::T61ToUtf8 => crate::t61_to_utf8(input),
        Direction::Utf8ToT61 => crate::utf8_to_t61(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for direction in [Direction::T61ToUtf8, Direction::Utf8ToT61] {
            assert_eq!(Direction::from_name(direction.name()), Some(direction));
        }
    }

    #[test]
    fn dispatch_reports_the_right_error_kind() {
        assert!(matches!(
            transcode(Direction::T61ToUtf8, b"~"),
            Err(TranscodeError::InvalidT61 { .. })
        ));
        assert!(matches!(
            transcode(Direction::Utf8ToT61, &[0xFF]),
            Err(TranscodeError::InvalidUtf8 { .. })
        ));
    }
}
