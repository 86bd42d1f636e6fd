use std::collections::TryReserveError;

use thiserror::Error;

/// Errors originating from the transcoding core.
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// A T.61 byte (or the byte following an accent) has no mapping.
    #[error("Octet T.61 invalide 0x{byte:02X} à la position {offset}")]
    InvalidT61 {
        /// Offset of the offending byte in the input.
        offset: usize,
        /// The undefined byte value.
        byte: u8,
    },

    /// The input is not well-formed UTF-8.
    #[error("UTF-8 mal formé à la position {offset}")]
    InvalidUtf8 {
        /// Offset of the first byte that is not part of a valid sequence.
        offset: usize,
    },

    /// The output buffer could not be reserved.
    #[error("Allocation impossible : {requested} octets")]
    OutOfMemory {
        /// Exact size computed by the measuring pass.
        requested: usize,
        /// Underlying allocator failure.
        #[source]
        source: TryReserveError,
    },
}

impl TranscodeError {
    /// True for both input-side rejections, forward and reverse.
    ///
    /// Callers treat these as a hard rejection of the value, unlike
    /// [`TranscodeError::OutOfMemory`] which is a resource condition.
    #[must_use]
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, Self::InvalidT61 { .. } | Self::InvalidUtf8 { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_kinds_are_grouped() {
        assert!(TranscodeError::InvalidT61 { offset: 0, byte: 0x5C }.is_invalid_encoding());
        assert!(TranscodeError::InvalidUtf8 { offset: 3 }.is_invalid_encoding());
    }

    #[test]
    fn out_of_memory_is_not_an_encoding_fault() {
        let source = match Vec::<u8>::new().try_reserve_exact(usize::MAX) {
            Err(e) => e,
            Ok(()) => return,
        };
        let err = TranscodeError::OutOfMemory {
            requested: usize::MAX,
            source,
        };
        assert!(!err.is_invalid_encoding());
    }

    #[test]
    fn display_names_offset_and_byte() {
        let err = TranscodeError::InvalidT61 { offset: 7, byte: 0xC9 };
        let msg = err.to_string();
        assert!(msg.contains("0xC9"), "{msg}");
        assert!(msg.contains('7'), "{msg}");
    }
}
