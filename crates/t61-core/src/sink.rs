use crate::codec;

/// Receives the scalars produced by the T.61 → UTF-8 traversal.
///
/// Implemented by : [`Utf8Len`] (measuring pass), `String` (writing pass).
///
/// # Example
/// ```
/// use t61_core::sink::{Utf8Len, Utf8Sink};
///
/// let mut len = Utf8Len::default();
/// len.emit('é');
/// len.emit('a');
/// assert_eq!(len.bytes(), 3);
/// ```
pub trait Utf8Sink {
    /// Accepte le prochain scalaire, dans l'ordre Unicode.
    fn emit(&mut self, ch: char);
}

/// Receives the bytes produced by the UTF-8 → T.61 traversal.
///
/// Implemented by : [`T61Len`] (measuring pass), `Vec<u8>` (writing pass).
pub trait T61Sink {
    /// Accepte le prochain octet T.61.
    fn emit(&mut self, byte: u8);

    /// Insert `accent` in front of the most recently emitted byte.
    ///
    /// This is the only place where output already written is touched: a
    /// combining mark arrives after its letter in Unicode but must lead it in
    /// T.61. With nothing emitted yet the accent is simply appended.
    fn splice_before_last(&mut self, accent: u8);
}

/// Measuring sink for the UTF-8 side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utf8Len(usize);

impl Utf8Len {
    /// Octets comptés jusqu'ici.
    #[must_use]
    pub fn bytes(self) -> usize {
        self.0
    }
}

impl Utf8Sink for Utf8Len {
    #[inline(always)]
    fn emit(&mut self, ch: char) {
        self.0 += codec::encoded_len(ch);
    }
}

impl Utf8Sink for String {
    #[inline(always)]
    fn emit(&mut self, ch: char) {
        codec::encode_into(ch, self);
    }
}

/// Measuring sink for the T.61 side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct T61Len(usize);

impl T61Len {
    /// Octets comptés jusqu'ici.
    #[must_use]
    pub fn bytes(self) -> usize {
        self.0
    }
}

impl T61Sink for T61Len {
    #[inline(always)]
    fn emit(&mut self, _byte: u8) {
        self.0 += 1;
    }

    #[inline(always)]
    fn splice_before_last(&mut self, _accent: u8) {
        self.0 += 1;
    }
}

impl T61Sink for Vec<u8> {
    #[inline(always)]
    fn emit(&mut self, byte: u8) {
        self.push(byte);
    }

    fn splice_before_last(&mut self, accent: u8) {
        match self.len().checked_sub(1) {
            Some(last) => self.insert(last, accent),
            None => self.push(accent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_moves_last_byte_forward() {
        let mut out = vec![b'x', b'e'];
        out.splice_before_last(0xC2);
        assert_eq!(out, vec![b'x', 0xC2, b'e']);
    }

    #[test]
    fn splice_on_empty_appends() {
        let mut out = Vec::new();
        out.splice_before_last(0xC1);
        assert_eq!(out, vec![0xC1]);
    }

    #[test]
    fn t61_len_counts_splices_as_one_byte() {
        let mut len = T61Len::default();
        len.emit(b'e');
        len.splice_before_last(0xC2);
        assert_eq!(len.bytes(), 2);
    }

    #[test]
    fn string_sink_writes_utf8() {
        let mut out = String::new();
        Utf8Sink::emit(&mut out, '\u{2126}');
        assert_eq!(out.as_bytes(), &[0xE2, 0x84, 0xA6]);
    }
}
