//! Static T.61 repertoire and O(1) accessors over it.
//!
//! Every table is a fixed-size array indexed by masked or shifted bits of
//! the byte or code point. Nothing here is ever mutated, so the tables are
//! shared across threads without synchronisation.

mod forward;
mod reverse;

pub use forward::{COMPOSITES, CompositeGroups, CompositeRow, SPACING_ACCENTS, T61_TO_UNICODE};
pub use reverse::{LATIN_ADDITIONAL_ROWS, LATIN_ROWS, ReverseRow};

/// Byte written for any code point without a T.61 form.
pub const FALLBACK: u8 = b'?';

/// T.61 space. An accent followed by it stands alone.
pub const SPACE: u8 = 0x20;

/// OHM SIGN, the only code point outside the Latin blocks with a T.61 form.
pub const OHM_SIGN: char = '\u{2126}';

/// T.61 byte for [`OHM_SIGN`] (capital omega position).
pub const OHM_T61: u8 = 0xE0;

/// Base code point of a T.61 byte, `None` when the byte is undefined.
///
/// # Example
/// ```
/// use t61_core::tables::base;
/// assert_eq!(base(b'A'), Some('A'));
/// assert_eq!(base(0xA6), Some('#'));
/// assert_eq!(base(b'#'), None);
/// ```
#[inline(always)]
#[must_use]
pub fn base(byte: u8) -> Option<char> {
    let ch = T61_TO_UNICODE[usize::from(byte)];
    (ch != '\0').then_some(ch)
}

/// True when `byte` belongs to the T.61 repertoire.
#[inline(always)]
#[must_use]
pub fn is_defined(byte: u8) -> bool {
    T61_TO_UNICODE[usize::from(byte)] != '\0'
}

/// Non-spacing accent selected by a combining-lead byte (0xC1–0xCF).
///
/// The discriminant is the low nibble of the lead byte. Nibbles 0 and 9 are
/// unassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AccentClass {
    /// 0xC1, U+0300.
    Grave = 0x1,
    /// 0xC2, U+0301.
    Acute = 0x2,
    /// 0xC3, U+0302.
    Circumflex = 0x3,
    /// 0xC4, U+0303.
    Tilde = 0x4,
    /// 0xC5, U+0304.
    Macron = 0x5,
    /// 0xC6, U+0306.
    Breve = 0x6,
    /// 0xC7, U+0307.
    DotAbove = 0x7,
    /// 0xC8, U+0308.
    Diaeresis = 0x8,
    /// 0xCA, U+030A.
    RingAbove = 0xA,
    /// 0xCB, U+0327.
    Cedilla = 0xB,
    /// 0xCC, U+0332. No spacing form and no composites.
    Underline = 0xC,
    /// 0xCD, U+030B.
    DoubleAcute = 0xD,
    /// 0xCE, U+0328.
    Ogonek = 0xE,
    /// 0xCF, U+030C.
    Caron = 0xF,
}

impl AccentClass {
    /// Every assigned class, in lead-byte order.
    pub const ALL: [Self; 14] = [
        Self::Grave,
        Self::Acute,
        Self::Circumflex,
        Self::Tilde,
        Self::Macron,
        Self::Breve,
        Self::DotAbove,
        Self::Diaeresis,
        Self::RingAbove,
        Self::Cedilla,
        Self::Underline,
        Self::DoubleAcute,
        Self::Ogonek,
        Self::Caron,
    ];

    /// Class of a combining-lead byte, `None` for any other byte.
    ///
    /// # Example
    /// ```
    /// use t61_core::tables::AccentClass;
    /// assert_eq!(AccentClass::from_lead(0xC2), Some(AccentClass::Acute));
    /// assert_eq!(AccentClass::from_lead(0xC9), None);
    /// assert_eq!(AccentClass::from_lead(b'a'), None);
    /// ```
    #[must_use]
    pub const fn from_lead(byte: u8) -> Option<Self> {
        if byte & 0xF0 != 0xC0 {
            return None;
        }
        Some(match byte & 0x0F {
            0x1 => Self::Grave,
            0x2 => Self::Acute,
            0x3 => Self::Circumflex,
            0x4 => Self::Tilde,
            0x5 => Self::Macron,
            0x6 => Self::Breve,
            0x7 => Self::DotAbove,
            0x8 => Self::Diaeresis,
            0xA => Self::RingAbove,
            0xB => Self::Cedilla,
            0xC => Self::Underline,
            0xD => Self::DoubleAcute,
            0xE => Self::Ogonek,
            0xF => Self::Caron,
            _ => return None,
        })
    }

    /// Index 1–15 into the per-class tables.
    #[inline(always)]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The T.61 byte that introduces this accent.
    #[must_use]
    pub const fn lead_byte(self) -> u8 {
        0xC0 | self as u8
    }

    /// Combining mark (U+03xx) for this accent.
    #[inline(always)]
    #[must_use]
    pub fn mark(self) -> char {
        T61_TO_UNICODE[usize::from(self.lead_byte())]
    }

    /// Spacing form used when the accent has no letter to sit on.
    #[inline(always)]
    #[must_use]
    pub fn spacing(self) -> Option<char> {
        let ch = SPACING_ACCENTS[self.index()];
        (ch != '\0').then_some(ch)
    }

    /// Precomposed code point for this accent over the T.61 byte `next`.
    ///
    /// # Example
    /// ```
    /// use t61_core::tables::AccentClass;
    /// assert_eq!(AccentClass::Grave.compose(b'A'), Some('À'));
    /// assert_eq!(AccentClass::Acute.compose(0xE1), Some('Ǽ'));
    /// assert_eq!(AccentClass::Grave.compose(b'B'), None);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn compose(self, next: u8) -> Option<char> {
        let row = COMPOSITES[self.index()]?[usize::from(next >> 5)]?;
        let ch = row[usize::from(next & 0x1F)];
        (ch != '\0').then_some(ch)
    }
}

/// Decoded reverse-table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum T61Form {
    /// One T.61 byte.
    Single(u8),
    /// Accent byte followed by base byte, in T.61 order.
    Pair {
        /// Combining-lead byte.
        accent: u8,
        /// Letter the accent applies to.
        base: u8,
    },
}

impl T61Form {
    /// The `?` substitution.
    pub const FALLBACK: Self = Self::Single(FALLBACK);

    /// Split a packed `0xAAbb` / `0x00bb` table entry.
    #[must_use]
    pub const fn unpack(packed: u16) -> Self {
        let [accent, base] = packed.to_be_bytes();
        if accent == 0 {
            Self::Single(base)
        } else {
            Self::Pair { accent, base }
        }
    }
}
