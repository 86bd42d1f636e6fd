//! T.61 → Unicode repertoire.
//!
//! Character set after RFC 1345 (T.61-8BIT). `#` and `$` live at 0xA6 and
//! 0xA4, not at their ASCII positions. Backslash, caret, backquote, both
//! braces and tilde do not exist at all.
//! Bytes 0xC1–0xCF (0xC9 excepted) are non-spacing accents which *precede*
//! the letter they modify. They are mapped to the 0x0300 combining block.

/// One composite row, indexed by `next & 0x1F`.
pub type CompositeRow = [char; 32];

/// Composite rows of one accent class, indexed by `next >> 5`.
///
/// Row 2 covers 0x40–0x5F (upper case), row 3 covers 0x60–0x7F (lower
/// case) and row 7 covers 0xE0–0xFF, where only Æ (0xE1) and æ (0xF1) are
/// ever populated.
pub type CompositeGroups = [Option<&'static CompositeRow>; 8];

#[allow(clippy::cast_lossless)]
const fn widen<const N: usize>(raw: [u16; N]) -> [char; N] {
    let mut out = ['\0'; N];
    let mut i = 0;
    while i < N {
        out[i] = match char::from_u32(raw[i] as u32) {
            Some(ch) => ch,
            None => '\0',
        };
        i += 1;
    }
    out
}

/// Base mapping byte → scalar value. `'\0'` marks an undefined byte.
#[rustfmt::skip]
pub static T61_TO_UNICODE: [char; 256] = widen([
    0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, // 0x00
    0x0008, 0x0009, 0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F, // 0x08
    0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, // 0x10
    0x0018, 0x0019, 0x001A, 0x001B, 0x001C, 0x001D, 0x001E, 0x001F, // 0x18
    0x0020, 0x0021, 0x0022, 0x0000, 0x0000, 0x0025, 0x0026, 0x0027, // 0x20
    0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F, // 0x28
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, // 0x30
    0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F, // 0x38
    0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, // 0x40
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, // 0x48
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, // 0x50
    0x0058, 0x0059, 0x005A, 0x005B, 0x0000, 0x005D, 0x0000, 0x005F, // 0x58
    0x0000, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, // 0x60
    0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, // 0x68
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, // 0x70
    0x0078, 0x0079, 0x007A, 0x0000, 0x007C, 0x0000, 0x0000, 0x007F, // 0x78
    0x0080, 0x0081, 0x0082, 0x0083, 0x0084, 0x0085, 0x0086, 0x0087, // 0x80
    0x0088, 0x0089, 0x008A, 0x008B, 0x008C, 0x008D, 0x008E, 0x008F, // 0x88
    0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0x0096, 0x0097, // 0x90
    0x0098, 0x0099, 0x009A, 0x009B, 0x009C, 0x009D, 0x009E, 0x009F, // 0x98
    0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x0024, 0x00A5, 0x0023, 0x00A7, // 0xA0
    0x00A4, 0x0000, 0x0000, 0x00AB, 0x0000, 0x0000, 0x0000, 0x0000, // 0xA8
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00D7, 0x00B5, 0x00B6, 0x00B7, // 0xB0
    0x00F7, 0x0000, 0x0000, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF, // 0xB8
    0x0000, 0x0300, 0x0301, 0x0302, 0x0303, 0x0304, 0x0306, 0x0307, // 0xC0
    0x0308, 0x0000, 0x030A, 0x0327, 0x0332, 0x030B, 0x0328, 0x030C, // 0xC8
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 0xD0
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 0xD8
    0x2126, 0x00C6, 0x00D0, 0x00AA, 0x0126, 0x0000, 0x0132, 0x013F, // 0xE0
    0x0141, 0x00D8, 0x0152, 0x00BA, 0x00DE, 0x0166, 0x014A, 0x0149, // 0xE8
    0x0138, 0x00E6, 0x0111, 0x00F0, 0x0127, 0x0131, 0x0133, 0x0140, // 0xF0
    0x0142, 0x00F8, 0x0153, 0x00DF, 0x00FE, 0x0167, 0x014B, 0x0000, // 0xF8
]);

/// Spacing forms used when an accent stands alone or before a space.
///
/// Indexed by accent class (low nibble of the lead byte). Underline (12)
/// has no spacing form.
#[rustfmt::skip]
pub static SPACING_ACCENTS: [char; 16] = widen([
    0x0000, 0x0060, 0x00B4, 0x005E, 0x007E, 0x00AF, 0x02D8, 0x02D9,
    0x00A8, 0x0000, 0x02DA, 0x00B8, 0x0000, 0x02DD, 0x02DB, 0x02C7,
]);

// Letters in parentheses are not T.61 pairs but still have a composite.


// Grave: AEIOU (NWY)
#[rustfmt::skip]
static GRAVE_UPPER: CompositeRow = widen([
    0x0000, 0x00C0, 0x0000, 0x0000, 0x0000, 0x00C8, 0x0000, 0x0000,
    0x0000, 0x00CC, 0x0000, 0x0000, 0x0000, 0x0000, 0x01F8, 0x00D2,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D9, 0x0000, 0x1E80,
    0x0000, 0x1EF2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static GRAVE_LOWER: CompositeRow = widen([
    0x0000, 0x00E0, 0x0000, 0x0000, 0x0000, 0x00E8, 0x0000, 0x0000,
    0x0000, 0x00EC, 0x0000, 0x0000, 0x0000, 0x0000, 0x01F9, 0x00F2,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00F9, 0x0000, 0x1E81,
    0x0000, 0x1EF3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static GRAVE: CompositeGroups = [
    None,
    None,
    Some(&GRAVE_UPPER),
    Some(&GRAVE_LOWER),
    None,
    None,
    None,
    None,
];

// Acute: AEIOUYCLNRSZ (GKMPW, Æ)
#[rustfmt::skip]
static ACUTE_UPPER: CompositeRow = widen([
    0x0000, 0x00C1, 0x0000, 0x0106, 0x0000, 0x00C9, 0x0000, 0x01F4,
    0x0000, 0x00CD, 0x0000, 0x1E30, 0x0139, 0x1E3E, 0x0143, 0x00D3,
    0x1E54, 0x0000, 0x0154, 0x015A, 0x0000, 0x00DA, 0x0000, 0x1E82,
    0x0000, 0x00DD, 0x0179, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static ACUTE_LOWER: CompositeRow = widen([
    0x0000, 0x00E1, 0x0000, 0x0107, 0x0000, 0x00E9, 0x0000, 0x01F5,
    0x0000, 0x00ED, 0x0000, 0x1E31, 0x013A, 0x1E3F, 0x0144, 0x00F3,
    0x1E55, 0x0000, 0x0155, 0x015B, 0x0000, 0x00FA, 0x0000, 0x1E83,
    0x0000, 0x00FD, 0x017A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static ACUTE_DIGRAPH: CompositeRow = widen([
    0x0000, 0x01FC, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x01FD, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static ACUTE: CompositeGroups = [
    None,
    None,
    Some(&ACUTE_UPPER),
    Some(&ACUTE_LOWER),
    None,
    None,
    None,
    Some(&ACUTE_DIGRAPH),
];

// Circumflex: AEIOUYCGHJSW (Z)
#[rustfmt::skip]
static CIRCUMFLEX_UPPER: CompositeRow = widen([
    0x0000, 0x00C2, 0x0000, 0x0108, 0x0000, 0x00CA, 0x0000, 0x011C,
    0x0124, 0x00CE, 0x0134, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D4,
    0x0000, 0x0000, 0x0000, 0x015C, 0x0000, 0x00DB, 0x0000, 0x0174,
    0x0000, 0x0176, 0x1E90, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static CIRCUMFLEX_LOWER: CompositeRow = widen([
    0x0000, 0x00E2, 0x0000, 0x0109, 0x0000, 0x00EA, 0x0000, 0x011D,
    0x0125, 0x00EE, 0x0135, 0x0000, 0x0000, 0x0000, 0x0000, 0x00F4,
    0x0000, 0x0000, 0x0000, 0x015D, 0x0000, 0x00FB, 0x0000, 0x0175,
    0x0000, 0x0177, 0x1E91, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static CIRCUMFLEX: CompositeGroups = [
    None,
    None,
    Some(&CIRCUMFLEX_UPPER),
    Some(&CIRCUMFLEX_LOWER),
    None,
    None,
    None,
    None,
];

// Tilde: AIOUN (EVY)
#[rustfmt::skip]
static TILDE_UPPER: CompositeRow = widen([
    0x0000, 0x00C3, 0x0000, 0x0000, 0x0000, 0x1EBC, 0x0000, 0x0000,
    0x0000, 0x0128, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D1, 0x00D5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0168, 0x1E7C, 0x0000,
    0x0000, 0x1EF8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static TILDE_LOWER: CompositeRow = widen([
    0x0000, 0x00E3, 0x0000, 0x0000, 0x0000, 0x1EBD, 0x0000, 0x0000,
    0x0000, 0x0129, 0x0000, 0x0000, 0x0000, 0x0000, 0x00F1, 0x00F5,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0169, 0x1E7D, 0x0000,
    0x0000, 0x1EF9, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static TILDE: CompositeGroups = [
    None,
    None,
    Some(&TILDE_UPPER),
    Some(&TILDE_LOWER),
    None,
    None,
    None,
    None,
];

// Macron: AEIOU (YG, Æ)
#[rustfmt::skip]
static MACRON_UPPER: CompositeRow = widen([
    0x0000, 0x0100, 0x0000, 0x0000, 0x0000, 0x0112, 0x0000, 0x1E20,
    0x0000, 0x012A, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x014C,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x016A, 0x0000, 0x0000,
    0x0000, 0x0232, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static MACRON_LOWER: CompositeRow = widen([
    0x0000, 0x0101, 0x0000, 0x0000, 0x0000, 0x0113, 0x0000, 0x1E21,
    0x0000, 0x012B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x014D,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x016B, 0x0000, 0x0000,
    0x0000, 0x0233, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static MACRON_DIGRAPH: CompositeRow = widen([
    0x0000, 0x01E2, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x01E3, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static MACRON: CompositeGroups = [
    None,
    None,
    Some(&MACRON_UPPER),
    Some(&MACRON_LOWER),
    None,
    None,
    None,
    Some(&MACRON_DIGRAPH),
];

// Breve: AUG (EIO)
#[rustfmt::skip]
static BREVE_UPPER: CompositeRow = widen([
    0x0000, 0x0102, 0x0000, 0x0000, 0x0000, 0x0114, 0x0000, 0x011E,
    0x0000, 0x012C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x014E,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x016C, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static BREVE_LOWER: CompositeRow = widen([
    0x0000, 0x0103, 0x0000, 0x0000, 0x0000, 0x0115, 0x0000, 0x011F,
    0x0000, 0x012D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x014F,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x016D, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static BREVE: CompositeGroups = [
    None,
    None,
    Some(&BREVE_UPPER),
    Some(&BREVE_LOWER),
    None,
    None,
    None,
    None,
];

// Dot above: CEGIZ (AOBDFHMNPRSTWXY)
#[rustfmt::skip]
static DOT_ABOVE_UPPER: CompositeRow = widen([
    0x0000, 0x0226, 0x1E02, 0x010A, 0x1E0A, 0x0116, 0x1E1E, 0x0120,
    0x1E22, 0x0130, 0x0000, 0x0000, 0x0000, 0x1E40, 0x1E44, 0x022E,
    0x1E56, 0x0000, 0x1E58, 0x1E60, 0x1E6A, 0x0000, 0x0000, 0x1E86,
    0x1E8A, 0x1E8E, 0x017B, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static DOT_ABOVE_LOWER: CompositeRow = widen([
    0x0000, 0x0227, 0x1E03, 0x010B, 0x1E0B, 0x0117, 0x1E1F, 0x0121,
    0x1E23, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E41, 0x1E45, 0x022F,
    0x1E57, 0x0000, 0x1E59, 0x1E61, 0x1E6B, 0x0000, 0x0000, 0x1E87,
    0x1E8B, 0x1E8F, 0x017C, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static DOT_ABOVE: CompositeGroups = [
    None,
    None,
    Some(&DOT_ABOVE_UPPER),
    Some(&DOT_ABOVE_LOWER),
    None,
    None,
    None,
    None,
];

// Diaeresis: AEIOUY (HWXt)
#[rustfmt::skip]
static DIAERESIS_UPPER: CompositeRow = widen([
    0x0000, 0x00C4, 0x0000, 0x0000, 0x0000, 0x00CB, 0x0000, 0x0000,
    0x1E26, 0x00CF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00D6,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00DC, 0x0000, 0x1E84,
    0x1E8C, 0x0178, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static DIAERESIS_LOWER: CompositeRow = widen([
    0x0000, 0x00E4, 0x0000, 0x0000, 0x0000, 0x00EB, 0x0000, 0x0000,
    0x1E27, 0x00EF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x00F6,
    0x0000, 0x0000, 0x0000, 0x0000, 0x1E97, 0x00FC, 0x0000, 0x1E85,
    0x1E8D, 0x00FF, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static DIAERESIS: CompositeGroups = [
    None,
    None,
    Some(&DIAERESIS_UPPER),
    Some(&DIAERESIS_LOWER),
    None,
    None,
    None,
    None,
];

// Ring above: AU (wy)
#[rustfmt::skip]
static RING_ABOVE_UPPER: CompositeRow = widen([
    0x0000, 0x00C5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x016E, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static RING_ABOVE_LOWER: CompositeRow = widen([
    0x0000, 0x00E5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x016F, 0x0000, 0x1E98,
    0x0000, 0x1E99, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static RING_ABOVE: CompositeGroups = [
    None,
    None,
    Some(&RING_ABOVE_UPPER),
    Some(&RING_ABOVE_LOWER),
    None,
    None,
    None,
    None,
];

// Cedilla: CGKLNRST (EDH)
#[rustfmt::skip]
static CEDILLA_UPPER: CompositeRow = widen([
    0x0000, 0x0000, 0x0000, 0x00C7, 0x1E10, 0x0228, 0x0000, 0x0122,
    0x1E28, 0x0000, 0x0000, 0x0136, 0x013B, 0x0000, 0x0145, 0x0000,
    0x0000, 0x0000, 0x0156, 0x015E, 0x0162, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static CEDILLA_LOWER: CompositeRow = widen([
    0x0000, 0x0000, 0x0000, 0x00E7, 0x1E11, 0x0229, 0x0000, 0x0123,
    0x1E29, 0x0000, 0x0000, 0x0137, 0x013C, 0x0000, 0x0146, 0x0000,
    0x0000, 0x0000, 0x0157, 0x015F, 0x0163, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static CEDILLA: CompositeGroups = [
    None,
    None,
    Some(&CEDILLA_UPPER),
    Some(&CEDILLA_LOWER),
    None,
    None,
    None,
    None,
];

// Double acute: OU
#[rustfmt::skip]
static DOUBLE_ACUTE_UPPER: CompositeRow = widen([
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0150,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0170, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static DOUBLE_ACUTE_LOWER: CompositeRow = widen([
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0151,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0171, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static DOUBLE_ACUTE: CompositeGroups = [
    None,
    None,
    Some(&DOUBLE_ACUTE_UPPER),
    Some(&DOUBLE_ACUTE_LOWER),
    None,
    None,
    None,
    None,
];

// Ogonek: AEIU (O)
#[rustfmt::skip]
static OGONEK_UPPER: CompositeRow = widen([
    0x0000, 0x0104, 0x0000, 0x0000, 0x0000, 0x0118, 0x0000, 0x0000,
    0x0000, 0x012E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01EA,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0172, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static OGONEK_LOWER: CompositeRow = widen([
    0x0000, 0x0105, 0x0000, 0x0000, 0x0000, 0x0119, 0x0000, 0x0000,
    0x0000, 0x012F, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x01EB,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0173, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static OGONEK: CompositeGroups = [
    None,
    None,
    Some(&OGONEK_UPPER),
    Some(&OGONEK_LOWER),
    None,
    None,
    None,
    None,
];

// Caron: CDELNRSTZ (AIOUGKjH)
#[rustfmt::skip]
static CARON_UPPER: CompositeRow = widen([
    0x0000, 0x01CD, 0x0000, 0x010C, 0x010E, 0x011A, 0x0000, 0x01E6,
    0x021E, 0x01CF, 0x0000, 0x01E8, 0x013D, 0x0000, 0x0147, 0x01D1,
    0x0000, 0x0000, 0x0158, 0x0160, 0x0164, 0x01D3, 0x0000, 0x0000,
    0x0000, 0x0000, 0x017D, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
#[rustfmt::skip]
static CARON_LOWER: CompositeRow = widen([
    0x0000, 0x01CE, 0x0000, 0x010D, 0x010F, 0x011B, 0x0000, 0x01E7,
    0x021F, 0x01D0, 0x01F0, 0x01E9, 0x013E, 0x0000, 0x0148, 0x01D2,
    0x0000, 0x0000, 0x0159, 0x0161, 0x0165, 0x01D4, 0x0000, 0x0000,
    0x0000, 0x0000, 0x017E, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
]);
static CARON: CompositeGroups = [
    None,
    None,
    Some(&CARON_UPPER),
    Some(&CARON_LOWER),
    None,
    None,
    None,
    None,
];

/// Composite tables per accent class. Classes 0, 9 and 12 have none.
pub static COMPOSITES: [Option<&'static CompositeGroups>; 16] = [
    None,
    Some(&GRAVE),
    Some(&ACUTE),
    Some(&CIRCUMFLEX),
    Some(&TILDE),
    Some(&MACRON),
    Some(&BREVE),
    Some(&DOT_ABOVE),
    Some(&DIAERESIS),
    None,
    Some(&RING_ABOVE),
    Some(&CEDILLA),
    None,
    Some(&DOUBLE_ACUTE),
    Some(&OGONEK),
    Some(&CARON),
];
