//! Unicode → T.61 repertoire.
//!
//! Only the Latin blocks are covered: Basic Latin, Latin-1 Supplement,
//! Latin Extended-A/B, the spacing modifiers used as accents, the combining
//! diacritics and Latin Extended Additional. Everything else becomes `?`.
//!
//! Entries are packed: `0x00bb` is the single byte `bb`, `0xAAbb` is accent
//! byte `AA` followed by base byte `bb`.

/// 64 packed entries covering `cp & !0x3F ..= cp | 0x3F`.
pub type ReverseRow = [u16; 64];

#[rustfmt::skip]
static BASIC_LATIN_LOW: ReverseRow = [
    0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007, // U+0000
    0x0008, 0x0009, 0x000A, 0x000B, 0x000C, 0x000D, 0x000E, 0x000F, // U+0008
    0x0010, 0x0011, 0x0012, 0x0013, 0x0014, 0x0015, 0x0016, 0x0017, // U+0010
    0x0018, 0x0019, 0x001A, 0x001B, 0x001C, 0x001D, 0x001E, 0x001F, // U+0018
    0x0020, 0x0021, 0x0022, 0x00A6, 0x00A4, 0x0025, 0x0026, 0x0027, // U+0020
    0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F, // U+0028
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037, // U+0030
    0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F, // U+0038
];

// Caret, backquote and tilde only exist as accents: they are written as
// accent + space, which T.61 itself never defines as a pair.
#[rustfmt::skip]
static BASIC_LATIN_HIGH: ReverseRow = [
    0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047, // U+0040
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F, // U+0048
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057, // U+0050
    0x0058, 0x0059, 0x005A, 0x005B, 0x003F, 0x005D, 0xC320, 0x005F, // U+0058
    0xC120, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067, // U+0060
    0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, // U+0068
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, // U+0070
    0x0078, 0x0079, 0x007A, 0x003F, 0x007C, 0x003F, 0xC420, 0x007F, // U+0078
];

#[rustfmt::skip]
static LATIN1_LOW: ReverseRow = [
    0x0080, 0x0081, 0x0082, 0x0083, 0x0084, 0x0085, 0x0086, 0x0087, // U+0080
    0x0088, 0x0089, 0x008A, 0x008B, 0x008C, 0x008D, 0x008E, 0x008F, // U+0088
    0x0090, 0x0091, 0x0092, 0x0093, 0x0094, 0x0095, 0x0096, 0x0097, // U+0090
    0x0098, 0x0099, 0x009A, 0x009B, 0x009C, 0x009D, 0x009E, 0x009F, // U+0098
    0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A8, 0x00A5, 0x003F, 0x00A7, // U+00A0
    0xC820, 0x003F, 0x00E3, 0x00AB, 0x003F, 0x003F, 0x003F, 0xC520, // U+00A8
    0x00B0, 0x00B1, 0x00B2, 0x00B3, 0xC220, 0x00B5, 0x00B6, 0x00B7, // U+00B0
    0xCB20, 0x003F, 0x00EB, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF, // U+00B8
];

#[rustfmt::skip]
static LATIN1_HIGH: ReverseRow = [
    0xC141, 0xC241, 0xC341, 0xC441, 0xC841, 0xCA41, 0x00E1, 0xCB43, // U+00C0
    0xC145, 0xC245, 0xC345, 0xC845, 0xC149, 0xC249, 0xC349, 0xC849, // U+00C8
    0x00E2, 0xC44E, 0xC14F, 0xC24F, 0xC34F, 0xC44F, 0xC84F, 0x00B4, // U+00D0
    0x00E9, 0xC155, 0xC255, 0xC355, 0xC855, 0xC259, 0x00EC, 0x00FB, // U+00D8
    0xC161, 0xC261, 0xC361, 0xC461, 0xC861, 0xCA61, 0x00F1, 0xCB63, // U+00E0
    0xC165, 0xC265, 0xC365, 0xC865, 0xC169, 0xC269, 0xC369, 0xC869, // U+00E8
    0x00F3, 0xC46E, 0xC16F, 0xC26F, 0xC36F, 0xC46F, 0xC86F, 0x00B8, // U+00F0
    0x00F9, 0xC175, 0xC275, 0xC375, 0xC875, 0xC279, 0x00FC, 0xC879, // U+00F8
];

// U+0114/0115 and U+012C/012D use breve pairs T.61 does not list.
#[rustfmt::skip]
static LATIN_EXT_A_LOW: ReverseRow = [
    0xC541, 0xC561, 0xC641, 0xC661, 0xCE41, 0xCE61, 0xC243, 0xC263, // U+0100
    0xC343, 0xC363, 0xC743, 0xC763, 0xCF43, 0xCF63, 0xCF44, 0xCF64, // U+0108
    0x003F, 0x00F2, 0xC545, 0xC565, 0xC645, 0xC665, 0xC745, 0xC765, // U+0110
    0xCE45, 0xCE65, 0xCF45, 0xCF65, 0xC347, 0xC367, 0xC647, 0xC667, // U+0118
    0xC747, 0xC767, 0xCB47, 0xCB67, 0xC348, 0xC368, 0x00E4, 0x00F4, // U+0120
    0xC449, 0xC469, 0xC549, 0xC569, 0xC649, 0xC669, 0xCE49, 0xCE69, // U+0128
    0xC749, 0x00F5, 0x00E6, 0x00F6, 0xC34A, 0xC36A, 0xCB4B, 0xCB6B, // U+0130
    0x00F0, 0xC24C, 0xC26C, 0xCB4C, 0xCB6C, 0xCF4C, 0xCF6C, 0x00E7, // U+0138
];

// U+014E/014F use breve pairs T.61 does not list.
#[rustfmt::skip]
static LATIN_EXT_A_HIGH: ReverseRow = [
    0x00F7, 0x00E8, 0x00F8, 0xC24E, 0xC26E, 0xCB4E, 0xCB6E, 0xCF4E, // U+0140
    0xCF6E, 0x00EF, 0x00EE, 0x00FE, 0xC54F, 0xC56F, 0xC64F, 0xC66F, // U+0148
    0xCD4F, 0xCD6F, 0x00EA, 0x00FA, 0xC252, 0xC272, 0xCB52, 0xCB72, // U+0150
    0xCF52, 0xCF72, 0xC253, 0xC273, 0xC353, 0xC373, 0xCB53, 0xCB73, // U+0158
    0xCF53, 0xCF73, 0xCB54, 0xCB74, 0xCF54, 0xCF74, 0x00ED, 0x00FD, // U+0160
    0xC455, 0xC475, 0xC555, 0xC575, 0xC655, 0xC675, 0xCA55, 0xCA75, // U+0168
    0xCD55, 0xCD75, 0xCE55, 0xCE75, 0xC357, 0xC377, 0xC359, 0xC379, // U+0170
    0xC859, 0xC25A, 0xC27A, 0xC75A, 0xC77A, 0xCF5A, 0xCF7A, 0x003F, // U+0178
];

// Latin Extended-B: nothing here is a T.61 character.
#[rustfmt::skip]
static LATIN_EXT_B_01C0: ReverseRow = [
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+01C0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xCF41, 0xCF61, 0xCF49, // U+01C8
    0xCF69, 0xCF4F, 0xCF6F, 0xCF55, 0xCF75, 0x003F, 0x003F, 0x003F, // U+01D0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+01D8
    0x003F, 0x003F, 0xC5E1, 0xC5F1, 0x003F, 0x003F, 0xCF47, 0xCF67, // U+01E0
    0xCF4B, 0xCF6B, 0xCE4F, 0xCE6F, 0x003F, 0x003F, 0x003F, 0x003F, // U+01E8
    0xCF6A, 0x003F, 0x003F, 0x003F, 0xC247, 0xC267, 0x003F, 0x003F, // U+01F0
    0xC14E, 0xC16E, 0x003F, 0x003F, 0xC2E1, 0xC2F1, 0x003F, 0x003F, // U+01F8
];

// Latin Extended-B, upper half.
#[rustfmt::skip]
static LATIN_EXT_B_0200: ReverseRow = [
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0200
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0208
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0210
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xCF48, 0xCF68, // U+0218
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xC741, 0xC761, // U+0220
    0xCB45, 0xCB65, 0x003F, 0x003F, 0x003F, 0x003F, 0xC74F, 0xC76F, // U+0228
    0x003F, 0x003F, 0xC559, 0xC579, 0x003F, 0x003F, 0x003F, 0x003F, // U+0230
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0238
];

// Spacing modifier letters used as standalone accents.
#[rustfmt::skip]
static SPACING_MODIFIERS: ReverseRow = [
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xCF20, // U+02C0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+02C8
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+02D0
    0xC620, 0xC720, 0xCA20, 0xCE20, 0x003F, 0xCD20, 0x003F, 0x003F, // U+02D8
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+02E0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+02E8
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+02F0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+02F8
];

// Combining diacritics map to the bare accent byte. The reverse
// transcoder moves them in front of the letter they follow.
#[rustfmt::skip]
static COMBINING_DIACRITICS: ReverseRow = [
    0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x003F, 0x00C6, 0x00C7, // U+0300
    0x00C8, 0x003F, 0x00CA, 0x00CD, 0x00CF, 0x003F, 0x003F, 0x003F, // U+0308
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0310
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0318
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x00CB, // U+0320
    0x00CE, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0328
    0x003F, 0x003F, 0x00CC, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0330
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+0338
];

// Latin Extended Additional.
#[rustfmt::skip]
static LATIN_ADDITIONAL_1E00: ReverseRow = [
    0x003F, 0x003F, 0xC742, 0xC762, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E00
    0x003F, 0x003F, 0xC744, 0xC764, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E08
    0xCB44, 0xCB64, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E10
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xC746, 0xC766, // U+1E18
    0xC547, 0xC567, 0xC748, 0xC768, 0x003F, 0x003F, 0xC848, 0xC868, // U+1E20
    0xCB48, 0xCB68, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E28
    0xC24B, 0xC26B, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E30
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xC24D, 0xC26D, // U+1E38
];

#[rustfmt::skip]
static LATIN_ADDITIONAL_1E40: ReverseRow = [
    0xC74D, 0xC76D, 0x003F, 0x003F, 0xC74E, 0xC76E, 0x003F, 0x003F, // U+1E40
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E48
    0x003F, 0x003F, 0x003F, 0x003F, 0xC250, 0xC270, 0xC750, 0xC770, // U+1E50
    0xC752, 0xC772, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E58
    0xC753, 0xC773, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E60
    0x003F, 0x003F, 0xC754, 0xC774, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E68
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E70
    0x003F, 0x003F, 0x003F, 0x003F, 0xC456, 0xC476, 0x003F, 0x003F, // U+1E78
];

#[rustfmt::skip]
static LATIN_ADDITIONAL_1E80: ReverseRow = [
    0xC157, 0xC177, 0xC257, 0xC277, 0xC857, 0xC877, 0xC757, 0xC777, // U+1E80
    0x003F, 0x003F, 0xC758, 0xC778, 0xC858, 0xC878, 0xC759, 0xC779, // U+1E88
    0xC35A, 0xC37A, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0xC874, // U+1E90
    0xCA77, 0xCA79, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1E98
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EA0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EA8
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EB0
    0x003F, 0x003F, 0x003F, 0x003F, 0xC445, 0xC465, 0x003F, 0x003F, // U+1EB8
];

#[rustfmt::skip]
static LATIN_ADDITIONAL_1EC0: ReverseRow = [
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EC0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EC8
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1ED0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1ED8
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EE0
    0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EE8
    0x003F, 0x003F, 0xC159, 0xC179, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EF0
    0xC459, 0xC479, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, 0x003F, // U+1EF8
];

/// Rows for U+0000–U+03FF, indexed by `cp >> 6`.
pub static LATIN_ROWS: [Option<&'static ReverseRow>; 16] = [
    Some(&BASIC_LATIN_LOW),
    Some(&BASIC_LATIN_HIGH),
    Some(&LATIN1_LOW),
    Some(&LATIN1_HIGH),
    Some(&LATIN_EXT_A_LOW),
    Some(&LATIN_EXT_A_HIGH),
    None,
    Some(&LATIN_EXT_B_01C0),
    Some(&LATIN_EXT_B_0200),
    None,
    None,
    Some(&SPACING_MODIFIERS),
    Some(&COMBINING_DIACRITICS),
    None,
    None,
    None,
];

/// Rows for U+1E00–U+1EFF, indexed by `(cp >> 6) & 3`.
pub static LATIN_ADDITIONAL_ROWS: [&ReverseRow; 4] = [
    &LATIN_ADDITIONAL_1E00,
    &LATIN_ADDITIONAL_1E40,
    &LATIN_ADDITIONAL_1E80,
    &LATIN_ADDITIONAL_1EC0,
];
