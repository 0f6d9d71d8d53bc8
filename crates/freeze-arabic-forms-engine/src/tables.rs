//! Joining classification for the Arabic, Arabic Supplement and Arabic
//! Extended-A blocks.
//!
//! Membership is listed as sorted inclusive ranges and baked at compile time
//! into a flat lookup table indexed by the offset of the codepoint from
//! U+0600, so classifying a character is a bounds check plus one load.

/// Joining behaviour of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Combining vowel or diacritic. Transparent to joining.
    Mark,
    /// Letter that connects on both sides (isolated, initial, medial, final forms).
    DualJoining,
    /// Letter that only connects to the preceding letter (isolated, final forms).
    RightJoining,
    /// Anything not covered by the tables.
    #[default]
    Other,
}

impl Category {
    /// Whether this is a letter taking part in joining.
    pub fn is_joining(self) -> bool {
        matches!(self, Category::DualJoining | Category::RightJoining)
    }
}

const BLOCK_START: u32 = 0x0600;
const BLOCK_END: u32 = 0x08FF;
const BLOCK_LEN: usize = (BLOCK_END - BLOCK_START + 1) as usize;

const MARK_RANGES: &[(u32, u32)] = &[
    (0x0610, 0x061A), // Honorifics and small high marks
    (0x064B, 0x065F), // Tanween, harakat, shadda, sukun and friends
    (0x0670, 0x0670), // Superscript alef
    (0x06D6, 0x06DC), // Small high ligatures
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
    (0x08D3, 0x08E1), // Extended-A marks
    (0x08E3, 0x08FF),
];

const DUAL_JOINING_RANGES: &[(u32, u32)] = &[
    (0x0620, 0x0620), // Kashmiri yeh
    (0x0626, 0x0626), // Yeh with hamza above
    (0x0628, 0x0628), // Beh
    (0x062A, 0x062E), // Teh .. Khah
    (0x0633, 0x063F), // Seen .. Farsi yeh with three dots above
    (0x0641, 0x0647), // Feh .. Heh
    (0x0649, 0x064A), // Alef maksura, Yeh
    (0x066E, 0x066F), // Dotless beh, dotless qaf
    (0x0678, 0x0687),
    (0x069A, 0x06BF),
    (0x06C1, 0x06C2), // Heh goal
    (0x06CC, 0x06CC), // Farsi yeh
    (0x06CE, 0x06CE),
    (0x06D0, 0x06D1),
    (0x06FA, 0x06FC),
    (0x06FF, 0x06FF), // Heh with inverted v
    (0x0750, 0x0758), // Arabic Supplement
    (0x075C, 0x076A),
    (0x076D, 0x0770),
    (0x0772, 0x0772),
    (0x0775, 0x0777),
    (0x077A, 0x077F),
    (0x08A0, 0x08A9), // Arabic Extended-A
    (0x08AF, 0x08B0),
    (0x08B3, 0x08B4),
    (0x08B6, 0x08B8),
    (0x08BA, 0x08BD),
];

const RIGHT_JOINING_RANGES: &[(u32, u32)] = &[
    (0x0622, 0x0625), // Alef with madda, hamza forms, waw with hamza
    (0x0627, 0x0627), // Alef
    (0x0629, 0x0629), // Teh marbuta
    (0x062F, 0x0632), // Dal, Thal, Reh, Zain
    (0x0648, 0x0648), // Waw
    (0x0671, 0x0673), // Alef wasla and variants
    (0x0675, 0x0677),
    (0x0688, 0x0699), // Dal and reh variants
    (0x06C0, 0x06C0),
    (0x06C3, 0x06CB), // Teh marbuta goal, waw variants
    (0x06CD, 0x06CD),
    (0x06CF, 0x06CF),
    (0x06D2, 0x06D3), // Yeh barree
    (0x06D5, 0x06D5), // Ae
    (0x06EE, 0x06EF),
    (0x0759, 0x075B), // Arabic Supplement
    (0x076B, 0x076C),
    (0x0771, 0x0771),
    (0x0773, 0x0774),
    (0x0778, 0x0779),
    (0x08AA, 0x08AC), // Arabic Extended-A
    (0x08AE, 0x08AE),
    (0x08B1, 0x08B2),
    (0x08B9, 0x08B9),
];

static TABLE: [Category; BLOCK_LEN] = build_table();

const fn build_table() -> [Category; BLOCK_LEN] {
    let mut table = [Category::Other; BLOCK_LEN];
    fill(&mut table, MARK_RANGES, Category::Mark);
    fill(&mut table, DUAL_JOINING_RANGES, Category::DualJoining);
    fill(&mut table, RIGHT_JOINING_RANGES, Category::RightJoining);
    table
}

const fn fill(table: &mut [Category; BLOCK_LEN], ranges: &[(u32, u32)], category: Category) {
    let mut i = 0;
    while i < ranges.len() {
        let (start, end) = ranges[i];
        let mut code = start;
        while code <= end {
            table[(code - BLOCK_START) as usize] = category;
            code += 1;
        }
        i += 1;
    }
}

/// Classify a codepoint.
#[inline]
pub fn category(c: char) -> Category {
    let code = c as u32;
    if (BLOCK_START..=BLOCK_END).contains(&code) {
        TABLE[(code - BLOCK_START) as usize]
    } else {
        Category::Other
    }
}

/// Combining vowel or diacritic.
#[inline]
pub fn is_mark(c: char) -> bool {
    category(c) == Category::Mark
}

#[inline]
pub fn is_dual_joining(c: char) -> bool {
    category(c) == Category::DualJoining
}

#[inline]
pub fn is_right_joining(c: char) -> bool {
    category(c) == Category::RightJoining
}

/// Dual- or right-joining letter.
#[inline]
pub fn is_joining(c: char) -> bool {
    category(c).is_joining()
}
