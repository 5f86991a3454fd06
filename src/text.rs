//! Text display width utilities for CJK/ASCII column budgeting
//!
//! Width is a binary model: every Unicode scalar value is either narrow (1
//! column) or wide (2 columns). Scalars are measured one at a time, so
//! combining marks and multi-codepoint emoji are counted per codepoint.

use unicode_width::UnicodeWidthChar;

/// First scalar of the CJK Unified Ideographs block
const CJK_START: char = '\u{4E00}';
/// Last scalar of the CJK Unified Ideographs block
const CJK_END: char = '\u{9FFF}';

/// How a scalar value is classified as narrow or wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthPolicy {
    /// Only CJK Unified Ideographs (U+4E00..=U+9FFF) are wide
    #[default]
    CjkIdeographs,
    /// Wide when Unicode East Asian Width says the scalar takes two cells
    EastAsian,
}

impl WidthPolicy {
    /// Display width of a single scalar: 1 or 2
    pub fn char_width(self, c: char) -> usize {
        match self {
            WidthPolicy::CjkIdeographs => {
                if is_cjk_ideograph(c) {
                    2
                } else {
                    1
                }
            }
            WidthPolicy::EastAsian => match UnicodeWidthChar::width(c) {
                Some(2) => 2,
                _ => 1,
            },
        }
    }

    /// Sum of per-scalar widths
    pub fn str_width(self, s: &str) -> usize {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

/// Whether `c` falls in the CJK Unified Ideographs block
pub fn is_cjk_ideograph(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// Return the display width of a string under the default policy.
pub fn display_width(s: &str) -> usize {
    WidthPolicy::default().str_width(s)
}
