//! Predefined character classes and escaping rules
//!
//! Literal text and the extra members of a custom character set are escaped
//! against a fixed set of reserved characters. Predefined classes are
//! combined as bit flags, but only one of them is rendered per call, chosen
//! by a fixed precedence order (see [`render_character_set`]).

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Characters that carry meaning in pattern syntax and must be escaped to
/// be matched literally
pub const RESERVED_CHARACTERS: &str = r"^$[](){}.|*+?\";

/// Check whether a character must be escaped to be matched literally
pub fn needs_escaping(ch: char) -> bool {
    RESERVED_CHARACTERS.contains(ch)
}

/// Append `ch` to `out`, prefixed with a backslash when it is reserved
pub(crate) fn push_escaped(out: &mut String, ch: char) {
    if needs_escaping(ch) {
        out.push('\\');
    }
    out.push(ch);
}

/// Escape every reserved character in `text`
///
/// # Example
/// ```
/// use fluent_regex::escape_literal;
///
/// assert_eq!(escape_literal("a.b"), r"a\.b");
/// ```
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        push_escaped(&mut out, ch);
    }
    out
}

/// A set of predefined character classes
///
/// Flags combine with `|`. The numeric values are stable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PredefinedSet(u16);

impl PredefinedSet {
    /// Any character `.`
    pub const ANY_CHARACTER: PredefinedSet = PredefinedSet(1);
    /// White-space `\s`
    pub const WHITE_SPACE: PredefinedSet = PredefinedSet(2);
    /// Non-white-space `\S`
    pub const NON_WHITE_SPACE: PredefinedSet = PredefinedSet(4);
    /// Digit `\d`
    pub const DIGIT: PredefinedSet = PredefinedSet(8);
    /// Non-digit `\D`
    pub const NON_DIGIT: PredefinedSet = PredefinedSet(16);
    /// Word character `\w`
    pub const WORD_CHARACTER: PredefinedSet = PredefinedSet(32);
    /// Non-word character `\W`
    pub const NON_WORD_CHARACTER: PredefinedSet = PredefinedSet(64);
    /// Word boundary `\b`
    pub const WORD_BREAK: PredefinedSet = PredefinedSet(128);
    /// Non-word boundary `\B`
    pub const NON_WORD_BREAK: PredefinedSet = PredefinedSet(256);
    /// Lowercase letter `a-z`
    pub const LOWER_CASE_LETTER: PredefinedSet = PredefinedSet(512);
    /// Uppercase letter `A-Z`
    pub const UPPER_CASE_LETTER: PredefinedSet = PredefinedSet(1024);
    /// Lowercase or uppercase letter
    pub const ANY_LETTER: PredefinedSet = PredefinedSet(512 | 1024);

    const NAMED: [(PredefinedSet, &'static str); 11] = [
        (Self::ANY_CHARACTER, "AnyCharacter"),
        (Self::WHITE_SPACE, "WhiteSpace"),
        (Self::NON_WHITE_SPACE, "NonWhiteSpace"),
        (Self::DIGIT, "Digit"),
        (Self::NON_DIGIT, "NonDigit"),
        (Self::WORD_CHARACTER, "WordCharacter"),
        (Self::NON_WORD_CHARACTER, "NonWordCharacter"),
        (Self::WORD_BREAK, "WordBreak"),
        (Self::NON_WORD_BREAK, "NonWordBreak"),
        (Self::LOWER_CASE_LETTER, "LowerCaseLetter"),
        (Self::UPPER_CASE_LETTER, "UpperCaseLetter"),
    ];

    const ALL_BITS: u16 = 0b111_1111_1111;

    /// The set with no flags
    pub const fn empty() -> Self {
        PredefinedSet(0)
    }

    /// Build a set from raw bits, dropping unknown ones
    pub const fn from_bits_truncate(bits: u16) -> Self {
        PredefinedSet(bits & Self::ALL_BITS)
    }

    /// The raw bits
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True if no flag is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag of `other` is set in `self`
    pub const fn contains(self, other: PredefinedSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share at least one flag
    pub const fn intersects(self, other: PredefinedSet) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for PredefinedSet {
    type Output = PredefinedSet;

    fn bitor(self, rhs: PredefinedSet) -> PredefinedSet {
        PredefinedSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for PredefinedSet {
    fn bitor_assign(&mut self, rhs: PredefinedSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for PredefinedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PredefinedSet(")?;
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.intersects(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        if first {
            write!(f, "empty")?;
        }
        write!(f, ")")
    }
}

/// Render a bracketed character set for `sets` plus `other_chars`
///
/// Flags are not unioned. The first flag found in this order wins and the
/// rest are ignored:
///
/// 1. any character: `[.]`
/// 2. digit: `[\d]`
/// 3. lowercase letter: `[a-z]`
/// 4. non-digit, non-white-space, non-word-break, non-word-character,
///    uppercase letter, white-space, word-break, word-character
///
/// Only the fourth group appends `other_chars`, each escaped if reserved.
/// Returns `None` when none of the flags is set.
pub fn render_character_set(sets: PredefinedSet, other_chars: &[char]) -> Option<String> {
    if sets.intersects(PredefinedSet::ANY_CHARACTER) {
        return Some("[.]".to_string());
    }
    if sets.intersects(PredefinedSet::DIGIT) {
        return Some(r"[\d]".to_string());
    }
    if sets.intersects(PredefinedSet::LOWER_CASE_LETTER) {
        return Some("[a-z]".to_string());
    }

    const FALLBACK_ORDER: [(PredefinedSet, &str); 8] = [
        (PredefinedSet::NON_DIGIT, r"\D"),
        (PredefinedSet::NON_WHITE_SPACE, r"\S"),
        (PredefinedSet::NON_WORD_BREAK, r"\B"),
        (PredefinedSet::NON_WORD_CHARACTER, r"\W"),
        (PredefinedSet::UPPER_CASE_LETTER, "A-Z"),
        (PredefinedSet::WHITE_SPACE, r"\s"),
        (PredefinedSet::WORD_BREAK, r"\b"),
        (PredefinedSet::WORD_CHARACTER, r"\w"),
    ];

    let (_, class) = FALLBACK_ORDER
        .iter()
        .find(|(flag, _)| sets.intersects(*flag))?;

    let mut out = String::with_capacity(2 + class.len() + other_chars.len() * 2);
    out.push('[');
    out.push_str(class);
    for &ch in other_chars {
        push_escaped(&mut out, ch);
    }
    out.push(']');
    Some(out)
}
