//! The fluent pattern builder
//!
//! Every composition call consumes the builder, appends to its pattern text
//! and hands it back, so calls chain:
//!
//! ```
//! use fluent_regex::start;
//!
//! let pattern = start()
//!     .match_start_of_line()
//!     .match_digit()
//!     .repeated()
//!     .one_or_more_times()
//!     .match_end_of_line();
//! assert_eq!(pattern.to_string(), r"^\d+$");
//! ```
//!
//! Nothing is validated while building. Call [`FluentRegex::is_valid`] or
//! compile the pattern to find out whether the engine accepts it.

use std::fmt;

use crate::charset::{PredefinedSet, push_escaped, render_character_set};
use crate::engine::{CompiledPattern, Match, RegexOptions};
use crate::error::{InvalidCharacterSets, Result};
use crate::repeat::Repeat;

/// A regular expression under construction
///
/// Created with [`crate::start`]. Anything that takes a sub-pattern accepts
/// either raw text or another builder, whose current text is copied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct FluentRegex {
    pattern: String,
}

impl FluentRegex {
    pub(crate) fn new() -> Self {
        FluentRegex {
            pattern: String::new(),
        }
    }

    pub(crate) fn append(mut self, text: &str) -> Self {
        self.pattern.push_str(text);
        self
    }

    fn wrap(mut self, open: &str, inner: &str, close: &str) -> Self {
        self.pattern.reserve(open.len() + inner.len() + close.len());
        self.pattern.push_str(open);
        self.pattern.push_str(inner);
        self.pattern.push_str(close);
        self
    }

    /// Does nothing; reads well between two calls
    pub fn then(self) -> Self {
        self
    }

    /// The pattern text built so far
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Consume the builder and return its pattern text
    pub fn into_string(self) -> String {
        self.pattern
    }

    /// Length of the pattern text in bytes
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// True if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    // Anchors

    /// Start of line/string `^`
    pub fn match_start_of_line(self) -> Self {
        self.append("^")
    }

    /// End of line/string `$`
    pub fn match_end_of_line(self) -> Self {
        self.append("$")
    }

    // Literals

    /// Match `text` literally, escaping reserved characters
    pub fn match_literal(mut self, text: &str) -> Self {
        self.pattern.reserve(text.len());
        for ch in text.chars() {
            push_escaped(&mut self.pattern, ch);
        }
        self
    }

    // Character sets

    /// Append a bracketed set built from predefined classes and extra characters
    ///
    /// Only one predefined class is rendered; see
    /// [`render_character_set`](crate::charset::render_character_set) for the
    /// order in which flags are tried. If no recognized flag is set the
    /// builder is returned untouched inside the error.
    pub fn match_character_sets(
        self,
        sets: PredefinedSet,
        other_chars: &[char],
    ) -> std::result::Result<Self, InvalidCharacterSets> {
        match render_character_set(sets, other_chars) {
            Some(set) => Ok(self.append(&set)),
            None => Err(InvalidCharacterSets::new(self, sets)),
        }
    }

    /// Any character `.`
    pub fn match_anything(self) -> Self {
        self.append(".")
    }

    /// Digit `\d`
    pub fn match_digit(self) -> Self {
        self.append(r"\d")
    }

    /// Non-digit `\D`
    pub fn match_non_digit(self) -> Self {
        self.append(r"\D")
    }

    /// Word character `\w`
    pub fn match_word_character(self) -> Self {
        self.append(r"\w")
    }

    /// Non-word character `\W`
    pub fn match_non_word_character(self) -> Self {
        self.append(r"\W")
    }

    /// Word boundary `\b`
    pub fn match_word_break(self) -> Self {
        self.append(r"\b")
    }

    /// Non-word boundary `\B`
    pub fn match_non_word_break(self) -> Self {
        self.append(r"\B")
    }

    /// Any letter `[a-zA-Z]`
    pub fn match_any_letter(self) -> Self {
        self.append("[a-zA-Z]")
    }

    /// Lowercase letter `[a-z]`
    pub fn match_any_lower_case_letter(self) -> Self {
        self.append("[a-z]")
    }

    /// Uppercase letter `[A-Z]`
    pub fn match_any_upper_case_letter(self) -> Self {
        self.append("[A-Z]")
    }

    /// White-space `\s`
    pub fn match_any_white_space_character(self) -> Self {
        self.append(r"\s")
    }

    /// Non-white-space `\S`
    pub fn match_any_non_white_space_character(self) -> Self {
        self.append(r"\S")
    }

    // Non-printable characters

    /// Tab `\t`
    pub fn match_tab(self) -> Self {
        self.append(r"\t")
    }

    /// Carriage return `\r`
    pub fn match_carriage_return(self) -> Self {
        self.append(r"\r")
    }

    /// ASCII bell `\a`
    pub fn match_ascii_bell_character(self) -> Self {
        self.append(r"\a")
    }

    /// ASCII escape `\e`
    pub fn match_ascii_escape_character(self) -> Self {
        self.append(r"\e")
    }

    /// Form feed `\f`
    pub fn match_form_feed(self) -> Self {
        self.append(r"\f")
    }

    /// Vertical tab `\v`
    pub fn match_vertical_tab(self) -> Self {
        self.append(r"\v")
    }

    /// Line feed; same as [`match_new_line`](Self::match_new_line)
    pub fn match_line_feed(self) -> Self {
        self.match_new_line()
    }

    /// New line `\n`
    pub fn match_new_line(self) -> Self {
        self.append(r"\n")
    }

    // Groups

    /// Capturing group `(pattern)`
    pub fn group(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("(", pattern.as_ref(), ")")
    }

    /// Named capturing group `(?<name>pattern)`
    pub fn named_group(self, pattern: impl AsRef<str>, name: &str) -> Self {
        let open = format!("(?<{}>", name);
        self.wrap(&open, pattern.as_ref(), ")")
    }

    /// Back-reference to a named group `\k<name>`
    ///
    /// The name is not checked here; the engine rejects unknown names when
    /// the pattern is compiled.
    pub fn reference_named_group(self, name: &str) -> Self {
        self.wrap(r"\k<", name, ">")
    }

    // Sets

    /// Any character in the set `[pattern]`; the contents are not escaped
    pub fn match_any_character_in_set(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("[", pattern.as_ref(), "]")
    }

    /// Any character not in the set `[^pattern]`; the contents are not escaped
    pub fn match_any_character_not_in_set(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("[^", pattern.as_ref(), "]")
    }

    /// Alternation `(first|second|...)`
    ///
    /// ```
    /// use fluent_regex::start;
    ///
    /// assert_eq!(start().match_one_of("a", "b", &["c"]).as_str(), "(a|b|c)");
    /// assert_eq!(start().match_one_of("x", "y", &[]).as_str(), "(x|y)");
    /// ```
    pub fn match_one_of<S: AsRef<str>>(mut self, first: S, second: S, rest: &[S]) -> Self {
        self.pattern.push('(');
        self.pattern.push_str(first.as_ref());
        self.pattern.push('|');
        self.pattern.push_str(second.as_ref());
        for choice in rest {
            self.pattern.push('|');
            self.pattern.push_str(choice.as_ref());
        }
        self.pattern.push(')');
        self
    }

    // Assertions

    /// Pattern must follow, but is not part of the match `(?=pattern)`
    pub fn positive_forward_assertion(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("(?=", pattern.as_ref(), ")")
    }

    /// Pattern must precede, but is not part of the match `(?<=pattern)`
    pub fn positive_backward_assertion(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("(?<=", pattern.as_ref(), ")")
    }

    /// Pattern must not follow `(?!pattern)`
    pub fn negative_forward_assertion(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("(?!", pattern.as_ref(), ")")
    }

    /// Pattern must not precede `(?<!pattern)`
    pub fn negative_backward_assertion(self, pattern: impl AsRef<str>) -> Self {
        self.wrap("(?<!", pattern.as_ref(), ")")
    }

    // Repetition

    /// Quantify the preceding element; finish with one of the [`Repeat`] calls
    pub fn repeated(self) -> Repeat {
        Repeat::new(self)
    }

    // Engine delegation

    /// Smoke-test the pattern against the engine
    ///
    /// False for an empty builder or a pattern the engine cannot compile.
    /// A compiled pattern is run once against "" and the outcome ignored, so
    /// this says nothing about whether the pattern does what was intended.
    pub fn is_valid(&self) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        match CompiledPattern::new(&self.pattern, &RegexOptions::none()) {
            Ok(compiled) => {
                let _ = compiled.is_match("");
                true
            }
            Err(_) => false,
        }
    }

    /// Compile the current pattern text
    pub fn compile(&self, options: &RegexOptions) -> Result<CompiledPattern> {
        CompiledPattern::new(&self.pattern, options)
    }

    /// Check whether the pattern is found anywhere in `subject`
    pub fn is_match(&self, subject: &str, options: &RegexOptions) -> Result<bool> {
        self.compile(options)?.is_match(subject)
    }

    /// Find all non-overlapping matches in `subject`
    pub fn find_all_matches(&self, subject: &str, options: &RegexOptions) -> Result<Vec<Match>> {
        self.compile(options)?.find_all(subject)
    }
}

impl fmt::Display for FluentRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<str> for FluentRegex {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}

impl From<FluentRegex> for String {
    fn from(builder: FluentRegex) -> Self {
        builder.pattern
    }
}
