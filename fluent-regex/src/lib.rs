//! Fluent Regex
//!
//! Build regular expressions from chained, self-describing calls instead of
//! raw pattern syntax, then hand the text to the `fancy-regex` engine.
//!
//! ```
//! use fluent_regex::{start, RegexOptions};
//!
//! let date = start()
//!     .named_group(start().match_digit().repeated().times(4), "year")
//!     .match_literal("-")
//!     .named_group(start().match_digit().repeated().times(2), "month");
//!
//! assert_eq!(date.as_str(), r"(?<year>\d{4})-(?<month>\d{2})");
//! assert!(date.is_match("due 2024-05", &RegexOptions::none()).unwrap());
//! ```

pub mod builder;
pub mod charset;
pub mod engine;
pub mod error;
pub mod repeat;

pub use builder::FluentRegex;
pub use charset::{PredefinedSet, RESERVED_CHARACTERS, escape_literal, needs_escaping};
pub use engine::{CompiledPattern, Match, RegexOptions};
pub use error::{FluentRegexError, InvalidCharacterSets, Result};
pub use repeat::Repeat;

/// Start a new, empty pattern
///
/// This is the only way to create a [`FluentRegex`].
pub fn start() -> FluentRegex {
    FluentRegex::new()
}
