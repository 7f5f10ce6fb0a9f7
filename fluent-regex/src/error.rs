//! Error types for the pattern builder
//!
//! Errors fall into three groups: a composition call given an unusable
//! configuration, a pattern the engine refuses to compile, and an engine
//! failure while matching.

use thiserror::Error;

use crate::builder::FluentRegex;
use crate::charset::PredefinedSet;

/// The main error type for the builder and its engine adapter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluentRegexError {
    /// A composition call was given arguments it cannot render
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The engine rejected the pattern text
    #[error("compilation error: {0}")]
    Compile(String),

    /// The engine failed while running a compiled pattern
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Returned by [`FluentRegex::match_character_sets`] when no recognized
/// class flag is present.
///
/// The builder is handed back unchanged so the caller can keep going, in the
/// same way `std::io::IntoInnerError` returns the writer.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("no recognized character class in {sets:?}")]
pub struct InvalidCharacterSets {
    builder: FluentRegex,
    sets: PredefinedSet,
}

impl InvalidCharacterSets {
    pub(crate) fn new(builder: FluentRegex, sets: PredefinedSet) -> Self {
        InvalidCharacterSets { builder, sets }
    }

    /// The flags that were rejected
    pub fn sets(&self) -> PredefinedSet {
        self.sets
    }

    /// Borrow the builder as it was before the failed call
    pub fn builder(&self) -> &FluentRegex {
        &self.builder
    }

    /// Recover the builder as it was before the failed call
    pub fn into_builder(self) -> FluentRegex {
        self.builder
    }
}

impl From<InvalidCharacterSets> for FluentRegexError {
    fn from(err: InvalidCharacterSets) -> Self {
        FluentRegexError::InvalidConfiguration(err.to_string())
    }
}

/// Result type alias for builder and engine operations
pub type Result<T> = std::result::Result<T, FluentRegexError>;
