//! Adapter over the `fancy-regex` engine
//!
//! The builder only produces pattern text. Compiling and running that text
//! is delegated to `fancy-regex`, which understands the look-around
//! assertions and named back-references the builder can emit.

use std::collections::HashMap;

use fancy_regex::{Regex, RegexBuilder};

use crate::error::{FluentRegexError, Result};

/// Options forwarded to the engine when compiling a pattern
///
/// The builder never inspects these; they are translated into inline flags
/// and engine limits when the pattern is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegexOptions {
    /// Case insensitive matching (`i`)
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries (`m`)
    pub multi_line: bool,
    /// `.` also matches `\n` (`s`)
    pub dot_matches_new_line: bool,
    /// Ignore unescaped white-space and allow `#` comments (`x`)
    pub ignore_whitespace: bool,
    /// Maximum number of backtracking steps before matching gives up
    pub backtrack_limit: Option<usize>,
}

impl RegexOptions {
    /// No options set
    pub fn none() -> Self {
        RegexOptions::default()
    }

    /// Parse options from a flag string like "imsx"
    ///
    /// Unknown letters are ignored.
    pub fn from_flags(flags: &str) -> Self {
        let mut options = RegexOptions::default();
        for c in flags.chars() {
            match c {
                'i' => options.case_insensitive = true,
                'm' => options.multi_line = true,
                's' => options.dot_matches_new_line = true,
                'x' => options.ignore_whitespace = true,
                _ => {}
            }
        }
        options
    }

    /// Set the backtrack limit
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = Some(limit);
        self
    }

    /// The inline flag group for these options, or "" when none apply
    fn inline_flags(&self) -> String {
        let mut flags = String::new();
        if self.case_insensitive {
            flags.push('i');
        }
        if self.multi_line {
            flags.push('m');
        }
        if self.dot_matches_new_line {
            flags.push('s');
        }
        if self.ignore_whitespace {
            flags.push('x');
        }
        if flags.is_empty() {
            flags
        } else {
            format!("(?{})", flags)
        }
    }
}

/// A match result
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// The start position of the match
    pub start: usize,
    /// The end position of the match (exclusive)
    pub end: usize,
    /// The matched text
    pub text: String,
    /// Positional capture groups, group 1 first; `None` if the group did not participate
    pub groups: Vec<Option<(usize, usize)>>,
    /// Named captured groups (name -> (start, end))
    pub named_groups: HashMap<String, (usize, usize)>,
}

impl Match {
    /// Get the matched text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get a capture group by index (1-based)
    pub fn group(&self, n: usize) -> Option<(usize, usize)> {
        if n == 0 {
            return None;
        }
        self.groups.get(n - 1).copied().flatten()
    }

    /// Get a named capture group
    pub fn named_group(&self, name: &str) -> Option<(usize, usize)> {
        self.named_groups.get(name).copied()
    }

    /// Get the text of a capture group
    pub fn group_str<'a>(&self, subject: &'a str, n: usize) -> Option<&'a str> {
        self.group(n).map(|(start, end)| &subject[start..end])
    }

    /// Get the text of a named capture group
    pub fn named_group_str<'a>(&self, subject: &'a str, name: &str) -> Option<&'a str> {
        self.named_group(name).map(|(start, end)| &subject[start..end])
    }

    fn from_captures(regex: &Regex, captures: &fancy_regex::Captures<'_>) -> Option<Self> {
        let whole = captures.get(0)?;

        let groups = (1..captures.len())
            .map(|i| captures.get(i).map(|m| (m.start(), m.end())))
            .collect();

        let named_groups = regex
            .capture_names()
            .enumerate()
            .filter_map(|(i, name)| {
                let name = name?;
                let m = captures.get(i)?;
                Some((name.to_string(), (m.start(), m.end())))
            })
            .collect();

        Some(Match {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            groups,
            named_groups,
        })
    }
}

/// A pattern compiled by the engine
#[derive(Debug)]
pub struct CompiledPattern {
    pattern: String,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `pattern` with `options`
    pub fn new(pattern: &str, options: &RegexOptions) -> Result<Self> {
        let source = format!("{}{}", options.inline_flags(), pattern);
        let mut builder = RegexBuilder::new(&source);
        if let Some(limit) = options.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        let regex = builder
            .build()
            .map_err(|e| FluentRegexError::Compile(e.to_string()))?;
        Ok(CompiledPattern {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern text as rendered by the builder
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Check if the pattern matches anywhere in the subject
    pub fn is_match(&self, subject: &str) -> Result<bool> {
        self.regex.is_match(subject).map_err(runtime_error)
    }

    /// Find the first match in the subject
    pub fn find(&self, subject: &str) -> Result<Option<Match>> {
        let captures = self.regex.captures(subject).map_err(runtime_error)?;
        Ok(captures.and_then(|c| Match::from_captures(&self.regex, &c)))
    }

    /// Find all non-overlapping matches
    pub fn find_all(&self, subject: &str) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for captures in self.regex.captures_iter(subject) {
            let captures = captures.map_err(runtime_error)?;
            if let Some(m) = Match::from_captures(&self.regex, &captures) {
                matches.push(m);
            }
        }
        Ok(matches)
    }
}

fn runtime_error(e: fancy_regex::Error) -> FluentRegexError {
    FluentRegexError::Runtime(e.to_string())
}
