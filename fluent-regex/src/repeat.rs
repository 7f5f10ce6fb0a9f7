//! Quantifiers for the preceding element
//!
//! [`FluentRegex::repeated`] hands the builder to a [`Repeat`], and each
//! quantifier call appends its suffix and hands the builder back. Bounds are
//! written out as given; inverted or oversized bounds are left for the
//! engine to reject.

use crate::builder::FluentRegex;

/// A pending quantifier on a [`FluentRegex`]
#[derive(Debug, Clone)]
#[must_use = "a quantifier must be chosen to get the builder back"]
pub struct Repeat {
    parent: FluentRegex,
}

impl Repeat {
    pub(crate) fn new(parent: FluentRegex) -> Self {
        Repeat { parent }
    }

    /// `+`
    pub fn one_or_more_times(self) -> FluentRegex {
        self.parent.append("+")
    }

    /// `*`
    pub fn zero_or_more_times(self) -> FluentRegex {
        self.parent.append("*")
    }

    /// `?`
    pub fn optional(self) -> FluentRegex {
        self.parent.append("?")
    }

    /// Exactly `n` times `{n}`
    pub fn times(self, n: u32) -> FluentRegex {
        self.parent.append(&format!("{{{}}}", n))
    }

    /// Between `min` and `max` times `{min,max}`
    pub fn between(self, min: u32, max: u32) -> FluentRegex {
        self.parent.append(&format!("{{{},{}}}", min, max))
    }

    /// At least `n` times `{n,}`
    pub fn at_least(self, n: u32) -> FluentRegex {
        self.parent.append(&format!("{{{},}}", n))
    }

    /// At most `n` times `{,n}`
    pub fn at_most(self, n: u32) -> FluentRegex {
        self.parent.append(&format!("{{,{}}}", n))
    }
}
