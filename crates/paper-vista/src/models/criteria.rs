//! Filter inputs and the criteria derived from them.
//!
//! Inputs are raw text as typed by the user. Coercion is permissive: empty,
//! non-numeric and zero values all mean "no constraint", never an error.

use serde::{Deserialize, Serialize};

/// Raw filter form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInputs {
    /// Title substring.
    #[serde(default)]
    pub title: String,

    /// Minimum citation count.
    #[serde(default)]
    pub min_citations: String,

    /// Start year (inclusive).
    #[serde(default)]
    pub start_year: String,

    /// End year (inclusive).
    #[serde(default)]
    pub end_year: String,
}

impl FilterInputs {
    /// Derive the criteria these inputs express.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(
            &self.title,
            &self.min_citations,
            &self.start_year,
            &self.end_year,
        )
    }

    /// Reset every input to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The four constraints narrowing the record set. `None` disables a
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Lowercased title substring; empty matches every title.
    pub title: String,

    /// Minimum citation count (inclusive).
    pub min_citations: Option<u64>,

    /// Earliest publication year (inclusive).
    pub start_year: Option<i32>,

    /// Latest publication year (inclusive).
    pub end_year: Option<i32>,
}

impl FilterCriteria {
    /// Build criteria from raw text inputs.
    ///
    /// A fractional bound is tightened to the nearest integer that selects the
    /// same records: `2.5` citations means at least 3, an end year of
    /// `2020.5` means up to 2020.
    #[must_use]
    pub fn from_inputs(title: &str, min_citations: &str, start_year: &str, end_year: &str) -> Self {
        let min_citations = coerce_number(min_citations);
        let start_year = coerce_number(start_year);
        let end_year = coerce_number(end_year);

        Self {
            title: title.to_lowercase(),
            // A non-positive minimum admits every count.
            min_citations: (min_citations > 0.0).then(|| min_citations.ceil() as u64),
            start_year: (start_year != 0.0).then(|| start_year.ceil() as i32),
            end_year: (end_year != 0.0).then(|| end_year.floor() as i32),
        }
    }

    /// True when no constraint is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_empty()
            && self.min_citations.is_none()
            && self.start_year.is_none()
            && self.end_year.is_none()
    }
}

/// Numeric coercion of a text input; anything unusable becomes 0.
///
/// Only the spelled-out `Infinity` counts as infinite. Rust's `inf`, `infinity`
/// and `nan` spellings are junk like any other word.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    let raw = raw.trim();
    match raw {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Exponent markers are the only letters a decimal literal may hold.
    if raw.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return 0.0;
    }
    raw.parse::<f64>().ok().filter(|n| !n.is_nan()).unwrap_or(0.0)
}
