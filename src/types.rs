//! Result types produced by the analysis pipeline.

use std::fmt;
use thiserror::Error;

/// Errors surfaced to the caller of [`analyze_password`](crate::analyze_password).
///
/// Error messages never contain password material.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("password cannot be empty")]
    EmptyPassword,
}

/// Length category of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    TooShort,
    Acceptable,
    Strong,
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthClass::TooShort => write!(f, "Too short"),
            LengthClass::Acceptable => write!(f, "Acceptable"),
            LengthClass::Strong => write!(f, "Strong"),
        }
    }
}

/// Length classification with its score contribution (0-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthResult {
    pub class: LengthClass,
    pub score: u8,
}

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Suggestion shown when this class is missing from a password.
    pub fn suggestion(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Add lowercase letters",
            CharClass::Uppercase => "Add uppercase letters",
            CharClass::Digit => "Add digits",
            CharClass::Symbol => "Add special characters",
        }
    }
}

/// Character-class diversity result.
///
/// `satisfied` and `suggestions` are both ordered lowercase, uppercase,
/// digit, symbol; `score` is the number of satisfied classes (0-4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityResult {
    pub score: u8,
    pub satisfied: Vec<CharClass>,
    pub suggestions: Vec<&'static str>,
}

/// Outcome of a breach-database lookup.
///
/// `Unknown` means the lookup could not be completed (network failure,
/// malformed response); it is distinct from `Known(0)`, which is a
/// confirmed absence from the breach corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Known(u64),
    Unknown,
}

impl BreachStatus {
    /// Resolved occurrence count, if the lookup completed.
    pub fn count(self) -> Option<u64> {
        match self {
            BreachStatus::Known(n) => Some(n),
            BreachStatus::Unknown => None,
        }
    }

    /// True only for a confirmed positive count. `Unknown` is never breached.
    pub fn is_breached(self) -> bool {
        matches!(self, BreachStatus::Known(n) if n > 0)
    }
}

/// Overall categorical rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Weak => write!(f, "Weak"),
            Rating::Moderate => write!(f, "Moderate"),
            Rating::Strong => write!(f, "Strong"),
        }
    }
}

/// Aggregate result of one password analysis.
///
/// Constructed once per call and handed to the presentation layer;
/// `risk_score` is always within 0-100.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub length: LengthResult,
    pub complexity: ComplexityResult,
    pub entropy_bits: f64,
    pub is_common: bool,
    pub breach: BreachStatus,
    pub rating: Rating,
    pub risk_score: u8,
}
