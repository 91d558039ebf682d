//! Validation errors raised by `add` and `commit_edit`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive lower bound for a grade score.
pub const SCORE_MIN: f64 = 0.0;
/// Inclusive upper bound for a grade score.
pub const SCORE_MAX: f64 = 100.0;

/// Coarse error category surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordErrorKind {
    /// A required field is missing or not usable.
    Validation,
    /// A score is outside `[SCORE_MIN, SCORE_MAX]`.
    Range,
}

/// Rejection reason for a staged record draft.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Required field is empty after trimming.
    MissingField(&'static str),
    /// Score input is not a number.
    ScoreNotNumeric,
    /// Score is a number but outside the allowed range.
    ScoreOutOfRange(f64),
}

impl RecordError {
    pub fn kind(&self) -> RecordErrorKind {
        match self {
            Self::MissingField(_) | Self::ScoreNotNumeric => RecordErrorKind::Validation,
            Self::ScoreOutOfRange(_) => RecordErrorKind::Range,
        }
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::ScoreNotNumeric => write!(f, "score must be a number"),
            Self::ScoreOutOfRange(score) => write!(
                f,
                "score {score} must be within {SCORE_MIN}..={SCORE_MAX}"
            ),
        }
    }
}

impl Error for RecordError {}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RecordError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Checks a score is numeric and within range.
pub(crate) fn check_score(score: f64) -> Result<f64, RecordError> {
    if score.is_nan() {
        return Err(RecordError::ScoreNotNumeric);
    }
    if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(RecordError::ScoreOutOfRange(score));
    }
    Ok(score)
}
