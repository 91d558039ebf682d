//! Grade record model.
//!
//! Every task carries the same weight, so a record stores no weight field.

use crate::model::id::RecordId;
use crate::model::validation::{check_score, require_text, RecordError};
use serde::{Deserialize, Serialize};

/// Committed grade entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub id: RecordId,
    pub student: String,
    /// Assignment name.
    pub task: String,
    /// Always within `[0, 100]`.
    pub score: f64,
}

/// Staged grade input for `add` and `commit_edit`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeDraft {
    pub student: String,
    pub task: String,
    /// `NaN` marks a score that failed to parse.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidGrade {
    pub student: String,
    pub task: String,
    pub score: f64,
}

impl GradeDraft {
    pub fn new(student: impl Into<String>, task: impl Into<String>, score: f64) -> Self {
        Self {
            student: student.into(),
            task: task.into(),
            score,
        }
    }

    /// Builds a draft from raw form text.
    ///
    /// # Errors
    /// - `MissingField("score")` when the score text is blank.
    /// - `ScoreNotNumeric` when it does not parse as a number.
    pub fn from_input(student: &str, task: &str, score_text: &str) -> Result<Self, RecordError> {
        Ok(Self::new(student, task, parse_score(score_text)?))
    }

    /// Required-field checks run before the range check.
    pub(crate) fn validate(&self) -> Result<ValidGrade, RecordError> {
        let student = require_text("student", &self.student)?;
        let task = require_text("task", &self.task)?;
        let score = check_score(self.score)?;
        Ok(ValidGrade {
            student,
            task,
            score,
        })
    }
}

impl From<&GradeRecord> for GradeDraft {
    fn from(record: &GradeRecord) -> Self {
        Self::new(record.student.clone(), record.task.clone(), record.score)
    }
}

impl GradeRecord {
    pub(crate) fn from_valid(id: RecordId, valid: ValidGrade) -> Self {
        Self {
            id,
            student: valid.student,
            task: valid.task,
            score: valid.score,
        }
    }

    pub(crate) fn apply(&mut self, valid: ValidGrade) {
        self.student = valid.student;
        self.task = valid.task;
        self.score = valid.score;
    }
}

/// Parses score text typed into a form.
pub fn parse_score(text: &str) -> Result<f64, RecordError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RecordError::MissingField("score"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(RecordError::ScoreNotNumeric),
    }
}

/// Shortest decimal form of a score: `88` for 88.0, `87.5` for 87.5.
pub fn format_score(score: f64) -> String {
    format!("{score}")
}
