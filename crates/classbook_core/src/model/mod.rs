//! Classroom record model.
//!
//! # Responsibility
//! - Define the attendance and grade records owned by the stores.
//! - Define staged drafts and the validation rules they must pass.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId` that is never reused.
//! - Committed records always satisfy their draft validation rules.

pub mod attendance;
pub mod grade;
pub mod id;
pub mod validation;
