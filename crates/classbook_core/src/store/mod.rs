//! In-memory record stores.
//!
//! # Responsibility
//! - Own each record collection exclusively and expose only CRUD operations.
//! - Derive statistics on demand from the current collection.
//!
//! # Invariants
//! - New records are prepended (most recent first).
//! - Failed validation never mutates the collection or the editing target.
//! - Unknown ids on edit/delete are no-ops.

pub mod attendance_store;
pub mod grade_store;
mod record_set;

pub use record_set::Identified;
