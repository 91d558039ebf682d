//! CSV export of record collections.
//!
//! # Responsibility
//! - Serialize records through a column mapping into CSV text.
//! - Save CSV text to a target directory.
//!
//! # Invariants
//! - Every present value is double-quoted with inner quotes doubled.
//! - Record ids never appear in exported text.

pub mod csv;
pub mod file;
