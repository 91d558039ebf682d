//! Record identity and id generation.
//!
//! # Invariants
//! - Generators never return the nil id.
//! - One generator never returns the same id twice.

use uuid::Uuid;

/// Stable identifier for attendance and grade records.
pub type RecordId = Uuid;

/// Source of fresh record ids, injected into each store.
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

/// Random v4 ids. Default for interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> RecordId {
        Uuid::new_v4()
    }
}

/// Monotonic counter mapped onto ids (`1`, `2`, ...).
///
/// Gives tests predictable ids without touching the random source.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    issued: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the `n`-th call to `next_id` returns (1-based).
    pub fn id_at(n: u128) -> RecordId {
        Uuid::from_u128(n)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> RecordId {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> RecordId {
        (**self).next_id()
    }
}
