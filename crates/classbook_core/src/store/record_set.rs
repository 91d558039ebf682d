//! Shared ordered collection with a single editing target.

use crate::model::attendance::AttendanceRecord;
use crate::model::grade::GradeRecord;
use crate::model::id::RecordId;

/// Records addressable by stable id.
pub trait Identified {
    fn id(&self) -> RecordId;
}

impl Identified for AttendanceRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Identified for GradeRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RecordSet<T> {
    items: Vec<T>,
    editing: Option<RecordId>,
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            editing: None,
        }
    }
}

impl<T: Identified> RecordSet<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn prepend(&mut self, item: T) -> &T {
        self.items.insert(0, item);
        &self.items[0]
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Applies `change` in place and clears the editing target.
    ///
    /// Returns `None` without touching anything when `id` is unknown.
    pub fn update(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> Option<&T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        change(&mut self.items[index]);
        self.editing = None;
        Some(&self.items[index])
    }

    /// Marks `id` as the editing target. Returns `false` when unknown.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Removes `id`, clearing the editing target if it pointed there.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(self.items.remove(index))
    }
}
