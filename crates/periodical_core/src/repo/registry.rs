//! Append-only ordered registry.

use std::cell::RefCell;

/// Ordered collection of every entity added to it.
///
/// Reads return a snapshot, so callers may keep creating entities while
/// iterating a previous result.
#[derive(Debug)]
pub struct Registry<T> {
    items: RefCell<Vec<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry at the end.
    pub fn add(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    /// Returns all entries in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}
