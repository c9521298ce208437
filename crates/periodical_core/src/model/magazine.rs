//! Magazine entity.
//!
//! # Responsibility
//! - Hold magazine name and category behind a shared, identity-compared handle.
//! - Register every constructed magazine with the owning catalog.
//!
//! # Invariants
//! - `name` is 2..=16 characters when set; `category` is non-empty when set.
//! - Both fields may be reassigned with valid values at any time.

use crate::model::validation::{accept, check_char_range, check_non_empty};
use crate::repo::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::rc::Rc;
use uuid::Uuid;

pub type MagazineId = Uuid;

/// Allowed name length in characters.
pub const MAGAZINE_NAME_CHARS: RangeInclusive<usize> = 2..=16;

#[derive(Debug)]
struct MagazineState {
    id: MagazineId,
    name: RefCell<Option<String>>,
    category: RefCell<Option<String>>,
}

/// Shared magazine handle. Clones refer to the same magazine.
#[derive(Debug, Clone)]
pub struct Magazine {
    state: Rc<MagazineState>,
}

/// Serializable read model of a magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineRecord {
    pub id: MagazineId,
    pub name: Option<String>,
    pub category: Option<String>,
}

impl Magazine {
    /// Creates a magazine and appends it to the catalog's magazine registry.
    ///
    /// Invalid `name` or `category` values leave that field unset; the
    /// magazine is registered either way.
    pub fn new(catalog: &Catalog, name: impl Into<String>, category: impl Into<String>) -> Self {
        let magazine = Self {
            state: Rc::new(MagazineState {
                id: Uuid::new_v4(),
                name: RefCell::new(None),
                category: RefCell::new(None),
            }),
        };
        magazine.set_name(name);
        magazine.set_category(category);
        catalog.register_magazine(magazine.clone());
        magazine
    }

    pub fn id(&self) -> MagazineId {
        self.state.id
    }

    pub fn name(&self) -> Option<String> {
        self.state.name.borrow().clone()
    }

    pub fn category(&self) -> Option<String> {
        self.state.category.borrow().clone()
    }

    /// Replaces the name when it is 2..=16 characters long.
    pub fn set_name(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        if !accept(
            "magazine",
            check_char_range("magazine.name", &value, &MAGAZINE_NAME_CHARS),
        ) {
            return false;
        }
        *self.state.name.borrow_mut() = Some(value);
        true
    }

    /// Replaces the category when it is non-empty.
    pub fn set_category(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        if !accept("magazine", check_non_empty("magazine.category", &value)) {
            return false;
        }
        *self.state.category.borrow_mut() = Some(value);
        true
    }

    pub fn record(&self) -> MagazineRecord {
        MagazineRecord {
            id: self.id(),
            name: self.name(),
            category: self.category(),
        }
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id.hash(state);
    }
}
