//! Author entity.
//!
//! # Responsibility
//! - Hold the author name behind a shared, identity-compared handle.
//!
//! # Invariants
//! - `name` is non-empty and accepts exactly one successful assignment.
//! - Authors are not registered anywhere; they become visible to the catalog
//!   only through articles that reference them.

use crate::model::validation::{accept, check_non_empty, check_unset};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier used for identity comparison between author handles.
pub type AuthorId = Uuid;

#[derive(Debug)]
struct AuthorState {
    id: AuthorId,
    name: OnceCell<String>,
}

/// Shared author handle. Clones refer to the same author.
#[derive(Debug, Clone)]
pub struct Author {
    state: Rc<AuthorState>,
}

/// Serializable read model of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: AuthorId,
    pub name: Option<String>,
}

impl Author {
    /// Creates an author. An empty `name` leaves the name unset.
    pub fn new(name: impl Into<String>) -> Self {
        let author = Self {
            state: Rc::new(AuthorState {
                id: Uuid::new_v4(),
                name: OnceCell::new(),
            }),
        };
        author.set_name(name);
        author
    }

    pub fn id(&self) -> AuthorId {
        self.state.id
    }

    pub fn name(&self) -> Option<&str> {
        self.state.name.get().map(String::as_str)
    }

    /// Assigns the name once. Returns `false` when the value is empty or a
    /// name is already present; the stored name is unchanged in both cases.
    pub fn set_name(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        let checked = check_unset("author.name", self.state.name.get())
            .and_then(|()| check_non_empty("author.name", &value));
        if !accept("author", checked) {
            return false;
        }
        self.state.name.set(value).is_ok()
    }

    pub fn record(&self) -> AuthorRecord {
        AuthorRecord {
            id: self.id(),
            name: self.name().map(str::to_string),
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id.hash(state);
    }
}
