//! Entity model for authors, magazines and articles.
//!
//! # Responsibility
//! - Define the three entity handles and their field rules.
//! - Keep field assignment permissive: invalid values are dropped, never raised.
//!
//! # Invariants
//! - Entity identity is the generated id, never the field values.
//! - `Author::name` and `Article::title` accept exactly one successful assignment.
//! - Article and Magazine construction always registers the new entity.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
