//! Registry layer for constructed entities.
//!
//! # Responsibility
//! - Own the append-only article and magazine registries.
//! - Replace process-wide lists with an explicitly passed `Catalog`.
//!
//! # Invariants
//! - Registries keep insertion order and never drop entries, except through
//!   an explicit `clear`.
//! - Authors have no registry.

pub mod catalog;
pub mod registry;
