//! Field checks shared by every entity setter.
//!
//! Checks are typed so the reason for a rejection can be logged, but setters
//! only ever surface a `bool` to their callers.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Reason an assignment was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRejection {
    /// Value was an empty string.
    Empty { field: &'static str },
    /// Character count fell outside the allowed bounds.
    LengthOutOfRange {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },
    /// Field is immutable and already holds a value.
    AlreadySet { field: &'static str },
    /// Required reference was absent.
    Missing { field: &'static str },
}

impl Display for FieldRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::LengthOutOfRange {
                field,
                len,
                min,
                max,
            } => write!(f, "{field} must be {min}..={max} characters, got {len}"),
            Self::AlreadySet { field } => write!(f, "{field} is already set and immutable"),
            Self::Missing { field } => write!(f, "{field} reference is missing"),
        }
    }
}

impl Error for FieldRejection {}

/// Counts characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn check_non_empty(field: &'static str, value: &str) -> Result<(), FieldRejection> {
    if value.is_empty() {
        return Err(FieldRejection::Empty { field });
    }
    Ok(())
}

pub fn check_char_range(
    field: &'static str,
    value: &str,
    bounds: &RangeInclusive<usize>,
) -> Result<(), FieldRejection> {
    let len = char_len(value);
    if !bounds.contains(&len) {
        return Err(FieldRejection::LengthOutOfRange {
            field,
            len,
            min: *bounds.start(),
            max: *bounds.end(),
        });
    }
    Ok(())
}

pub fn check_unset<T>(field: &'static str, current: Option<&T>) -> Result<(), FieldRejection> {
    match current {
        Some(_) => Err(FieldRejection::AlreadySet { field }),
        None => Ok(()),
    }
}

pub fn check_present<T>(field: &'static str, value: Option<&T>) -> Result<(), FieldRejection> {
    match value {
        Some(_) => Ok(()),
        None => Err(FieldRejection::Missing { field }),
    }
}

/// Turns a check result into the setter's success flag, logging drops.
pub(crate) fn accept(entity: &'static str, result: Result<(), FieldRejection>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!("event=field_rejected module=model entity={entity} status=ignored reason=\"{err}\"");
            false
        }
    }
}
