//! Person domain model.
//!
//! # Responsibility
//! - Define the single persisted record: a named entry in the roster.
//! - Own the name validation rule enforced before every write.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another person.
//! - `name` is non-empty after trimming.
//! - `created_at` is assigned by the storage layer at commit time and
//!   never changes afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a persisted person.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// One persisted roster entry.
///
/// Instances are produced by the repository from committed rows; the
/// `created_at` timestamp therefore always reflects durable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable opaque ID assigned on creation.
    pub uuid: PersonId,
    /// The name as entered, minus surrounding whitespace.
    pub name: String,
    /// Insertion timestamp in unix epoch milliseconds.
    pub created_at: i64,
}

/// Rejection reasons for person input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    /// The name is empty or contains only whitespace.
    EmptyName,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "person name must not be empty"),
        }
    }
}

impl Error for PersonValidationError {}

impl Person {
    /// Checks a candidate name against the model rules.
    ///
    /// Write paths must call this before any SQL mutation so that invalid
    /// input never reaches durable storage.
    pub fn validate_name(name: &str) -> Result<(), PersonValidationError> {
        if name.trim().is_empty() {
            return Err(PersonValidationError::EmptyName);
        }
        Ok(())
    }
}
