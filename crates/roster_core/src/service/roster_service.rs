//! Roster use-case service.
//!
//! # Responsibility
//! - Provide the add/list entry points adapters call.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service holds its repository by value: callers construct the
//!   store once at startup and pass it in, never reach it through a
//!   global.

use crate::model::person::Person;
use crate::repo::person_repo::{PersistenceResult, PersonRepository};

/// Use-case service wrapper for the durable roster.
pub struct RosterService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one new name and returns the committed record.
    ///
    /// Failures surface to the caller unchanged so it can decide whether
    /// to retry, report, or drop the input.
    pub fn add(&self, name: &str) -> PersistenceResult<Person> {
        self.repo.add(name)
    }

    /// Returns every committed person in insertion order.
    pub fn list_all(&self) -> PersistenceResult<Vec<Person>> {
        self.repo.list_all()
    }
}
