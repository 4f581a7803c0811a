//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable roster access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Person::validate_name()` before
//!   persistence.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod person_repo;
