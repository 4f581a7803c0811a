//! Use-case services composed on top of the repository layer.

pub mod roster_service;
