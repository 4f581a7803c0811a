//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` wiring end to
//!   end, independent of any host UI runtime.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::db::open_db_in_memory;
use roster_core::{RosterService, SqlitePersonRepository};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roster smoke probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let conn = open_db_in_memory()?;
    let repo = SqlitePersonRepository::try_new(&conn)?;
    let service = RosterService::new(repo);

    service.add("Alice")?;
    service.add("Bob")?;

    let people = service.list_all()?;
    println!("roster count={}", people.len());
    for person in &people {
        println!("person name={}", person.name);
    }

    Ok(())
}
