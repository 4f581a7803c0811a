//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable add/list APIs over canonical `people` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Person::validate_name()` before SQL mutations; a
//!   rejected write leaves durable state untouched.
//! - A record returned by `add` is committed and visible to every later
//!   `list_all` on the same database.
//! - Read paths reject invalid persisted state instead of masking it.
//! - One repository wraps one `Connection`; `rusqlite::Connection` is not
//!   `Sync`, so calls against the same handle must stay on one thread.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::person::{Person, PersonId, PersonValidationError};
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PERSON_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    created_at
FROM people";

const PEOPLE_TABLE: &str = "people";
const REQUIRED_COLUMNS: &[&str] = &["seq", "uuid", "name", "created_at"];

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Single error surface for roster persistence, covering both read and
/// write failures against durable storage.
#[derive(Debug)]
pub enum PersistenceError {
    Validation(PersonValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection has schema version {actual_version}, expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonValidationError> for PersistenceError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for PersistenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the durable roster.
///
/// Both operations run synchronously on the caller's thread; `add` commits
/// before returning and is never retried automatically.
pub trait PersonRepository {
    /// Persists one new person and returns the committed record, including
    /// its assigned identifier and insertion timestamp.
    fn add(&self, name: &str) -> PersistenceResult<Person>;
    /// Returns every committed person in insertion order.
    fn list_all(&self) -> PersistenceResult<Vec<Person>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Wraps a connection after verifying it carries the roster schema.
    ///
    /// Rejecting an unmigrated or foreign database here turns a latent
    /// mid-query failure into an immediate, descriptive error.
    pub fn try_new(conn: &'conn Connection) -> PersistenceResult<Self> {
        verify_schema(conn)?;
        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn add(&self, name: &str) -> PersistenceResult<Person> {
        Person::validate_name(name)?;
        let name = name.trim();
        let uuid = Uuid::new_v4();

        self.conn.execute(
            "INSERT INTO people (uuid, name) VALUES (?1, ?2);",
            params![uuid.to_string(), name],
        )?;

        // Read the committed row back so the returned record carries the
        // storage-assigned created_at.
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([uuid.to_string()])?;
        match rows.next()? {
            Some(row) => parse_person_row(row),
            None => Err(PersistenceError::InvalidData(format!(
                "inserted person `{uuid}` not found after commit"
            ))),
        }
    }

    fn list_all(&self) -> PersistenceResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();

        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }

        Ok(people)
    }
}

fn parse_person_row(row: &Row<'_>) -> PersistenceResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    let uuid: PersonId = Uuid::parse_str(&uuid_text).map_err(|_| {
        PersistenceError::InvalidData(format!("invalid uuid value `{uuid_text}` in people.uuid"))
    })?;

    let name: String = row.get("name")?;
    Person::validate_name(&name)
        .map_err(|_| PersistenceError::InvalidData("empty name in people.name".to_string()))?;

    Ok(Person {
        uuid,
        name,
        created_at: row.get("created_at")?,
    })
}

fn verify_schema(conn: &Connection) -> PersistenceResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(PersistenceError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [PEOPLE_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(PersistenceError::MissingRequiredTable(PEOPLE_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present: HashSet<String> = stmt
        .query_map([PEOPLE_TABLE], |row| row.get(0))?
        .collect::<Result<_, _>>()?;
    for &column in REQUIRED_COLUMNS {
        if !present.contains(column) {
            return Err(PersistenceError::MissingRequiredColumn {
                table: PEOPLE_TABLE,
                column,
            });
        }
    }

    Ok(())
}
