// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory store for the organization chart service.
//!
//! Holds organizations and their persons. The org-chart engine only ever
//! reads snapshots of active persons from here; inferred reporting lines
//! are never stored.
//!
//! ## Database Backend Support
//!
//! - **`SQLite`** (default): development, tests and single-node deployments
//! - **`MariaDB`/`MySQL`**: validated via explicit opt-in tests
//!
//! To run the `MySQL` validation tests:
//! ```bash
//! cargo xtask test-mariadb
//! ```
//!
//! ### Migration Strategy
//!
//! Each backend has its own migration directory with equivalent schema:
//!
//! - `migrations/`: `SQLite`
//! - `migrations_mysql/`: `MySQL`/`MariaDB`

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::{MysqlConnection, SqliteConnection};
use orgchart_domain::{
    Organization, OrganizationId, Person, PersonId, validate_organization_name,
    validate_person_fields,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Counter for unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates `_sqlite` and `_mysql` variants of a query or mutation.
///
/// Diesel needs a concrete connection type, so the body is duplicated with
/// `&mut SqliteConnection` and `&mut MysqlConnection` substituted for
/// `&mut _`. Dispatch between the two happens in `Persistence` only.
///
/// ```ignore
/// backend_fn! {
///     pub fn get_name(conn: &mut _, id: i64) -> Result<String, PersistenceError> {
///         diesel_schema::organizations::table
///             .filter(diesel_schema::organizations::organization_id.eq(id))
///             .select(diesel_schema::organizations::name)
///             .first::<String>(conn)
///             .map_err(Into::into)
///     }
/// }
/// ```
macro_rules! backend_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident (
            $conn:ident : &mut _
            $(, $param:ident : $param_ty:ty)* $(,)?
        ) -> $ret:ty
        $body:block
    ) => {
        pastey::paste! {
            $(#[$meta])*
            $vis fn [<$name _sqlite>] (
                $conn: &mut SqliteConnection
                $(, $param : $param_ty)*
            ) -> $ret
            $body

            $(#[$meta])*
            $vis fn [<$name _mysql>] (
                $conn: &mut MysqlConnection
                $(, $param : $param_ty)*
            ) -> $ret
            $body
        }
    };
}

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::NewPerson;
pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Shorthand used by callers that only ever open `SQLite`.
pub type SqlitePersistence = Persistence;

/// The live connection behind a `Persistence` handle.
pub enum BackendConnection {
    Sqlite(SqliteConnection),
    Mysql(MysqlConnection),
}

/// Directory store adapter.
///
/// The backend is chosen once at construction time.
pub struct Persistence {
    pub(crate) conn: BackendConnection,
}

impl Persistence {
    /// Opens a private in-memory `SQLite` directory.
    ///
    /// Every call gets its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_orgchart_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Opens (creating if needed) a file-backed `SQLite` directory in WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Connects to a `MySQL`/`MariaDB` directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or migrated.
    pub fn new_with_mysql(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn: MysqlConnection = backend::mysql::initialize_database(database_url)?;
        backend::mysql::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Mysql(conn),
        })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => conn.verify_foreign_key_enforcement(),
            BackendConnection::Mysql(conn) => conn.verify_foreign_key_enforcement(),
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Creates an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the insert fails.
    pub fn create_organization(&mut self, name: &str) -> Result<Organization, PersistenceError> {
        validate_organization_name(name)?;
        let created_at: String = mutations::current_timestamp()?;

        let organization_id: i64 = match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                mutations::create_organization_sqlite(conn, name, &created_at)?
            }
            BackendConnection::Mysql(conn) => {
                mutations::create_organization_mysql(conn, name, &created_at)?
            }
        };

        Ok(Organization::new(
            OrganizationId::new(organization_id),
            name.to_string(),
        ))
    }

    /// Adds an active person to an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The person's fields fail validation
    /// - The organization does not exist
    /// - The insert fails
    pub fn create_person(
        &mut self,
        organization_id: OrganizationId,
        person: &NewPerson,
    ) -> Result<PersonId, PersistenceError> {
        validate_person_fields(&person.to_person(PersonId::new(0)))?;

        if self.get_organization(organization_id)?.is_none() {
            return Err(PersistenceError::OrganizationNotFound(
                organization_id.value(),
            ));
        }

        let created_at: String = mutations::current_timestamp()?;
        let person_id: i64 = match &mut self.conn {
            BackendConnection::Sqlite(conn) => mutations::create_person_sqlite(
                conn,
                organization_id.value(),
                person,
                &created_at,
            )?,
            BackendConnection::Mysql(conn) => mutations::create_person_mysql(
                conn,
                organization_id.value(),
                person,
                &created_at,
            )?,
        };

        Ok(PersonId::new(person_id))
    }

    /// Archives a person, removing them from future org charts.
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist, is already archived, or
    /// the update fails.
    pub fn archive_person(&mut self, person_id: PersonId) -> Result<(), PersistenceError> {
        let updated: usize = match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                mutations::archive_person_sqlite(conn, person_id.value())?
            }
            BackendConnection::Mysql(conn) => {
                mutations::archive_person_mysql(conn, person_id.value())?
            }
        };

        if updated == 0 {
            return Err(PersistenceError::PersonNotFound(person_id.value()));
        }
        Ok(())
    }

    /// Creates an organization together with its persons.
    ///
    /// Used to load seed files. Stops at the first failing person.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    pub fn seed_organization(
        &mut self,
        name: &str,
        persons: &[NewPerson],
    ) -> Result<Organization, PersistenceError> {
        let organization: Organization = self.create_organization(name)?;
        for person in persons {
            self.create_person(organization.id, person)?;
        }

        info!(
            organization_id = %organization.id,
            person_count = persons.len(),
            "Seeded organization"
        );
        Ok(organization)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Retrieves an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. A missing organization is
    /// `Ok(None)`.
    pub fn get_organization(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Option<Organization>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::get_organization_sqlite(conn, organization_id.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::get_organization_mysql(conn, organization_id.value())
            }
        }
    }

    /// Lists an organization's active persons.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_active_persons(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Person>, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::list_active_persons_sqlite(conn, organization_id.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::list_active_persons_mysql(conn, organization_id.value())
            }
        }
    }

    /// Counts an organization's active persons.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active_persons(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<usize, PersistenceError> {
        match &mut self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::count_active_persons_sqlite(conn, organization_id.value())
            }
            BackendConnection::Mysql(conn) => {
                queries::count_active_persons_mysql(conn, organization_id.value())
            }
        }
    }
}
