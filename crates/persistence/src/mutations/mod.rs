// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory writes.
//!
//! Generated IDs are read back through `PersistenceBackend`, everything else
//! is plain Diesel DSL.

pub mod organizations;
pub mod persons;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

pub use organizations::{create_organization_mysql, create_organization_sqlite};
pub use persons::{
    archive_person_mysql, archive_person_sqlite, create_person_mysql, create_person_sqlite,
};

/// Formats the current UTC time for a `created_at` column.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn current_timestamp() -> Result<String, PersistenceError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
