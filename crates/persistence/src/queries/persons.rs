// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use orgchart_domain::{Person, PersonId};
use tracing::debug;

use crate::diesel_schema::persons;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = persons)]
struct PersonRow {
    person_id: i64,
    display_name: String,
    title: String,
    email: Option<String>,
    phone: Option<String>,
    profile_url: Option<String>,
    department: Option<String>,
    seniority: Option<String>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.person_id),
            name: row.display_name,
            title: row.title,
            email: row.email,
            phone: row.phone,
            profile_url: row.profile_url,
            department: row.department,
            seniority: row.seniority,
        }
    }
}

backend_fn! {
/// Lists the active persons of an organization, oldest record first.
///
/// Archived persons are excluded.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_active_persons(
    conn: &mut _,
    organization_id: i64,
) -> Result<Vec<Person>, PersistenceError> {
    let rows: Vec<PersonRow> = persons::table
        .filter(persons::organization_id.eq(organization_id))
        .filter(persons::is_active.eq(1))
        .order(persons::person_id.asc())
        .select(PersonRow::as_select())
        .load(conn)?;

    debug!(organization_id, count = rows.len(), "Loaded active persons");
    Ok(rows.into_iter().map(Person::from).collect())
}
}

backend_fn! {
/// Counts the active persons of an organization.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_active_persons(
    conn: &mut _,
    organization_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = persons::table
        .filter(persons::organization_id.eq(organization_id))
        .filter(persons::is_active.eq(1))
        .count()
        .get_result(conn)?;

    usize::try_from(count).map_err(|e| PersistenceError::SerializationError(e.to_string()))
}
}
