// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::NewPerson;
use crate::diesel_schema::persons;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an active person and returns the generated ID.
///
/// The organization must exist; the foreign key rejects the insert
/// otherwise.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_person(
    conn: &mut _,
    organization_id: i64,
    person: &NewPerson,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(persons::table)
        .values((
            persons::organization_id.eq(organization_id),
            persons::display_name.eq(&person.name),
            persons::title.eq(&person.title),
            persons::email.eq(person.email.as_deref()),
            persons::phone.eq(person.phone.as_deref()),
            persons::profile_url.eq(person.profile_url.as_deref()),
            persons::department.eq(person.department.as_deref()),
            persons::seniority.eq(person.seniority.as_deref()),
            persons::is_active.eq(1),
            persons::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let person_id: i64 = conn.get_last_insert_rowid()?;
    debug!(organization_id, person_id, name = %person.name, "Created person");

    Ok(person_id)
}
}

backend_fn! {
/// Marks an active person as archived.
///
/// Returns the number of rows changed, which is 0 when the person does not
/// exist or was already archived.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn archive_person(conn: &mut _, person_id: i64) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(persons::table)
        .filter(persons::person_id.eq(person_id))
        .filter(persons::is_active.eq(1))
        .set(persons::is_active.eq(0))
        .execute(conn)?;

    if updated > 0 {
        info!(person_id, "Archived person");
    }
    Ok(updated)
}
}
