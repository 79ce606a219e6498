// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::organizations;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an organization and returns its generated ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_organization(
    conn: &mut _,
    name: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(organizations::table)
        .values((
            organizations::name.eq(name),
            organizations::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let organization_id: i64 = conn.get_last_insert_rowid()?;
    info!(organization_id, name, "Created organization");

    Ok(organization_id)
}
}
