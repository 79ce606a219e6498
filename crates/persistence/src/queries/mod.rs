// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only directory queries.
//!
//! Every query is generated in `_sqlite` and `_mysql` variants by
//! `backend_fn!`. The `Persistence` adapter picks one per call.

pub mod organizations;
pub mod persons;

pub use organizations::{get_organization_mysql, get_organization_sqlite};
pub use persons::{
    count_active_persons_mysql, count_active_persons_sqlite, list_active_persons_mysql,
    list_active_persons_sqlite,
};
