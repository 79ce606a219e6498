// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_persistence_error};
use orgchart_domain::{Organization, OrganizationId, Person};
use orgchart_persistence::Persistence;

/// Read access to the directory an org chart is built from.
pub trait Directory {
    /// Looks up an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read. A missing
    /// organization is `Ok(None)`.
    fn find_organization(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Option<Organization>, ApiError>;

    /// Lists the organization's active persons. Archived persons are never
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_active_persons(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Person>, ApiError>;
}

impl Directory for Persistence {
    fn find_organization(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Option<Organization>, ApiError> {
        self.get_organization(organization_id)
            .map_err(translate_persistence_error)
    }

    fn list_active_persons(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Person>, ApiError> {
        Self::list_active_persons(self, organization_id).map_err(translate_persistence_error)
    }
}
