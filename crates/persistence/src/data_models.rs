// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use orgchart_domain::{Person, PersonId};
use serde::{Deserialize, Serialize};

/// Fields for a person about to be written to the directory.
///
/// Also the shape of a person entry in a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub seniority: Option<String>,
}

impl NewPerson {
    /// Creates a new person with only a name and title.
    #[must_use]
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Sets the department label.
    #[must_use]
    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    /// Sets the seniority classification tag.
    #[must_use]
    pub fn with_seniority(mut self, seniority: &str) -> Self {
        self.seniority = Some(seniority.to_string());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Builds the domain record this entry would become under `id`.
    #[must_use]
    pub fn to_person(&self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name.clone(),
            title: self.title.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            profile_url: self.profile_url.clone(),
            department: self.department.clone(),
            seniority: self.seniority.clone(),
        }
    }
}
