// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The total order every later stage of the engine relies on.
//!
//! ## Ordering Rules
//!
//! Persons are ordered by:
//! 1. Seniority rank (lowest, i.e. most senior, first)
//! 2. Department key, compared case-insensitively (missing department reads as "General")
//! 3. Display name, compared case-sensitively
//! 4. Person identifier (lowest first)
//!
//! The final rule makes the order total, so the result does not depend on
//! the order in which the directory returned its rows.

use orgchart_domain::{Person, SeniorityRank};
use std::cmp::Ordering;

/// A person paired with the sort keys resolved once up front.
#[derive(Debug, Clone, Copy)]
pub struct OrderedPerson<'a> {
    /// The underlying directory record.
    pub person: &'a Person,
    /// The resolved seniority rank.
    pub rank: SeniorityRank,
    /// The department bucket key.
    pub department: &'a str,
}

impl<'a> OrderedPerson<'a> {
    /// Resolves the sort keys for a person.
    #[must_use]
    pub fn new(person: &'a Person) -> Self {
        Self {
            person,
            rank: person.rank(),
            department: person.department_key(),
        }
    }
}

/// Compares two persons under the engine's ordering rules.
///
/// Returns `Ordering::Less` if `a` sorts first (is more senior).
#[must_use]
pub fn compare_persons(a: &Person, b: &Person) -> Ordering {
    compare_ordered(&OrderedPerson::new(a), &OrderedPerson::new(b))
}

/// Sorts a directory snapshot into engine order.
#[must_use]
pub fn order_persons(persons: &[Person]) -> Vec<OrderedPerson<'_>> {
    let mut ordered: Vec<OrderedPerson<'_>> = persons.iter().map(OrderedPerson::new).collect();
    ordered.sort_by(compare_ordered);
    ordered
}

fn compare_ordered(a: &OrderedPerson<'_>, b: &OrderedPerson<'_>) -> Ordering {
    a.rank
        .cmp(&b.rank)
        .then_with(|| compare_case_insensitive(a.department, b.department))
        .then_with(|| a.person.name.cmp(&b.person.name))
        .then_with(|| a.person.id.cmp(&b.person.id))
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
