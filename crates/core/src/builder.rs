// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manager assignment: the first phase of the hierarchy build.
//!
//! Within each department bucket, every person reports to the nearest
//! preceding person in the bucket whose rank is strictly lower (more senior).
//! The bucket is already in global order, so a single forward scan with a
//! stack of open senior ancestors finds that manager: entries whose rank is
//! not strictly lower than the current person's can never be a manager for
//! anyone later in the bucket either, so they are popped for good.
//!
//! This phase produces a [`Placement`] and never touches a tree. The tree is
//! materialized from the placement afterwards.

use crate::ordering::OrderedPerson;
use crate::partition::DepartmentBucket;
use orgchart_domain::is_executive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do with a non-executive person who has no senior predecessor in
/// their bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UngroundedPolicy {
    /// Root the person at the top level of the forest.
    #[default]
    RootInBucket,
    /// Leave the person out of the forest, together with anyone reporting
    /// to them.
    Drop,
}

/// Manager assignments for a globally ordered person slice.
///
/// All indices refer to positions in that slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The manager of each person, if any.
    pub parents: Vec<Option<usize>>,
    /// Top-level persons, in global order.
    pub roots: Vec<usize>,
    /// Persons not reachable from any root, in global order.
    pub hidden: Vec<usize>,
    /// Each person's position within their own department bucket.
    pub bucket_positions: Vec<usize>,
}

impl Placement {
    /// Returns whether no person was placed at the top level.
    #[must_use]
    pub fn has_no_roots(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Assigns managers within each department bucket.
#[must_use]
pub fn assign_managers(
    ordered: &[OrderedPerson<'_>],
    buckets: &[DepartmentBucket<'_>],
    policy: UngroundedPolicy,
) -> Placement {
    let mut parents: Vec<Option<usize>> = vec![None; ordered.len()];
    let mut is_root: Vec<bool> = vec![false; ordered.len()];
    let mut bucket_positions: Vec<usize> = vec![0; ordered.len()];

    for bucket in buckets {
        let mut open: Vec<usize> = Vec::new();

        for (position, &index) in bucket.members.iter().enumerate() {
            let rank = ordered[index].rank;
            bucket_positions[index] = position;

            while open.last().is_some_and(|&top| ordered[top].rank >= rank) {
                open.pop();
            }

            match open.last() {
                Some(&manager) => parents[index] = Some(manager),
                None if is_executive(rank) => is_root[index] = true,
                None => match policy {
                    UngroundedPolicy::RootInBucket => is_root[index] = true,
                    UngroundedPolicy::Drop => {
                        debug!(
                            person_id = %ordered[index].person.id,
                            department = bucket.department,
                            rank,
                            "Dropping ungrounded person"
                        );
                    }
                },
            }

            open.push(index);
        }
    }

    // Managers always precede their reports in global order, so one pass
    // settles reachability.
    let mut visible: Vec<bool> = vec![false; ordered.len()];
    for index in 0..ordered.len() {
        let reachable: bool =
            is_root[index] || parents[index].is_some_and(|manager| visible[manager]);
        visible[index] = reachable;
    }

    let roots: Vec<usize> = (0..ordered.len()).filter(|&i| is_root[i]).collect();
    let hidden: Vec<usize> = (0..ordered.len()).filter(|&i| !visible[i]).collect();

    Placement {
        parents,
        roots,
        hidden,
        bucket_positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::order_persons;
    use crate::partition::partition;
    use orgchart_domain::{Person, PersonId};

    fn person(id: i64, name: &str, seniority: &str, department: &str) -> Person {
        Person::new(PersonId::new(id), name.to_string(), String::from("Title"))
            .with_seniority(seniority)
            .with_department(department)
    }

    fn place(persons: &[Person], policy: UngroundedPolicy) -> (Vec<String>, Placement) {
        let ordered = order_persons(persons);
        let buckets = partition(&ordered);
        let placement = assign_managers(&ordered, &buckets, policy);
        let names = ordered.iter().map(|o| o.person.name.clone()).collect();
        (names, placement)
    }

    #[test]
    fn test_chain_assigns_nearest_senior_predecessor() {
        let persons = vec![
            person(3, "Carol", "MANAGER", "Sales"),
            person(1, "Alice", "VP", "Sales"),
            person(2, "Bob", "DIRECTOR", "Sales"),
        ];
        let (names, placement) = place(&persons, UngroundedPolicy::RootInBucket);
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(placement.parents, vec![None, Some(0), Some(1)]);
        assert_eq!(placement.roots, vec![0]);
        assert!(placement.hidden.is_empty());
        assert_eq!(placement.bucket_positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_equal_rank_is_not_a_manager() {
        let persons = vec![
            person(1, "Ann", "VP", "Ops"),
            person(2, "Ben", "MANAGER", "Ops"),
            person(3, "Cat", "MANAGER", "Ops"),
        ];
        let (_, placement) = place(&persons, UngroundedPolicy::RootInBucket);
        // Both managers report to the VP, not to each other
        assert_eq!(placement.parents, vec![None, Some(0), Some(0)]);
    }

    #[test]
    fn test_nearest_senior_skips_popped_peers() {
        let persons = vec![
            person(1, "Ceo", "C_LEVEL", "Ops"),
            person(2, "Vp1", "VP", "Ops"),
            person(3, "Vp2", "VP", "Ops"),
            person(4, "Mgr", "MANAGER", "Ops"),
        ];
        let (names, placement) = place(&persons, UngroundedPolicy::RootInBucket);
        assert_eq!(names, vec!["Ceo", "Vp1", "Vp2", "Mgr"]);
        // The manager reports to the most recent VP
        assert_eq!(placement.parents, vec![None, Some(0), Some(0), Some(2)]);
    }

    #[test]
    fn test_managers_never_cross_departments() {
        let persons = vec![
            person(1, "Ceo", "C_LEVEL", "Exec"),
            person(2, "Mgr", "MANAGER", "Ops"),
        ];
        let (_, placement) = place(&persons, UngroundedPolicy::RootInBucket);
        assert_eq!(placement.parents, vec![None, None]);
        assert_eq!(placement.roots, vec![0, 1]);
    }

    #[test]
    fn test_drop_policy_hides_ungrounded_junior_and_reports() {
        let persons = vec![
            person(1, "Evp", "EVP", "Exec"),
            person(2, "Mgr", "MANAGER", "Ops"),
            person(3, "Spec", "SPECIALIST", "Ops"),
        ];
        let (names, placement) = place(&persons, UngroundedPolicy::Drop);
        assert_eq!(names, vec!["Evp", "Mgr", "Spec"]);
        assert_eq!(placement.roots, vec![0]);
        // The specialist is still assigned to the manager, but neither is reachable
        assert_eq!(placement.parents[2], Some(1));
        assert_eq!(placement.hidden, vec![1, 2]);
    }

    #[test]
    fn test_drop_policy_with_all_peers_yields_no_roots() {
        let persons: Vec<Person> = (1..=5)
            .map(|i| person(i, &format!("M{i}"), "MANAGER", "Ops"))
            .collect();
        let (_, placement) = place(&persons, UngroundedPolicy::Drop);
        assert!(placement.has_no_roots());
        assert_eq!(placement.hidden.len(), 5);
    }

    #[test]
    fn test_bucket_positions_restart_per_department() {
        let persons = vec![
            person(1, "A", "VP", "One"),
            person(2, "B", "VP", "Two"),
            person(3, "C", "MANAGER", "One"),
            person(4, "D", "MANAGER", "Two"),
        ];
        let (names, placement) = place(&persons, UngroundedPolicy::RootInBucket);
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(placement.bucket_positions, vec![0, 0, 1, 1]);
        assert_eq!(placement.parents, vec![None, None, Some(0), Some(1)]);
    }
}
