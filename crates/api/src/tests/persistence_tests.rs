// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations run against a real in-memory `SQLite` directory.

use orgchart_domain::{Organization, OrganizationId};
use orgchart_persistence::{NewPerson, Persistence};

use crate::{ApiError, ChartPolicy, OrgChartRequest, get_org_chart, get_org_chart_stats};

fn seeded() -> (Persistence, Organization) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let organization = persistence
        .seed_organization(
            "Acme",
            &[
                NewPerson::new("Carol", "Account Manager")
                    .with_seniority("MANAGER")
                    .with_department("Sales"),
                NewPerson::new("Alice", "VP Sales")
                    .with_seniority("VP")
                    .with_department("Sales"),
                NewPerson::new("Bob", "Sales Director")
                    .with_seniority("DIRECTOR")
                    .with_department("Sales"),
            ],
        )
        .unwrap();
    (persistence, organization)
}

#[test]
fn test_org_chart_from_sqlite_directory() {
    let (mut persistence, organization) = seeded();
    let response = get_org_chart(
        &mut persistence,
        &OrgChartRequest::new(organization.id),
        &ChartPolicy::default(),
    )
    .unwrap();

    assert_eq!(response.organization.name, "Acme");
    assert_eq!(response.hierarchy.len(), 1);
    assert_eq!(response.hierarchy[0].name, "Alice");
    assert_eq!(response.hierarchy[0].children[0].name, "Bob");
    assert_eq!(response.hierarchy[0].children[0].children[0].name, "Carol");
}

#[test]
fn test_archived_persons_are_left_out() {
    let (mut persistence, organization) = seeded();
    let before = get_org_chart(
        &mut persistence,
        &OrgChartRequest::new(organization.id),
        &ChartPolicy::default(),
    )
    .unwrap();
    let bob_id = before.hierarchy[0].children[0].id;

    persistence
        .archive_person(orgchart_domain::PersonId::new(bob_id))
        .unwrap();

    let stats =
        get_org_chart_stats(&mut persistence, organization.id, &ChartPolicy::default()).unwrap();
    assert_eq!(stats.organization.person_count, 2);
    assert_eq!(stats.total_persons, 2);
    // Carol now reports straight to Alice
    assert_eq!(stats.max_depth, 1);
}

#[test]
fn test_missing_organization_in_sqlite_directory() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let result = get_org_chart(
        &mut persistence,
        &OrgChartRequest::new(OrganizationId::new(1)),
        &ChartPolicy::default(),
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
