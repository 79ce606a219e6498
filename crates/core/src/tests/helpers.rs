// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EngineOptions, HierarchyNode, OrgChart, UngroundedPolicy, build_org_chart};
use orgchart_domain::{Person, PersonId};

pub fn create_test_person(id: i64, name: &str, seniority: &str, department: &str) -> Person {
    Person::new(PersonId::new(id), name.to_string(), format!("{seniority} title"))
        .with_seniority(seniority)
        .with_department(department)
}

pub fn create_unassigned_person(id: i64, name: &str, seniority: &str) -> Person {
    Person::new(PersonId::new(id), name.to_string(), format!("{seniority} title"))
        .with_seniority(seniority)
}

pub fn build_default(persons: &[Person]) -> OrgChart {
    build_org_chart(persons, &EngineOptions::default())
}

pub fn build_dropping(persons: &[Person]) -> OrgChart {
    build_org_chart(
        persons,
        &EngineOptions {
            ungrounded: UngroundedPolicy::Drop,
        },
    )
}

pub fn root_names(chart: &OrgChart) -> Vec<String> {
    chart.roots.iter().map(|n| n.person.name.clone()).collect()
}

pub fn child_names(node: &HierarchyNode) -> Vec<String> {
    node.children.iter().map(|n| n.person.name.clone()).collect()
}

/// Collects every node with the id of its parent, in pre-order.
pub fn flatten(chart: &OrgChart) -> Vec<(&HierarchyNode, Option<PersonId>)> {
    let mut out: Vec<(&HierarchyNode, Option<PersonId>)> = Vec::new();
    for root in &chart.roots {
        root.walk(None, &mut |node, parent| out.push((node, parent.map(HierarchyNode::id))));
    }
    out
}

/// A mid-sized organization spanning several departments and ranks.
pub fn create_sample_organization() -> Vec<Person> {
    vec![
        create_test_person(10, "Morgan", "C_LEVEL", "Executive"),
        create_test_person(11, "Riley", "EVP", "Executive"),
        create_test_person(20, "Alice", "VP", "Sales"),
        create_test_person(21, "Bob", "DIRECTOR", "Sales"),
        create_test_person(22, "Carol", "MANAGER", "Sales"),
        create_test_person(23, "Dan", "SPECIALIST", "Sales"),
        create_test_person(24, "Erin", "SPECIALIST", "Sales"),
        create_test_person(30, "Frank", "SVP", "Engineering"),
        create_test_person(31, "Grace", "DIRECTOR", "Engineering"),
        create_test_person(32, "Heidi", "SENIOR_MANAGER", "Engineering"),
        create_test_person(33, "Ivan", "ASSOCIATE", "Engineering"),
        create_test_person(34, "Judy", "INTERN", "Engineering"),
        create_unassigned_person(40, "Ken", "COORDINATOR"),
        create_unassigned_person(41, "Lena", "UNHEARD_OF"),
    ]
}
