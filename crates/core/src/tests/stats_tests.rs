// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{build_default, build_dropping, create_sample_organization, create_test_person};
use crate::{UNKNOWN_SENIORITY, statistics};

#[test]
fn test_sample_organization_statistics() {
    let chart = build_default(&create_sample_organization());
    let stats = statistics(&chart.roots);

    assert_eq!(stats.total_persons, 14);
    assert_eq!(stats.max_depth, 4);
    // Nine managers share ten direct reports
    assert!((stats.average_direct_reports - 1.1).abs() < f64::EPSILON);

    assert_eq!(stats.by_department.get("Engineering"), Some(&5));
    assert_eq!(stats.by_department.get("Sales"), Some(&5));
    assert_eq!(stats.by_department.get("Executive"), Some(&2));
    assert_eq!(stats.by_department.get("General"), Some(&2));

    assert_eq!(stats.by_seniority.get("SPECIALIST"), Some(&2));
    assert_eq!(stats.by_seniority.get("DIRECTOR"), Some(&2));
    assert_eq!(stats.by_seniority.get(UNKNOWN_SENIORITY), Some(&1));
    assert_eq!(stats.by_seniority.values().sum::<usize>(), 14);
}

#[test]
fn test_statistics_count_only_visible_persons() {
    let chart = build_dropping(&create_sample_organization());
    let stats = statistics(&chart.roots);

    assert_eq!(stats.total_persons, 7);
    assert_eq!(stats.by_department.get("Sales"), None);
}

#[test]
fn test_flat_forest_statistics() {
    let persons = vec![
        create_test_person(1, "A", "MANAGER", "Ops"),
        create_test_person(2, "B", "MANAGER", "Ops"),
    ];
    let stats = statistics(&build_default(&persons).roots);

    assert_eq!(stats.total_persons, 2);
    assert_eq!(stats.max_depth, 0);
    assert!(stats.average_direct_reports.abs() < f64::EPSILON);
}
