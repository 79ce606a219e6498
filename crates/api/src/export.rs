// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a built forest.

use orgchart::HierarchyNode;
use orgchart_domain::format_label;

use crate::error::ApiError;

/// Column headers of an org-chart export.
pub const CSV_HEADERS: [&str; 9] = [
    "Name",
    "Title",
    "Department",
    "Seniority",
    "Email",
    "Phone",
    "Level",
    "Manager",
    "Direct Reports",
];

/// Writes a forest as CSV, one row per node in pre-order.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn forest_to_csv(forest: &[HierarchyNode]) -> Result<String, ApiError> {
    let mut rows: Vec<[String; 9]> = Vec::new();
    for root in forest {
        root.walk(None, &mut |node, manager| rows.push(csv_row(node, manager)));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS).map_err(csv_error)?;
    for row in &rows {
        writer.write_record(row).map_err(csv_error)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to finish CSV export: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV export is not valid UTF-8: {e}"),
    })
}

fn csv_row(node: &HierarchyNode, manager: Option<&HierarchyNode>) -> [String; 9] {
    let person = &node.person;
    let seniority: String = person.seniority_level().map_or_else(
        || person.seniority.clone().unwrap_or_default(),
        |level| format_label(level.as_str()),
    );

    [
        person.name.clone(),
        person.title.clone(),
        node.department.clone(),
        seniority,
        person.email.clone().unwrap_or_default(),
        person.phone.clone().unwrap_or_default(),
        node.level.to_string(),
        manager.map(|m| m.person.name.clone()).unwrap_or_default(),
        node.direct_report_count.to_string(),
    ]
}

fn csv_error(err: csv::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to write CSV export: {err}"),
    }
}
