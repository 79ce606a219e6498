// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Bucket name for persons without a department.
pub const GENERAL_DEPARTMENT: &str = "General";

/// Returns the department bucket key for an optional label.
///
/// The key is the trimmed label, or [`GENERAL_DEPARTMENT`] when the label is
/// absent or blank. Case is preserved: `"Sales"` and `"sales"` are distinct
/// keys.
#[must_use]
pub fn department_key(label: Option<&str>) -> &str {
    match label.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => GENERAL_DEPARTMENT,
    }
}
