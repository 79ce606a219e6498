// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Formats an underscore-separated tag as a human-readable label.
///
/// `"SENIOR_DIRECTOR"` becomes `"Senior Director"`. Empty segments are
/// skipped.
#[must_use]
pub fn format_label(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}
