//! Alternative-shortcut equivalence.
//!
//! Two distinct key combinations can perform the same logical action
//! (Ctrl+C and Ctrl+Insert both copy). Equivalence resolves first through
//! catalog grouping (`alternative_group_id`, authoritative), then through a
//! static table of well-known OS/application pairs.

use crate::parser::normalize_shortcut;
use keydrill_config::{Os, Shortcut};

/// Well-known equivalent combinations, checked in both directions.
const ALTERNATIVE_PAIRS: &[(&str, &str)] = &[
    ("Ctrl + C", "Ctrl + Insert"),
    ("Ctrl + V", "Shift + Insert"),
    ("Ctrl + X", "Shift + Delete"),
    ("Ctrl + Z", "Alt + Backspace"),
    ("Ctrl + W", "Ctrl + F4"),
    ("Ctrl + Tab", "Ctrl + PageDown"),
    ("Ctrl + Shift + Tab", "Ctrl + PageUp"),
];

/// The equivalence class of a combo, always including the combo itself.
///
/// If `records` contains a shortcut whose key string (for `os`) normalizes
/// to the input and that record carries an `alternative_group_id`, the class
/// is the deduplicated key set of all records in that group. Otherwise the
/// static pair table is consulted in both directions.
pub fn alternative_shortcuts(combo: &str, records: &[Shortcut], os: Os) -> Vec<String> {
    let normalized = normalize_shortcut(combo);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut class = vec![normalized.clone()];

    let group_id = records.iter().find_map(|s| {
        (normalize_shortcut(s.keys_for_os(os)) == normalized)
            .then_some(s.alternative_group_id)
            .flatten()
    });

    if let Some(group_id) = group_id {
        for record in records {
            if record.alternative_group_id == Some(group_id) {
                let keys = normalize_shortcut(record.keys_for_os(os));
                if !keys.is_empty() && !class.contains(&keys) {
                    class.push(keys);
                }
            }
        }
        return class;
    }

    for (a, b) in ALTERNATIVE_PAIRS {
        let a = normalize_shortcut(a);
        let b = normalize_shortcut(b);
        if a == normalized && !class.contains(&b) {
            class.push(b);
        } else if b == normalized && !class.contains(&a) {
            class.push(a);
        }
    }

    class
}

/// Whether two combos perform the same logical action.
///
/// True iff their equivalence classes intersect; symmetric by construction.
pub fn are_equivalent(a: &str, b: &str, records: &[Shortcut], os: Os) -> bool {
    let class_a = alternative_shortcuts(a, records, os);
    let class_b = alternative_shortcuts(b, records, os);
    class_a.iter().any(|combo| class_b.contains(combo))
}
