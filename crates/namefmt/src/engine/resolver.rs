//! Field resolution: maps template tokens onto record values.

use std::collections::BTreeSet;

use namefmt_fields::{ALTERNATE_NAME_PREFIX, accepted_field_names};
use strsim::levenshtein;

use crate::types::PersonRecord;

/// Resolve a token to the canonical field it denotes.
///
/// Resolution order:
/// 1. Aliases (`A`..`E`, case-insensitive)
/// 2. Fixed vocabulary (case-insensitive, canonical lowercase name)
/// 3. Keys present on the record (the record's own spelling)
///
/// Returns `None` for tokens that are not supported fields.
pub fn resolve_field<'r>(token: &str, record: &'r PersonRecord) -> Option<&'r str> {
    if let Some((field, _)) = namefmt_fields::resolve_field(token) {
        return Some(field);
    }
    record.key(token)
}

/// Check whether a token names a supported field for this record.
pub fn is_supported_field(token: &str, record: &PersonRecord) -> bool {
    resolve_field(token, record).is_some()
}

/// The supported-field set: the fixed vocabulary plus every record key.
pub fn supported_fields(record: &PersonRecord) -> BTreeSet<&str> {
    let mut fields: BTreeSet<&str> = record.keys().collect();
    for name in accepted_field_names() {
        fields.insert(name);
    }
    fields
}

/// Trimmed value of the field a token denotes; empty when unresolved.
///
/// `alternatenameprefix` is derived: it yields the record's `prefix`, but
/// only while `alternatename` is non-blank.
///
/// # Example
///
/// ```
/// use namefmt::{PersonRecord, field_value};
///
/// let record = PersonRecord::new()
///     .with_field("alternatename", "Janey")
///     .with_field("prefix", "Dr.");
///
/// assert_eq!(field_value("A", &record), "Janey");
/// assert_eq!(field_value("alternatenameprefix", &record), "Dr.");
/// assert_eq!(field_value("nickname", &record), "");
/// ```
pub fn field_value<'r>(token: &str, record: &'r PersonRecord) -> &'r str {
    let Some(field) = resolve_field(token, record) else {
        return "";
    };
    if field == ALTERNATE_NAME_PREFIX {
        if record.has_value("alternatename") {
            return record.value("prefix");
        }
        return "";
    }
    record.value(field)
}

/// Suggest supported fields close to an unknown token.
///
/// Uses Levenshtein distance:
/// - Max distance 1 for short tokens (3 chars or fewer), 2 otherwise
/// - Limit to 3 suggestions, sorted by distance
pub fn suggest_field(token: &str, record: &PersonRecord) -> Vec<String> {
    let lowered = token.to_ascii_lowercase();
    let max_distance = if lowered.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = supported_fields(record)
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(&lowered, &candidate.to_ascii_lowercase());
            (dist > 0 && dist <= max_distance).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.to_string())
        .collect()
}
