//! Shared name-field vocabulary used by both the rendering engine and the CLI.
//!
//! This crate centralizes alias and field-name resolution to avoid drift between
//! the runtime (`namefmt`) and administrator diagnostics (`namefmt-cli`).

/// How a template token maps onto the field vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A single-letter shorthand such as `A`.
    Alias,
    /// A field from the fixed vocabulary, stored on the record.
    Known,
    /// A field computed from other fields (e.g. `alternatenameprefix`).
    Derived,
}

/// Field whose value is `prefix`, but only while `alternatename` is set.
pub const ALTERNATE_NAME_PREFIX: &str = "alternatenameprefix";

/// Single-letter shorthands and the canonical field each stands for.
pub const ALIASES: &[(&str, &str)] = &[
    ("A", "alternatename"),
    ("B", "firstname"),
    ("C", "lastname"),
    ("D", "middlename"),
    ("E", ALTERNATE_NAME_PREFIX),
];

/// Canonical name fields, in the priority order used by the last-resort
/// fallback.
pub const NAME_FIELDS: &[&str] = &[
    "firstnamephonetic",
    "lastnamephonetic",
    "middlename",
    "alternatename",
    "firstname",
    "lastname",
];

/// Fields supported on top of [`NAME_FIELDS`].
pub const EXTRA_FIELDS: &[&str] = &[
    "alternatename",
    ALTERNATE_NAME_PREFIX,
    "fullname",
    "title",
    "prefix",
    "suffix",
    "username",
    "email",
    "idnumber",
];

/// Placeholders documented to administrators for template settings.
pub const DOCUMENTED_PLACEHOLDERS: &[&str] = &[
    "alternatename",
    "firstname",
    "lastname",
    "middlename",
    "title",
    "prefix",
    "suffix",
    "username",
    "email",
    "idnumber",
    "fullname",
];

/// Resolve a single-letter alias to its canonical field name.
///
/// Matching is case-insensitive: `a` and `A` both resolve to `alternatename`.
pub fn resolve_alias(token: &str) -> Option<&'static str> {
    let mut chars = token.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    ALIASES
        .iter()
        .find(|(alias, _)| alias.starts_with(letter))
        .map(|(_, field)| *field)
}

/// Resolve a token against the fixed vocabulary.
///
/// Resolution order:
/// 1. Alias canonicalization
/// 2. Fixed fields (case-insensitive)
///
/// Returns the canonical, lowercase field name and how it was matched.
/// Fields that only exist on a particular record are not known here.
pub fn resolve_field(token: &str) -> Option<(&'static str, FieldKind)> {
    if let Some(field) = resolve_alias(token) {
        return Some((field, FieldKind::Alias));
    }
    let field = accepted_field_names()
        .find(|name| name.eq_ignore_ascii_case(token))?;
    let kind = if field == ALTERNATE_NAME_PREFIX {
        FieldKind::Derived
    } else {
        FieldKind::Known
    };
    Some((field, kind))
}

/// Check whether `token` names a field in the fixed vocabulary (or an alias).
pub fn is_known_field(token: &str) -> bool {
    resolve_field(token).is_some()
}

/// All fixed field names, deduplicated, name fields first.
///
/// Used for diagnostics and typo suggestions.
pub fn accepted_field_names() -> impl Iterator<Item = &'static str> {
    NAME_FIELDS.iter().copied().chain(
        EXTRA_FIELDS
            .iter()
            .copied()
            .filter(|extra| !NAME_FIELDS.contains(extra)),
    )
}
