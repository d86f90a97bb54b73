//! Static inspection of raw templates.
//!
//! Reports every placeholder a template references, where it sits in the
//! raw text and how it resolves, without rendering anything. Used by
//! administrator tooling to flag unknown placeholders before they silently
//! render as empty.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Range;

use namefmt_fields::FieldKind;
use serde::Serialize;

use crate::engine::normalize::bare_words;
use crate::engine::resolver::resolve_field;
use crate::parser::{Segment, parse_template};
use crate::types::PersonRecord;

/// How a placeholder token resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageKind {
    /// A single-letter alias such as `{A}`.
    Alias,
    /// A field from the fixed vocabulary.
    Known,
    /// A field computed from other fields.
    Derived,
    /// A key that only this record carries.
    Record,
    /// A braced token that names no supported field; renders as empty.
    Unknown,
}

impl Display for UsageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            UsageKind::Alias => "alias",
            UsageKind::Known => "known",
            UsageKind::Derived => "derived",
            UsageKind::Record => "record",
            UsageKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One placeholder occurrence in a raw template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderUsage {
    /// The token as written, without braces or padding.
    pub token: String,
    /// Canonical field name, `None` when unknown.
    pub field: Option<String>,
    pub kind: UsageKind,
    /// Whether the token was written in braces rather than as a bare word.
    pub braced: bool,
    /// Byte range in the raw template, braces included.
    pub span: Range<usize>,
}

/// List the placeholders of a raw template, left to right.
///
/// The whole format is inspected at once: `;` separators are literal text
/// to the parser, so spans are offsets into `raw` itself. Bare words that do
/// not resolve are plain text and are not reported.
///
/// # Example
///
/// ```
/// use namefmt::{PersonRecord, UsageKind, inspect_template};
///
/// let usages = inspect_template("{B} lastname {nickname}", &PersonRecord::new());
/// let kinds: Vec<_> = usages.iter().map(|usage| usage.kind).collect();
///
/// assert_eq!(kinds, [UsageKind::Alias, UsageKind::Known, UsageKind::Unknown]);
/// assert_eq!(usages[2].span, 13..23);
/// ```
pub fn inspect_template(raw: &str, record: &PersonRecord) -> Vec<PlaceholderUsage> {
    let mut usages = Vec::new();
    let mut offset = 0;

    for segment in parse_template(raw).segments {
        match segment {
            Segment::Literal(text) => {
                for word in bare_words(&text) {
                    let token = &text[word.clone()];
                    let kind = classify(token, record);
                    if kind == UsageKind::Unknown {
                        continue;
                    }
                    usages.push(PlaceholderUsage {
                        token: token.to_string(),
                        field: resolve_field(token, record).map(str::to_string),
                        kind,
                        braced: false,
                        span: offset + word.start..offset + word.end,
                    });
                }
                offset += text.len();
            }
            Segment::Placeholder(token) => {
                let end = raw[offset..]
                    .find('}')
                    .map_or(raw.len(), |close| offset + close + 1);
                usages.push(PlaceholderUsage {
                    field: resolve_field(&token, record).map(str::to_string),
                    kind: classify(&token, record),
                    braced: true,
                    span: offset..end,
                    token,
                });
                offset = end;
            }
        }
    }

    usages
}

fn classify(token: &str, record: &PersonRecord) -> UsageKind {
    match namefmt_fields::resolve_field(token) {
        Some((_, FieldKind::Alias)) => UsageKind::Alias,
        Some((_, FieldKind::Known)) => UsageKind::Known,
        Some((_, FieldKind::Derived)) => UsageKind::Derived,
        None if record.key(token).is_some() => UsageKind::Record,
        None => UsageKind::Unknown,
    }
}
