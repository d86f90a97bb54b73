//! Template rendering.
//!
//! Substitutes placeholders with trimmed field values. An empty placeholder
//! is removed together with its own decoration:
//! - A bracket or quote pair touching it on both sides, as in `({field})`
//! - The separator run between it and the name text before it, or, when
//!   nothing precedes it yet, the separator run after it
//!
//! Brackets and quotes are never stripped as separators; pairs left empty
//! are handled by [`clean_display`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::engine::cleanup::clean_display;
use crate::engine::normalize::normalize;
use crate::engine::resolver::field_value;
use crate::parser::{Segment, Template};
use crate::types::PersonRecord;

/// Separator run at the end of literal text: whitespace, punctuation and
/// symbols other than brackets and quotes.
static TRAILING_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[[\s\p{P}\p{S}]--[\p{Ps}\p{Pe}\p{Pi}\p{Pf}"']]+$"#).unwrap()
});

/// Separator run at the start of literal text.
static LEADING_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[[\s\p{P}\p{S}]--[\p{Ps}\p{Pe}\p{Pi}\p{Pf}"']]+"#).unwrap()
});

/// Render a normalized template against a record and clean up the result.
///
/// A template without placeholders is literal text and is returned trimmed.
pub fn render_template(template: &Template, record: &PersonRecord) -> String {
    if !template.has_placeholders() {
        return template.literal_text().trim().to_string();
    }
    let substituted = substitute(template, record);
    let rendered = clean_display(&substituted);
    trace!(template = %template, substituted = %substituted, display = %rendered, "rendered template");
    rendered
}

/// Normalize, render and clean up a raw template string.
///
/// # Example
///
/// ```
/// use namefmt::{PersonRecord, render_str};
///
/// let record = PersonRecord::new()
///     .with_field("firstname", "Jane")
///     .with_field("lastname", "Doe");
///
/// assert_eq!(
///     render_str("{alternatename} ({firstname} {lastname})", &record),
///     "Jane Doe"
/// );
/// ```
pub fn render_str(raw: &str, record: &PersonRecord) -> String {
    render_template(&normalize(raw, record), record)
}

/// Work applied to the next literal after an empty placeholder.
#[derive(Debug, Default)]
struct Pending {
    /// Closing bracket to drop because its opener was dropped.
    closer: Option<char>,
    /// Whether to strip the leading separator run.
    strip_separators: bool,
}

/// Output under construction.
struct Output {
    text: String,
    /// Offset where the trailing literal text starts. Everything before it
    /// is, or precedes, a substituted value and is never stripped.
    literal_start: usize,
}

impl Output {
    fn literal_tail(&self) -> &str {
        &self.text[self.literal_start..]
    }

    fn has_content(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }
}

/// Substitute every placeholder, applying placeholder-scoped cleanup.
fn substitute(template: &Template, record: &PersonRecord) -> String {
    let mut out = Output {
        text: String::new(),
        literal_start: 0,
    };
    let mut pending = Pending::default();

    for (index, segment) in template.segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                let mut text = text.as_str();
                if let Some(closer) = pending.closer {
                    text = text.strip_prefix(closer).unwrap_or(text);
                }
                if pending.strip_separators {
                    text = LEADING_SEPARATORS.find(text).map_or(text, |m| &text[m.end()..]);
                }
                pending = Pending::default();
                out.text.push_str(text);
            }
            Segment::Placeholder(name) => {
                let value = field_value(name, record);
                if !value.is_empty() {
                    pending = Pending::default();
                    out.text.push_str(value);
                    out.literal_start = out.text.len();
                    continue;
                }

                let next_literal = match template.segments.get(index + 1) {
                    Some(Segment::Literal(text)) => text.as_str(),
                    _ => "",
                };
                pending = remove_empty(&mut out, next_literal);
            }
        }
    }

    out.text
}

/// Drop the decoration of an empty placeholder from the output, returning
/// what still has to be dropped from the literal that follows it.
fn remove_empty(out: &mut Output, next_literal: &str) -> Pending {
    let mut pending = Pending::default();

    if let Some(open) = out.literal_tail().chars().last() {
        if let Some(close) = closing_for(open) {
            if next_literal.starts_with(close) {
                out.text.pop();
                pending.closer = Some(close);
            }
        }
    }

    if out.has_content() {
        if let Some(found) = TRAILING_SEPARATORS.find(out.literal_tail()) {
            let cut = out.literal_start + found.start();
            out.text.truncate(cut);
        }
    } else {
        pending.strip_separators = true;
    }

    pending
}

fn closing_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '«' => Some('»'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}
