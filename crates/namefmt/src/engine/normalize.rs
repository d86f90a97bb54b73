//! Template normalization.
//!
//! Rewrites a raw template so every recognized placeholder is in canonical
//! `{field}` form. Two surface forms are recognized:
//! - Braced tokens `{B}`, `{ FirstName }`: canonicalized when the token
//!   resolves, otherwise kept verbatim (they still render as empty)
//! - Bare words `firstname`, `A`: promoted to placeholders only when they
//!   resolve to a supported field, otherwise left as literal text. Bare
//!   single-letter aliases must be uppercase.

use std::iter;
use std::ops::Range;

use crate::engine::resolver::resolve_field;
use crate::parser::{Segment, Template, merge_literals, parse_template};
use crate::types::PersonRecord;

/// Normalize a raw template against a record.
///
/// # Example
///
/// ```
/// use namefmt::{PersonRecord, normalize_str};
///
/// let record = PersonRecord::new();
/// assert_eq!(
///     normalize_str("A (firstname {C}) aka", &record),
///     "{alternatename} ({firstname} {lastname}) aka"
/// );
/// ```
pub fn normalize(raw: &str, record: &PersonRecord) -> Template {
    let parsed = parse_template(raw);
    let mut segments = Vec::with_capacity(parsed.segments.len());

    for segment in parsed.segments {
        match segment {
            Segment::Placeholder(token) => {
                let name = match resolve_field(&token, record) {
                    Some(field) => field.to_string(),
                    None => token,
                };
                segments.push(Segment::Placeholder(name));
            }
            Segment::Literal(text) => promote_bare_words(&text, record, &mut segments),
        }
    }

    Template {
        segments: merge_literals(segments),
    }
}

/// Normalize a raw template and print it back in `{field}` form.
pub fn normalize_str(raw: &str, record: &PersonRecord) -> String {
    normalize(raw, record).to_string()
}

/// Split literal text into literals and placeholders for bare field words.
fn promote_bare_words(text: &str, record: &PersonRecord, out: &mut Vec<Segment>) {
    let mut literal_start = 0;

    for word in bare_words(text) {
        let Some(field) = resolve_field(&text[word.clone()], record) else {
            continue;
        };
        if literal_start < word.start {
            out.push(Segment::Literal(text[literal_start..word.start].to_string()));
        }
        out.push(Segment::Placeholder(field.to_string()));
        literal_start = word.end;
    }

    if literal_start < text.len() {
        out.push(Segment::Literal(text[literal_start..].to_string()));
    }
}

/// Byte ranges of the words in literal text that could name a field.
///
/// Words are maximal runs of word characters; only bare tokens are yielded,
/// so `Іменаfirstname` is one non-ASCII word and never matches.
pub(crate) fn bare_words(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut chars = text.char_indices().peekable();
    iter::from_fn(move || loop {
        let (start, c) = chars.next()?;
        if !is_word_char(c) {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }
        if is_bare_token(&text[start..end]) {
            return Some(start..end);
        }
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A bare token starts with an ASCII letter and is ASCII word characters only.
///
/// A single letter counts only in uppercase, so prose such as `a.k.a.` is
/// never read as the `A` alias.
fn is_bare_token(word: &str) -> bool {
    if word.len() == 1 {
        return word.starts_with(|c: char| c.is_ascii_uppercase());
    }
    word.starts_with(|c: char| c.is_ascii_alphabetic())
        && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
