//! Template string parser using winnow.
//!
//! Parses display-name templates into an AST. Handles:
//! - Literal text segments
//! - Placeholders `{field}`, with optional inner whitespace (`{ field }`)
//! - Stray or unmatched braces, kept as literal text

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Split a packed format setting into template candidates.
///
/// Candidates are separated by `;` and trimmed; blank candidates are
/// dropped. When nothing is left the whole format is the only candidate.
///
/// # Example
///
/// ```
/// use namefmt::parser::split_templates;
///
/// assert_eq!(
///     split_templates("{alternatename}; {firstname} {lastname} ;"),
///     vec!["{alternatename}", "{firstname} {lastname}"]
/// );
/// assert_eq!(split_templates(" ; "), vec![" ; "]);
/// ```
pub fn split_templates(format: &str) -> Vec<&str> {
    let templates: Vec<&str> = format
        .split(';')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect();
    if templates.is_empty() {
        vec![format]
    } else {
        templates
    }
}

/// Parse a template string into an AST.
///
/// Never fails; malformed placeholders become literal text.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(template) if remaining.is_empty() => template,
        _ => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
pub(crate) fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a placeholder: { ws identifier ws }
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(('{', ws), identifier, (ws, '}'))
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Parse a single literal character, braces included.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a field identifier (ASCII alphanumeric with underscores).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}
