//! Miette diagnostic for unknown template placeholders.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use namefmt::PlaceholderUsage;
use thiserror::Error;

/// A braced placeholder that names no supported field.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("unknown placeholder '{token}'")]
#[diagnostic(code(namefmt::unknown_placeholder))]
pub struct UnknownPlaceholder {
    #[source_code]
    src: NamedSource<String>,

    #[label("renders as empty")]
    span: SourceSpan,

    token: String,

    #[help]
    help: Option<String>,
}

impl UnknownPlaceholder {
    /// Create a diagnostic for an unknown usage in `template`.
    pub fn new(name: &str, template: &str, usage: &PlaceholderUsage, suggestions: &[String]) -> Self {
        let help = match suggestions {
            [] => None,
            [only] => Some(format!("did you mean '{}'?", only)),
            many => Some(format!("did you mean one of: {}?", many.join(", "))),
        };

        // Clamp the span to the template to avoid a miette panic.
        let start = usage.span.start.min(template.len());
        let len = usage.span.end.min(template.len()).saturating_sub(start);

        UnknownPlaceholder {
            src: NamedSource::new(name, template.to_string()),
            span: (start, len).into(),
            token: usage.token.clone(),
            help,
        }
    }
}
