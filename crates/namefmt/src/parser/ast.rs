//! Public AST types for display-name templates.
//!
//! These types are public to enable external tooling (linters, the CLI).

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A parsed template string containing segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text (no substitution).
    Literal(String),
    /// A placeholder: `{name}`.
    ///
    /// At parse time the name is the raw token. After normalization it is
    /// the canonical field name when the token resolved.
    Placeholder(String),
}

impl Template {
    /// Names of all placeholders, left to right, including repeats.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Check whether the template contains at least one placeholder.
    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Concatenated literal text, ignoring placeholders.
    pub fn literal_text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(text) => Some(text.as_str()),
                Segment::Placeholder(_) => None,
            })
            .collect()
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "{text}")?,
                Segment::Placeholder(name) => write!(f, "{{{name}}}")?,
            }
        }
        Ok(())
    }
}
