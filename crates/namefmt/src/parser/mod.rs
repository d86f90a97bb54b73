//! Template parser for display-name formats.
//!
//! This module splits packed format settings into template candidates and
//! parses each candidate into an AST of literal text and placeholders.
//! Parsing never fails: anything that is not a well-formed placeholder is
//! literal text.

pub mod ast;
mod template;

pub use ast::*;
pub(crate) use template::merge_literals;
pub use template::{parse_template, split_templates};
