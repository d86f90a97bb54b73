//! Display-name rendering engine.
//!
//! Templates flow through four stages:
//! - [`resolver`]: maps tokens (fields, aliases, record keys) to values
//! - [`normalize`]: rewrites raw templates into canonical `{field}` form
//! - [`render`]: substitutes values and drops empty placeholders
//! - [`cleanup`]: tidies the punctuation and spacing left behind
//!
//! [`inspect`] reports what a raw template references without rendering it.

pub mod cleanup;
pub mod inspect;
pub mod normalize;
pub mod render;
pub mod resolver;

pub use cleanup::clean_display;
pub use inspect::{PlaceholderUsage, UsageKind, inspect_template};
pub use normalize::{normalize, normalize_str};
pub use render::{render_str, render_template};
pub use resolver::{field_value, is_supported_field, resolve_field, suggest_field, supported_fields};
