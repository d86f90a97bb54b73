//! Full-name orchestration.
//!
//! [`NameFormatter`] picks the active format, tries each template candidate
//! in order and walks a fallback chain when none of them produces a name.
//! It never fails: the worst outcome is an empty string.

use std::borrow::Cow;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use bon::Builder;
use namefmt_fields::NAME_FIELDS;
use tracing::debug;

use crate::config::{DEFAULT_TEMPLATE, FullnameConfig, LANGUAGE_SENTINEL};
use crate::engine::{field_value, normalize, render_str, render_template};
use crate::parser::{Template, split_templates};
use crate::types::PersonRecord;

/// Formats a name from the language pack, bypassing the template engine.
///
/// Invoked when the active format is blank or the `"language"` sentinel.
/// Any `Fn(&PersonRecord) -> String` closure is a language formatter.
pub trait LanguageFormatter: Send + Sync {
    fn format(&self, record: &PersonRecord) -> String;
}

impl<F> LanguageFormatter for F
where
    F: Fn(&PersonRecord) -> String + Send + Sync,
{
    fn format(&self, record: &PersonRecord) -> String {
        self(record)
    }
}

/// The English language-pack format: first name, then last name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLanguageFormatter;

impl LanguageFormatter for EnglishLanguageFormatter {
    fn format(&self, record: &PersonRecord) -> String {
        render_str(DEFAULT_TEMPLATE, record)
    }
}

/// Per-call options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct FormatOptions {
    /// The `override` option. When set, it takes precedence over the
    /// `override_names` flag passed alongside it.
    pub override_names: Option<bool>,
}

/// Renders display names from a [`FullnameConfig`].
///
/// # Example
///
/// ```
/// use namefmt::{FullnameConfig, NameFormatter, PersonRecord};
///
/// let formatter = NameFormatter::new(
///     FullnameConfig::builder()
///         .default_template("{nonexistentfield};{firstname} {lastname}")
///         .build(),
/// );
/// let record = PersonRecord::new()
///     .with_field("firstname", "Jane")
///     .with_field("lastname", "Doe");
///
/// assert_eq!(formatter.fullname(&record, false), "Jane Doe");
/// ```
pub struct NameFormatter {
    config: FullnameConfig,
    language: Box<dyn LanguageFormatter>,
}

impl Default for NameFormatter {
    fn default() -> Self {
        Self::new(FullnameConfig::default())
    }
}

impl Debug for NameFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("NameFormatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NameFormatter {
    /// Create a formatter using the English language-pack fallback.
    pub fn new(config: FullnameConfig) -> Self {
        Self {
            config,
            language: Box::new(EnglishLanguageFormatter),
        }
    }

    /// Replace the language-pack formatter.
    pub fn with_language_formatter(mut self, language: impl LanguageFormatter + 'static) -> Self {
        self.language = Box::new(language);
        self
    }

    /// The configuration this formatter renders with.
    pub fn config(&self) -> &FullnameConfig {
        &self.config
    }

    /// Full name of a record with default options.
    pub fn fullname(&self, record: &PersonRecord, override_names: bool) -> String {
        self.fullname_with(record, override_names, &FormatOptions::default())
    }

    /// Full name of a record.
    ///
    /// Without overrides, forced names are applied to a copy of the record
    /// and the session format wins over the template settings. With
    /// overrides, the alternate template setting is used as-is.
    pub fn fullname_with(
        &self,
        record: &PersonRecord,
        override_names: bool,
        options: &FormatOptions,
    ) -> String {
        let override_names = options.override_names.unwrap_or(override_names);

        let (record, format) = if override_names {
            (Cow::Borrowed(record), self.config.template_for(true))
        } else {
            let forced = record.with_forced_names(
                self.config.force_first_name.as_deref(),
                self.config.force_last_name.as_deref(),
            );
            let format = self
                .config
                .session_format()
                .unwrap_or_else(|| self.config.template_for(false));
            (Cow::Owned(forced), format)
        };

        if format.trim().is_empty() || format == LANGUAGE_SENTINEL {
            debug!(format, "delegating to language-pack formatter");
            return self.language.format(&record);
        }

        debug!(format, override_names, "rendering full name");
        self.render_format(format, &record)
    }

    /// Render a packed format (`;`-separated templates) against a record,
    /// falling back when no template yields a name.
    pub fn render_format(&self, format: &str, record: &PersonRecord) -> String {
        let candidates: Vec<Template> = split_templates(format)
            .into_iter()
            .map(|template| normalize(template, record))
            .collect();
        let referenced = referenced_fields(&candidates);

        if self.config.require_referenced_value
            && !referenced.is_empty()
            && referenced
                .iter()
                .all(|field| field_value(field, record).is_empty())
        {
            debug!(?referenced, "no referenced field has a value");
            return String::new();
        }

        for candidate in &candidates {
            let display = render_template(candidate, record);
            if !display.is_empty() {
                return display;
            }
        }

        debug!(?referenced, "no template produced a name, using fallback");
        fallback_name(&referenced, record)
    }
}

/// Every placeholder across all candidates, deduplicated in order of first
/// appearance.
fn referenced_fields(candidates: &[Template]) -> Vec<&str> {
    let mut fields: Vec<&str> = Vec::new();
    for field in candidates.iter().flat_map(|template| template.placeholders()) {
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields
}

/// Fallback chain:
/// 1. Referenced field values, space-joined
/// 2. `firstname lastname`
/// 3. First non-empty canonical name field
fn fallback_name(referenced: &[&str], record: &PersonRecord) -> String {
    let joined = referenced
        .iter()
        .map(|field| field_value(field, record))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }

    let first_last = format!("{} {}", record.value("firstname"), record.value("lastname"));
    let first_last = first_last.trim();
    if !first_last.is_empty() {
        return first_last.to_string();
    }

    NAME_FIELDS
        .iter()
        .map(|field| record.value(field))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}
