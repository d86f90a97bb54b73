use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A person record: field name to value, read-only to the engine.
///
/// The record carries a documented core (`firstname`, `lastname`, ...) plus
/// any number of extension keys. A key may be present with an absent value
/// (`None`, e.g. JSON `null`), which is treated the same as an empty string
/// for rendering but still makes the key referenceable from templates.
///
/// Lookups are case-insensitive; an exact-case key wins when several keys
/// differ only by case.
///
/// # Example
///
/// ```
/// use namefmt::PersonRecord;
///
/// let record = PersonRecord::new()
///     .with_field("firstname", "  Jane ")
///     .with_field("LastName", "Doe");
///
/// assert_eq!(record.value("firstname"), "Jane");
/// assert_eq!(record.value("lastname"), "Doe");
/// assert_eq!(record.value("middlename"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl PersonRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record with `name` set to `value`.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Some(value.into()));
    }

    /// Declare a field that is present on the record but has no value.
    pub fn set_absent(&mut self, name: impl Into<String>) {
        self.fields.insert(name.into(), None);
    }

    /// The record's own spelling of the key matching `name`, if any.
    pub fn key(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.fields.get_key_value(name) {
            return Some(key);
        }
        self.fields
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    /// Raw (untrimmed) value of a field, `None` if missing or absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = self.key(name)?;
        self.fields.get(key)?.as_deref()
    }

    /// Trimmed value of a field; empty when missing or absent.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).map(str::trim).unwrap_or_default()
    }

    /// Check whether a field has a non-blank value.
    pub fn has_value(&self, name: &str) -> bool {
        !self.value(name).is_empty()
    }

    /// All keys present on the record, including those with absent values.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of keys present on the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a copy of this record with site-wide forced names applied.
    ///
    /// Blank overrides are ignored. The receiver is never modified.
    pub fn with_forced_names(&self, first: Option<&str>, last: Option<&str>) -> PersonRecord {
        let mut forced = self.clone();
        for (field, value) in [("firstname", first), ("lastname", last)] {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                let key = forced.key(field).unwrap_or(field).to_string();
                forced.set(key, value);
            }
        }
        forced
    }
}

impl<K, V> FromIterator<(K, V)> for PersonRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = PersonRecord::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

impl Display for PersonRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (key, value) in &self.fields {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            match value {
                Some(value) => write!(f, "{key}={value:?}")?,
                None => write!(f, "{key}=null")?,
            }
        }
        Ok(())
    }
}
