//! Display-name configuration.
//!
//! Everything the host system would otherwise look up ambiently (site-wide
//! forced names, the session display override, the template settings) is
//! passed in explicitly through [`FullnameConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::PersonRecord;

/// Template used when no default template is configured.
pub const DEFAULT_TEMPLATE: &str = "{firstname} {lastname}";

/// Template used when no alternate template is configured.
pub const DEFAULT_ALTERNATE_TEMPLATE: &str = "{alternatename} ({firstname} {lastname})";

/// Format value that delegates to the language-pack formatter.
pub const LANGUAGE_SENTINEL: &str = "language";

/// Display-name configuration, read-only to the engine.
///
/// Deserializes from camelCase JSON; every key is optional.
///
/// # Example
///
/// ```
/// use namefmt::FullnameConfig;
///
/// let config = FullnameConfig::builder()
///     .default_template("{lastname}, {firstname}")
///     .build();
///
/// assert_eq!(config.template_for(false), "{lastname}, {firstname}");
/// assert_eq!(
///     config.template_for(true),
///     "{alternatename} ({firstname} {lastname})"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
pub struct FullnameConfig {
    /// Site-wide first name replacing every record's `firstname`.
    #[builder(into)]
    pub force_first_name: Option<String>,

    /// Site-wide last name replacing every record's `lastname`.
    #[builder(into)]
    pub force_last_name: Option<String>,

    /// Per-session format, preferred over the template settings.
    ///
    /// Ignored when rendering with name overrides.
    #[builder(into)]
    pub session_format_override: Option<String>,

    /// Format for regular display. Falls back to [`DEFAULT_TEMPLATE`].
    #[builder(into)]
    pub default_template: Option<String>,

    /// Format used when overriding names. Falls back to
    /// [`DEFAULT_ALTERNATE_TEMPLATE`].
    #[builder(into)]
    pub alternate_template: Option<String>,

    /// Return an empty name when every field referenced by the templates is
    /// empty, instead of walking the fallback chain.
    #[builder(default)]
    pub require_referenced_value: bool,
}

impl FullnameConfig {
    /// The configured template setting for the given mode.
    pub fn template_for(&self, override_names: bool) -> &str {
        if override_names {
            self.alternate_template
                .as_deref()
                .unwrap_or(DEFAULT_ALTERNATE_TEMPLATE)
        } else {
            self.default_template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
        }
    }

    /// The session format override, if one is set and not blank.
    pub fn session_format(&self) -> Option<&str> {
        self.session_format_override
            .as_deref()
            .filter(|format| !format.trim().is_empty())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_json(path.as_ref())
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        parse_json(Path::new("<string>"), content)
    }
}

impl PersonRecord {
    /// Load a record from a JSON object file (`{"firstname": "Jane"}`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_json(path.as_ref())
    }

    /// Parse a record from a JSON object string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        parse_json(Path::new("<string>"), content)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &content)
}

fn parse_json<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(|err| ConfigError::Parse {
        path: PathBuf::from(path),
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}
