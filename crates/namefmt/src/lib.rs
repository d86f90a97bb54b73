pub mod config;
pub mod engine;
pub mod error;
pub mod fullname;
pub mod parser;
pub mod types;

pub use config::{
    DEFAULT_ALTERNATE_TEMPLATE, DEFAULT_TEMPLATE, FullnameConfig, LANGUAGE_SENTINEL,
};
pub use engine::{
    PlaceholderUsage, UsageKind, clean_display, field_value, inspect_template,
    is_supported_field, normalize, normalize_str, render_str, render_template, resolve_field,
    suggest_field, supported_fields,
};
pub use error::ConfigError;
pub use fullname::{EnglishLanguageFormatter, FormatOptions, LanguageFormatter, NameFormatter};
pub use types::PersonRecord;

/// Creates a [`PersonRecord`] from field-value pairs.
///
/// Values are converted via `Into<String>`.
///
/// # Example
///
/// ```
/// use namefmt::record;
///
/// let r = record! { "firstname" => "Jane", "lastname" => "Doe" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r.value("lastname"), "Doe");
/// ```
#[macro_export]
macro_rules! record {
    {} => {
        $crate::PersonRecord::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut record = $crate::PersonRecord::new();
            $(
                record.set($key, $value);
            )+
            record
        }
    };
}
