//! CLI command implementations.

mod check;
mod fields;
mod render;

use std::path::Path;

use namefmt::{ConfigError, PersonRecord};

pub use check::{run_check, CheckArgs};
pub use fields::{run_fields, FieldsArgs};
pub use render::{run_render, RenderArgs};

/// Parse a `name=value` pair.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid field format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Load a record file, if given, and apply `name=value` fields on top.
fn build_record(
    path: Option<&Path>,
    fields: Vec<(String, String)>,
) -> Result<PersonRecord, ConfigError> {
    let mut record = match path {
        Some(path) => PersonRecord::load(path)?,
        None => PersonRecord::new(),
    };
    for (name, value) in fields {
        record.set(name, value);
    }
    Ok(record)
}

/// Print a load failure and return the matching exit code.
fn report_load_error(err: &ConfigError) -> i32 {
    eprintln!("{:?}", miette::miette!("{}", err));
    match err {
        ConfigError::Io { .. } => exitcode::NOINPUT,
        ConfigError::Parse { .. } => exitcode::DATAERR,
    }
}
