//! Implementation of the `namefmt render` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use namefmt::{FullnameConfig, NameFormatter};
use serde::Serialize;

use super::{build_record, parse_key_val, report_load_error};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Person record file (JSON object of field values)
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Field values in name=value format (repeatable, applied over --record)
    #[arg(short = 'f', long = "field", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Display-name configuration file (JSON)
    #[arg(long, env = "NAMEFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Format to render with, in place of the configured templates.
    /// Acts as the session format, which name overrides bypass.
    #[arg(long, conflicts_with = "override_names")]
    pub template: Option<String>,

    /// Render with name overrides (the alternate template)
    #[arg(long = "override")]
    pub override_names: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub fullname: String,
    #[serde(rename = "override")]
    pub override_names: bool,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let mut config = match &args.config {
        Some(path) => match FullnameConfig::load(path) {
            Ok(config) => config,
            Err(err) => return Ok(report_load_error(&err)),
        },
        None => FullnameConfig::default(),
    };
    if let Some(template) = args.template {
        config.session_format_override = Some(template);
    }

    let record = match build_record(args.record.as_deref(), args.fields) {
        Ok(record) => record,
        Err(err) => return Ok(report_load_error(&err)),
    };
    tracing::debug!(%record, "loaded record");

    let fullname = NameFormatter::new(config).fullname(&record, args.override_names);

    if args.json {
        let output = RenderResult {
            fullname,
            override_names: args.override_names,
        };
        let json_output = serde_json::to_string_pretty(&output).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", fullname);
    }
    Ok(exitcode::OK)
}
