//! Implementation of the `namefmt fields` command.

use miette::{IntoDiagnostic, Result};
use namefmt_fields::{accepted_field_names, ALIASES, DOCUMENTED_PLACEHOLDERS};
use serde::Serialize;

use crate::output::table::{alias_for, format_fields_table};

/// Arguments for the fields command.
#[derive(Debug, clap::Args)]
pub struct FieldsArgs {
    /// List only the placeholders documented for administrators
    #[arg(long)]
    pub documented: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one field.
#[derive(Debug, Serialize)]
struct FieldJson {
    field: &'static str,
    alias: Option<&'static str>,
    documented: bool,
}

/// Run the fields command.
pub fn run_fields(args: FieldsArgs) -> Result<i32> {
    let fields: Vec<&str> = if args.documented {
        DOCUMENTED_PLACEHOLDERS.to_vec()
    } else {
        accepted_field_names().collect()
    };

    if args.json {
        let json_data: Vec<FieldJson> = fields
            .iter()
            .map(|&field| FieldJson {
                field,
                alias: alias_for(field),
                documented: DOCUMENTED_PLACEHOLDERS.contains(&field),
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
        return Ok(exitcode::OK);
    }

    println!("{}", format_fields_table(&fields));
    println!("\nAliases:");
    for (alias, field) in ALIASES {
        println!("  {{{}}} = {{{}}}", alias, field);
    }
    println!("\nRecord keys are also accepted as placeholders.");
    Ok(exitcode::OK)
}
