//! Implementation of the `namefmt check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report, Result};
use namefmt::{inspect_template, normalize_str, suggest_field, PlaceholderUsage, UsageKind};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{build_record, report_load_error};
use crate::output::table::format_usage_table;
use crate::output::UnknownPlaceholder;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Formats to check; a format may pack several templates separated by ';'
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Record file whose keys count as supported fields
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Exit with non-zero code if any placeholder is unknown
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one checked format.
#[derive(Debug, Serialize)]
struct CheckJson {
    template: String,
    normalized: String,
    placeholders: Vec<PlaceholderUsage>,
    unknown: Vec<UnknownJson>,
}

#[derive(Debug, Serialize)]
struct UnknownJson {
    token: String,
    suggestions: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let record = match build_record(args.record.as_deref(), Vec::new()) {
        Ok(record) => record,
        Err(err) => return Ok(report_load_error(&err)),
    };

    let mut unknown_count = 0;
    let mut json_data: Vec<CheckJson> = Vec::new();

    for (index, template) in args.templates.iter().enumerate() {
        let name = format!("template #{}", index + 1);
        let usages = inspect_template(template, &record);
        let normalized = normalize_str(template, &record);
        let unknown: Vec<(&PlaceholderUsage, Vec<String>)> = usages
            .iter()
            .filter(|usage| usage.kind == UsageKind::Unknown)
            .map(|usage| (usage, suggest_field(&usage.token, &record)))
            .collect();
        unknown_count += unknown.len();

        if args.json {
            json_data.push(CheckJson {
                template: template.clone(),
                normalized,
                unknown: unknown
                    .iter()
                    .map(|(usage, suggestions)| UnknownJson {
                        token: usage.token.clone(),
                        suggestions: suggestions.clone(),
                    })
                    .collect(),
                placeholders: usages.clone(),
            });
            continue;
        }

        println!(
            "{} {}",
            name.if_supports_color(Stream::Stdout, |text| text.bold()),
            template
        );
        if usages.is_empty() {
            println!("  no placeholders (rendered as literal text)");
        } else {
            println!("{}", format_usage_table(&usages));
        }
        println!("  normalized: {}\n", normalized);

        for (usage, suggestions) in &unknown {
            let diagnostic = UnknownPlaceholder::new(&name, template, usage, suggestions);
            eprintln!("{:?}", Report::new(diagnostic));
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else if unknown_count == 0 {
        println!(
            "{}",
            "No unknown placeholders".if_supports_color(Stream::Stdout, |text| text.green())
        );
    } else {
        println!(
            "{}",
            format!("{} unknown placeholder(s)", unknown_count)
                .if_supports_color(Stream::Stdout, |text| text.yellow())
        );
    }

    if args.strict && unknown_count > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
