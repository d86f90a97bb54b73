//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use namefmt::PlaceholderUsage;
use namefmt_fields::{ALIASES, DOCUMENTED_PLACEHOLDERS};

/// Format the placeholders of one template as a table.
pub fn format_usage_table(usages: &[PlaceholderUsage]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Token", "Field", "Kind", "Form"]);

    for usage in usages {
        table.add_row(vec![
            usage.token.clone(),
            usage.field.clone().unwrap_or_else(|| "-".to_string()),
            usage.kind.to_string(),
            if usage.braced { "braced" } else { "bare" }.to_string(),
        ]);
    }

    table
}

/// Format the documented placeholder vocabulary with its aliases.
pub fn format_fields_table(fields: &[&str]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Field", "Alias", "Documented"]);

    for field in fields {
        table.add_row(vec![
            format!("{{{}}}", field),
            alias_for(field).map_or_else(String::new, |alias| format!("{{{}}}", alias)),
            if DOCUMENTED_PLACEHOLDERS.contains(field) { "yes" } else { "" }.to_string(),
        ]);
    }

    table
}

/// The alias that stands for `field`, if any.
pub fn alias_for(field: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(_, canonical)| *canonical == field)
        .map(|(alias, _)| *alias)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
