//! Tests for full-name orchestration: format selection and fallback chain.

use std::sync::Arc;
use std::thread;

use namefmt::{FormatOptions, FullnameConfig, NameFormatter, PersonRecord, record};

fn jane() -> PersonRecord {
    record! { "firstname" => "Jane", "lastname" => "Doe" }
}

fn janey() -> PersonRecord {
    jane().with_field("alternatename", "Janey")
}

fn with_default(template: &str) -> NameFormatter {
    NameFormatter::new(FullnameConfig::builder().default_template(template).build())
}

// =========================================================================
// Template selection
// =========================================================================

#[test]
fn default_config_renders_first_and_last_name() {
    let formatter = NameFormatter::default();
    assert_eq!(formatter.fullname(&jane(), false), "Jane Doe");
}

#[test]
fn override_uses_alternate_template() {
    let formatter = NameFormatter::default();
    assert_eq!(formatter.fullname(&janey(), true), "Janey (Jane Doe)");
    assert_eq!(formatter.fullname(&jane(), true), "Jane Doe");
}

#[test]
fn override_option_takes_precedence_over_flag() {
    let formatter = NameFormatter::default();
    let force_on = FormatOptions::builder().override_names(true).build();
    let force_off = FormatOptions::builder().override_names(false).build();

    assert_eq!(
        formatter.fullname_with(&janey(), false, &force_on),
        "Janey (Jane Doe)"
    );
    assert_eq!(formatter.fullname_with(&janey(), true, &force_off), "Jane Doe");
    assert_eq!(
        formatter.fullname_with(&janey(), true, &FormatOptions::default()),
        "Janey (Jane Doe)"
    );
}

#[test]
fn configured_templates_replace_defaults() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .default_template("{lastname}, {firstname}")
            .alternate_template("{A}")
            .build(),
    );
    assert_eq!(formatter.fullname(&janey(), false), "Doe, Jane");
    assert_eq!(formatter.fullname(&janey(), true), "Janey");
}

// =========================================================================
// Forced names and session override
// =========================================================================

#[test]
fn forced_names_apply_to_a_copy() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .force_first_name("Student")
            .force_last_name("  ")
            .build(),
    );
    let record = jane();
    assert_eq!(formatter.fullname(&record, false), "Student Doe");
    assert_eq!(record.value("firstname"), "Jane");
}

#[test]
fn forced_names_are_ignored_when_overriding() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .force_first_name("Student")
            .build(),
    );
    assert_eq!(formatter.fullname(&janey(), true), "Janey (Jane Doe)");
}

#[test]
fn session_format_wins_over_settings() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .session_format_override("{lastname}, {firstname}")
            .default_template("{firstname}")
            .build(),
    );
    assert_eq!(formatter.fullname(&jane(), false), "Doe, Jane");
    assert_eq!(formatter.fullname(&janey(), true), "Janey (Jane Doe)");
}

#[test]
fn blank_session_format_is_ignored() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .session_format_override("   ")
            .build(),
    );
    assert_eq!(formatter.fullname(&jane(), false), "Jane Doe");
}

// =========================================================================
// Language-pack delegation
// =========================================================================

#[test]
fn language_sentinel_delegates_to_language_formatter() {
    let formatter = with_default("language").with_language_formatter(|record: &PersonRecord| {
        format!(
            "{} {}",
            record.value("lastname").to_uppercase(),
            record.value("firstname")
        )
    });
    assert_eq!(formatter.fullname(&jane(), false), "DOE Jane");
}

#[test]
fn empty_format_delegates_to_language_formatter() {
    let formatter =
        with_default("").with_language_formatter(|_: &PersonRecord| "from language pack".to_string());
    assert_eq!(formatter.fullname(&jane(), false), "from language pack");

    let formatter = with_default("  ")
        .with_language_formatter(|_: &PersonRecord| "from language pack".to_string());
    assert_eq!(formatter.fullname(&jane(), false), "from language pack");
}

#[test]
fn language_formatter_sees_forced_names() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .session_format_override("language")
            .force_last_name("Hidden")
            .build(),
    );
    assert_eq!(formatter.fullname(&jane(), false), "Jane Hidden");
}

// =========================================================================
// Multiple templates
// =========================================================================

#[test]
fn skips_templates_that_render_empty() {
    let formatter = with_default("{nonexistentfield};{firstname} {lastname}");
    assert_eq!(formatter.fullname(&jane(), false), "Jane Doe");
}

#[test]
fn first_non_empty_template_wins() {
    let formatter = with_default("{alternatename}; {firstname} {lastname}");
    assert_eq!(formatter.fullname(&janey(), false), "Janey");
    assert_eq!(formatter.fullname(&jane(), false), "Jane Doe");
}

#[test]
fn bare_word_templates_are_supported() {
    let formatter = with_default("alternatename;lastname firstname");
    assert_eq!(formatter.fullname(&jane(), false), "Doe Jane");
}

// =========================================================================
// Fallback chain
// =========================================================================

#[test]
fn single_empty_placeholder_falls_back_to_first_last() {
    let formatter = with_default("{alternatename}");
    assert_eq!(formatter.fullname(&jane(), false), "Jane Doe");
}

#[test]
fn required_referenced_value_short_circuits() {
    let formatter = NameFormatter::new(
        FullnameConfig::builder()
            .default_template("{alternatename}")
            .require_referenced_value(true)
            .build(),
    );
    assert_eq!(formatter.fullname(&jane(), false), "");
    assert_eq!(formatter.fullname(&janey(), false), "Janey");
}

#[test]
fn falls_back_to_first_name_field_in_priority_order() {
    let formatter = with_default("{alternatename}");

    let record = record! { "middlename" => "Quinn" };
    assert_eq!(formatter.fullname(&record, false), "Quinn");

    let record = record! { "middlename" => "Quinn", "lastnamephonetic" => "Do" };
    assert_eq!(formatter.fullname(&record, false), "Do");
}

#[test]
fn empty_record_renders_empty() {
    let formatter = NameFormatter::default();
    assert_eq!(formatter.fullname(&PersonRecord::new(), false), "");
    assert_eq!(formatter.fullname(&PersonRecord::new(), true), "");
}

#[test]
fn render_format_is_usable_directly() {
    let formatter = NameFormatter::default();
    assert_eq!(
        formatter.render_format("{E} {A} ({B} {C})", &janey().with_field("prefix", "Dr.")),
        "Dr. Janey (Jane Doe)"
    );
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn formatter_is_shareable_across_threads() {
    let formatter = Arc::new(NameFormatter::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let record = record! { "firstname" => format!("Jane{i}"), "lastname" => "Doe" };
                formatter.fullname(&record, false)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("Jane{i} Doe"));
    }
}
