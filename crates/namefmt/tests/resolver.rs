//! Tests for field resolution: aliases, derived fields, record keys.

use namefmt::{
    PersonRecord, field_value, is_supported_field, record, resolve_field, suggest_field,
    supported_fields,
};

fn jane() -> PersonRecord {
    record! {
        "firstname" => "Jane",
        "lastname" => "Doe",
        "alternatename" => "Janey",
        "prefix" => "Dr.",
    }
}

// === Canonical lookup ===

#[test]
fn value_lookup_is_case_insensitive() {
    let record = record! { "FirstName" => "Jane" };
    assert_eq!(field_value("firstname", &record), "Jane");
    assert_eq!(field_value("FIRSTNAME", &record), "Jane");
}

#[test]
fn values_are_trimmed() {
    let record = record! { "firstname" => "  Jane \t" };
    assert_eq!(field_value("firstname", &record), "Jane");
}

#[test]
fn missing_and_absent_fields_are_empty() {
    let mut record = jane();
    record.set_absent("middlename");
    assert_eq!(field_value("middlename", &record), "");
    assert_eq!(field_value("suffix", &record), "");
    assert_eq!(field_value("nickname", &record), "");
}

// === Aliases ===

#[test]
fn aliases_resolve_like_canonical_names() {
    let record = jane();
    assert_eq!(field_value("A", &record), field_value("alternatename", &record));
    assert_eq!(field_value("B", &record), "Jane");
    assert_eq!(field_value("C", &record), "Doe");
    assert_eq!(field_value("a", &record), "Janey");
}

#[test]
fn alias_d_and_e() {
    let record = record! {
        "middlename" => "Q",
        "alternatename" => "Janey",
        "prefix" => "Dr.",
    };
    assert_eq!(field_value("D", &record), "Q");
    assert_eq!(field_value("E", &record), "Dr.");
}

// === Derived field ===

#[test]
fn alternate_name_prefix_requires_alternate_name() {
    let mut record = jane();
    assert_eq!(field_value("alternatenameprefix", &record), "Dr.");

    record.set("alternatename", "");
    assert_eq!(field_value("alternatenameprefix", &record), "");

    record.set("alternatename", "   ");
    assert_eq!(field_value("alternatenameprefix", &record), "");
}

#[test]
fn alternate_name_prefix_without_prefix_is_empty() {
    let record = record! { "alternatename" => "Janey" };
    assert_eq!(field_value("alternatenameprefix", &record), "");
}

// === Supported-field set ===

#[test]
fn resolve_field_returns_canonical_names() {
    let record = record! { "Department" => "Physics" };
    assert_eq!(resolve_field("FirstName", &record), Some("firstname"));
    assert_eq!(resolve_field("C", &record), Some("lastname"));
    assert_eq!(resolve_field("department", &record), Some("Department"));
    assert_eq!(resolve_field("faculty", &record), None);
}

#[test]
fn record_keys_extend_supported_fields() {
    let record = record! { "department" => "Physics" };
    assert!(is_supported_field("department", &record));
    assert!(!is_supported_field("department", &PersonRecord::new()));

    let fields = supported_fields(&record);
    assert!(fields.contains("department"));
    assert!(fields.contains("title"));
    assert!(fields.contains("alternatenameprefix"));
}

#[test]
fn absent_record_keys_are_still_supported() {
    let mut record = PersonRecord::new();
    record.set_absent("nickname");
    assert!(is_supported_field("nickname", &record));
    assert_eq!(field_value("nickname", &record), "");
}

// === Suggestions ===

#[test]
fn suggests_close_field_names() {
    let record = PersonRecord::new();
    let suggestions = suggest_field("firstnme", &record);
    assert_eq!(suggestions.first().map(String::as_str), Some("firstname"));

    assert!(suggest_field("emial", &record).contains(&"email".to_string()));
    assert!(suggest_field("zzzzzzzz", &record).is_empty());
}

#[test]
fn suggestions_include_record_keys() {
    let record = record! { "department" => "Physics" };
    assert_eq!(suggest_field("departmnt", &record), vec!["department"]);
}
