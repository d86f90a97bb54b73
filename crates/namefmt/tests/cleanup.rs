//! Tests for display cleanup passes.

use namefmt::clean_display;

// =========================================================================
// Whitespace
// =========================================================================

#[test]
fn collapses_whitespace_and_non_breaking_spaces() {
    assert_eq!(clean_display("  Jane \u{00A0}\u{00A0} Doe\t"), "Jane Doe");
    assert_eq!(clean_display("Jane\nDoe"), "Jane Doe");
}

#[test]
fn blank_input_is_empty() {
    assert_eq!(clean_display(""), "");
    assert_eq!(clean_display(" \u{00A0} "), "");
}

// =========================================================================
// Empty and punctuation-only pairs
// =========================================================================

#[test]
fn removes_empty_pairs() {
    assert_eq!(clean_display("Jane () Doe"), "Jane Doe");
    assert_eq!(clean_display("Jane [ ] Doe"), "Jane Doe");
    assert_eq!(clean_display("Jane {} Doe"), "Jane Doe");
    assert_eq!(clean_display("Jane \"\" Doe"), "Jane Doe");
    assert_eq!(clean_display("Jane '' Doe"), "Jane Doe");
    assert_eq!(clean_display("Jane « » Doe"), "Jane Doe");
}

#[test]
fn removes_nested_empty_pairs() {
    assert_eq!(clean_display("Jane [(  )] Doe"), "Jane Doe");
    assert_eq!(clean_display("[(  )]"), "");
}

#[test]
fn removes_punctuation_only_brackets() {
    assert_eq!(clean_display("Jane (, -) Doe"), "Jane Doe");
    assert_eq!(clean_display("Jane [ / ] Doe"), "Jane Doe");
    assert_eq!(clean_display("( - )"), "");
}

#[test]
fn keeps_brackets_with_content() {
    assert_eq!(clean_display("Janey (Jane Doe)"), "Janey (Jane Doe)");
    assert_eq!(clean_display("Jane (2)"), "Jane (2)");
}

// =========================================================================
// Punctuation spacing
// =========================================================================

#[test]
fn removes_space_before_punctuation() {
    assert_eq!(clean_display("Doe , Jane"), "Doe, Jane");
    assert_eq!(clean_display("Jane Doe !"), "Jane Doe!");
}

#[test]
fn removes_space_inside_brackets() {
    assert_eq!(clean_display("Jane ( Janey )"), "Jane (Janey)");
    assert_eq!(clean_display("Jane « Janey »"), "Jane «Janey»");
}

// =========================================================================
// Leading separators
// =========================================================================

#[test]
fn strips_leading_separators() {
    assert_eq!(clean_display(", Jane"), "Jane");
    assert_eq!(clean_display("— Jane"), "Jane");
    assert_eq!(clean_display("· • Jane"), "Jane");
    assert_eq!(clean_display("; - Jane Doe"), "Jane Doe");
}

// =========================================================================
// Enclosing pairs
// =========================================================================

#[test]
fn unwraps_enclosing_pairs() {
    assert_eq!(clean_display("(Jane Doe)"), "Jane Doe");
    assert_eq!(clean_display("«(Jane)»"), "Jane");
    assert_eq!(clean_display("\"(Jane)\""), "Jane");
    assert_eq!(clean_display("((Jane))"), "Jane");
    assert_eq!(clean_display("[ 'Jane' ]"), "Jane");
}

#[test]
fn unwrap_exposing_separator_strips_it() {
    assert_eq!(clean_display("(- Jane)"), "Jane");
}

#[test]
fn does_not_unwrap_separate_groups() {
    assert_eq!(clean_display("(Jane) (Doe)"), "(Jane) (Doe)");
    assert_eq!(clean_display("\"Jane\" \"Doe\""), "\"Jane\" \"Doe\"");
}

#[test]
fn empty_enclosed_interior_is_empty() {
    assert_eq!(clean_display("()"), "");
    assert_eq!(clean_display("«»"), "");
}

// =========================================================================
// Robustness
// =========================================================================

#[test]
fn unbalanced_brackets_are_best_effort() {
    assert_eq!(clean_display("Jane (Doe"), "Jane (Doe");
    assert_eq!(clean_display("Jane) Doe"), "Jane) Doe");
}

#[test]
fn cleanup_is_idempotent_on_clean_output() {
    let samples = [
        "Jane Doe",
        "Doe, Jane",
        "Janey (Jane Doe)",
        "Dr. Jane Doe",
        "O'Neil",
        "Jane «Janey» Doe",
        "Jean-Luc Picard",
        "(Jane) (Doe)",
    ];
    for sample in samples {
        assert_eq!(clean_display(sample), sample);
        let once = clean_display(&format!("  {sample} () "));
        assert_eq!(clean_display(&once), once);
    }
}

#[test]
fn every_pass_runs_in_order() {
    assert_eq!(clean_display("; ( ) « Jane '' , Doe »"), "Jane, Doe");
}
