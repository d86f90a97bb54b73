//! Display cleanup for rendered names.
//!
//! Removes decoration left behind by empty placeholders: empty or
//! punctuation-only bracket pairs, stray spacing around punctuation, leading
//! separators and brackets or quotes wrapping the whole name. Passes run in a
//! fixed order; each assumes the whitespace normalization of the ones before.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace runs, including non-breaking spaces.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\u{00A0}\u{2007}\u{202F}]+").unwrap());

/// Brackets with nothing but whitespace inside.
static EMPTY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]|\{\s*\}|«\s*»").unwrap());

/// Empty quote pairs standing on their own. Straight quotes open and close
/// alike, so `"Jane" "Doe"` must not lose its inner `" "`.
static EMPTY_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(^|\s)(?:"\s*"|'\s*')(\s|$)"#).unwrap());

/// Brackets whose interior has no letters and no digits.
static PUNCTUATION_ONLY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^\p{L}\p{N}()]*\)|\[[^\p{L}\p{N}\[\]]*\]|\{[^\p{L}\p{N}{}]*\}").unwrap()
});

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:!?])").unwrap());

static SPACE_AFTER_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([(\[{«])\s+").unwrap());

static SPACE_BEFORE_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([)\]}»])").unwrap());

/// Leading separators: semicolons, commas, middle dots, bullets, dashes.
static LEADING_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[;,·•\-‐‑‒–—―]\s*)+").unwrap());

/// Pairs tried, in order, when unwrapping a fully enclosed name.
const ENCLOSING_PAIRS: &[(char, char)] = &[
    ('«', '»'),
    ('"', '"'),
    ('\'', '\''),
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
];

/// Clean up a rendered display string.
///
/// Running the cleanup on its own output returns it unchanged.
///
/// # Example
///
/// ```
/// use namefmt::clean_display;
///
/// assert_eq!(clean_display("Jane () Doe"), "Jane Doe");
/// assert_eq!(clean_display("«(Jane)»"), "Jane");
/// assert_eq!(clean_display(" - Jane , Doe"), "Jane, Doe");
/// assert_eq!(clean_display("( - )"), "");
/// ```
pub fn clean_display(rendered: &str) -> String {
    let mut display = collapse_whitespace(rendered);

    display = remove_empty_pairs(display);
    display = remove_repeatedly(&PUNCTUATION_ONLY_PAIR, display);

    display = SPACE_BEFORE_PUNCTUATION
        .replace_all(&display, "$1")
        .into_owned();
    display = SPACE_AFTER_OPENING.replace_all(&display, "$1").into_owned();
    display = SPACE_BEFORE_CLOSING.replace_all(&display, "$1").into_owned();

    display = collapse_whitespace(&display);
    if display.is_empty() {
        return display;
    }

    // Unwrapping can expose another leading separator: "(- Jane)".
    loop {
        let stripped = LEADING_SEPARATORS.replace(&display, "");
        let unwrapped = unwrap_enclosing(stripped.trim());
        if unwrapped == display {
            break;
        }
        display = unwrapped;
    }

    collapse_whitespace(&display)
}

/// Collapse whitespace runs to single spaces and trim.
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Remove empty brackets and quotes until none are left.
fn remove_empty_pairs(mut text: String) -> String {
    loop {
        let brackets = EMPTY_PAIR.replace_all(&text, "");
        let quotes = EMPTY_QUOTES.replace_all(&brackets, "$1$2").into_owned();
        if quotes == text {
            return text;
        }
        text = quotes;
    }
}

/// Apply a removal pattern until it no longer matches, so that nested
/// leftovers such as `(())` disappear entirely.
fn remove_repeatedly(pattern: &Regex, mut text: String) -> String {
    while pattern.is_match(&text) {
        text = pattern.replace_all(&text, "").into_owned();
    }
    text
}

/// Strip pairs wrapping the entire string, innermost last.
///
/// An empty interior makes the whole result empty.
fn unwrap_enclosing(text: &str) -> String {
    let mut current = text;
    loop {
        let inner = ENCLOSING_PAIRS
            .iter()
            .find_map(|&(open, close)| enclosed_interior(current, open, close));
        match inner {
            Some(inner) => {
                current = inner.trim();
                if current.is_empty() {
                    return String::new();
                }
            }
            None => return current.to_string(),
        }
    }
}

/// The interior of `text` if `open` at the start is closed by the `close`
/// at the very end (and not earlier).
fn enclosed_interior(text: &str, open: char, close: char) -> Option<&str> {
    let inner = text.strip_prefix(open)?.strip_suffix(close)?;
    if open == close {
        return (!inner.contains(open)).then_some(inner);
    }

    let mut depth = 0usize;
    for c in inner.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
        }
    }
    (depth == 0).then_some(inner)
}
