//! Relevance-expression rewriting.
//!
//! Two textual passes over the expression, no evaluation: strip every
//! `${...}` wrapper, then replace whole-word field names with their labels.
//! Operators and anything else between identifiers pass through untouched.

use std::collections::BTreeMap;

/// Rewrite a relevance expression for display.
///
/// `${age} > 17` with `age -> "Age"` becomes `Age > 17`. Names without a
/// label stay as their bare unwrapped identifier. Matching is on maximal
/// identifier runs, so a field `age` never fires inside `age_group`.
pub fn rewrite_relevant(expr: &str, labels: &BTreeMap<String, String>) -> String {
    substitute_names(&strip_placeholders(expr), labels)
}

/// Remove every `${`..`}` wrapper, keeping the inner text.
/// An unclosed `${` is left literally in place.
fn strip_placeholders(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    let mut rest = expr;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        match tail.find('}') {
            Some(end) => {
                out.push_str(&tail[..end]);
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace each maximal `[A-Za-z0-9_]` run that exactly matches a known
/// field name with that field's label. Substituted labels are emitted, not
/// rescanned.
fn substitute_names(expr: &str, labels: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(expr.len());
    let mut word = String::new();
    for ch in expr.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            word.push(ch);
        } else {
            flush_word(&mut out, &mut word, labels);
            out.push(ch);
        }
    }
    flush_word(&mut out, &mut word, labels);
    out
}

fn flush_word(out: &mut String, word: &mut String, labels: &BTreeMap<String, String>) {
    if word.is_empty() {
        return;
    }
    match labels.get(word.as_str()) {
        Some(label) => out.push_str(label),
        None => out.push_str(word),
    }
    word.clear();
}
