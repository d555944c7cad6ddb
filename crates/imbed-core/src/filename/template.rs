//! Format-template expansion for generated filenames.

use chrono::{DateTime, Local};

/// Expands `template` with the cleaned stem and time tokens.
///
/// Each placeholder is substituted at its first occurrence only, a
/// compatibility behavior existing vault names rely on. Hyphen runs in the
/// result collapse to one and a trailing run is stripped (e.g.
/// `{name}-{timestamp}` with the timestamp disabled yields just the name).
/// An empty or all-whitespace result falls back to the stem, ignoring the
/// template entirely.
pub(crate) fn expand(
    template: &str,
    stem: &str,
    use_timestamp: bool,
    now: DateTime<Local>,
) -> String {
    let timestamp = if use_timestamp {
        now.format("%Y-%m-%dT%H-%M-%S").to_string()
    } else {
        String::new()
    };
    let date = now.format("%Y-%m-%d").to_string();

    let expanded = template
        .replacen("{name}", stem, 1)
        .replacen("{timestamp}", &timestamp, 1)
        .replacen("{date}", &date, 1);

    let collapsed = collapse_hyphens(&expanded);
    let trimmed = collapsed.trim_end_matches('-');

    if trimmed.trim().is_empty() {
        stem.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collapses every run of `-` to a single hyphen.
fn collapse_hyphens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_hyphen = false;
    for c in s.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }
    out
}
