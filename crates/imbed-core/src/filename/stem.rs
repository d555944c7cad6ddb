//! Stem extraction and cleaning for generated filenames.

/// Extracts the last path segment from a URL for use as the raw stem.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
/// The segment is taken verbatim from the path, percent-encoding included.
pub(crate) fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}

/// Splits `raw` into (stem, extension).
///
/// The extension is everything after the final `.`, lower-cased; a missing
/// or empty extension defaults to `jpg`.
pub(crate) fn split_extension(raw: &str) -> (String, String) {
    match raw.rfind('.') {
        Some(idx) => {
            let ext = raw[idx + 1..].to_ascii_lowercase();
            let stem = raw[..idx].to_string();
            if ext.is_empty() {
                (stem, super::DEFAULT_EXTENSION.to_string())
            } else {
                (stem, ext)
            }
        }
        None => (raw.to_string(), super::DEFAULT_EXTENSION.to_string()),
    }
}

/// Cleans a raw stem for filesystem use.
///
/// Every maximal run of characters outside `[a-zA-Z0-9]` becomes a single
/// hyphen, leading/trailing hyphens are trimmed, and the result is
/// lower-cased. An empty result falls back to `image`.
pub(crate) fn clean_stem(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_hyphen = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            out.push('-');
            prev_hyphen = true;
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        super::DEFAULT_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}
