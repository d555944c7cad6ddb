//! Local filename generation.
//!
//! Derives a deterministic, collision-resistant filename from a remote image
//! URL plus the user's naming policy (format template, timestamp toggle).
//! The URL path is used as-is, without percent-decoding, so encoded bytes
//! like `%20` clean to `-20`; existing vaults depend on those names.

mod stem;
mod template;

use chrono::{DateTime, Local};

/// Fallback stem when the URL path yields nothing usable.
const DEFAULT_STEM: &str = "image";

/// Fallback extension when the path segment carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Naming policy for generated filenames. Immutable per invocation; built
/// from settings at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    /// Template with `{name}`, `{timestamp}` and `{date}` placeholders.
    /// Each placeholder is substituted at its first occurrence only.
    pub format_template: String,
    /// When false, `{timestamp}` expands to the empty string.
    pub use_timestamp: bool,
}

/// Generates the local filename for `url` under `policy`, stamped with the
/// current local time.
///
/// Assumes `url` already passed classification; malformed input degrades to
/// the `image.jpg` fallbacks rather than failing.
pub fn generate_filename(url: &str, policy: &NamingPolicy) -> String {
    generate_filename_at(url, policy, Local::now())
}

/// Like [`generate_filename`] with an explicit clock, so tests control the
/// `{timestamp}` and `{date}` tokens.
pub fn generate_filename_at(url: &str, policy: &NamingPolicy, now: DateTime<Local>) -> String {
    let raw = stem::last_path_segment(url).unwrap_or_else(|| DEFAULT_STEM.to_string());
    // Path extraction already excludes query/fragment; strip remnants anyway.
    let raw = raw
        .split(['?', '#'])
        .next()
        .unwrap_or(DEFAULT_STEM)
        .to_string();

    let (base, extension) = stem::split_extension(&raw);
    let cleaned = stem::clean_stem(&base);

    let name = template::expand(&policy.format_template, &cleaned, policy.use_timestamp, now);
    format!("{}.{}", name, extension)
}
