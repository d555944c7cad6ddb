//! Image URL classification.
//!
//! Decides whether a pasted string is a well-formed absolute URL whose path
//! denotes an image by extension. Query strings and fragments never count.

/// Path suffixes recognized as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".tiff",
];

/// Returns true iff `candidate` parses as an absolute URL and its path
/// component (lower-cased) ends with a recognized image extension.
///
/// Unparseable input is simply not an image URL; this never fails.
pub fn is_image_url(candidate: &str) -> bool {
    let Ok(parsed) = url::Url::parse(candidate) else {
        return false;
    };
    let path = parsed.path().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
