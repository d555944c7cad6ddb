//! Clipboard payload extraction.
//!
//! The host hands the paste pipeline an opaque clipboard payload; the only
//! representation the core cares about is plain text that parses as a URL.

/// Plain-data view of a clipboard event payload as supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct ClipboardPayload {
    text: Option<String>,
}

impl ClipboardPayload {
    /// Payload carrying a plain-text representation.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Payload with no plain-text representation (e.g. image-only clipboard).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// Pulls a URL out of a clipboard payload, if there is one.
///
/// Returns `None` for a missing payload, missing or empty text, or text that
/// does not parse as an absolute URL. Valid text is returned unchanged, with no
/// trimming or normalization.
pub fn url_from_clipboard(data: Option<&ClipboardPayload>) -> Option<String> {
    let text = data?.text()?;
    if text.is_empty() {
        return None;
    }
    url::Url::parse(text).ok()?;
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_payload_yields_none() {
        assert_eq!(url_from_clipboard(None), None);
    }

    #[test]
    fn missing_or_empty_text_yields_none() {
        assert_eq!(url_from_clipboard(Some(&ClipboardPayload::empty())), None);
        assert_eq!(
            url_from_clipboard(Some(&ClipboardPayload::from_text(""))),
            None
        );
    }

    #[test]
    fn invalid_url_yields_none() {
        let payload = ClipboardPayload::from_text("just some words");
        assert_eq!(url_from_clipboard(Some(&payload)), None);
        let relative = ClipboardPayload::from_text("images/photo.png");
        assert_eq!(url_from_clipboard(Some(&relative)), None);
    }

    #[test]
    fn valid_url_returned_unchanged() {
        let url = "https://example.com/photo.jpg?v=1#frag";
        let payload = ClipboardPayload::from_text(url);
        assert_eq!(url_from_clipboard(Some(&payload)).as_deref(), Some(url));
    }

    #[test]
    fn non_image_urls_still_extracted() {
        // Extraction only validates URL shape; classification is a separate gate.
        let payload = ClipboardPayload::from_text("https://example.com/page.html");
        assert_eq!(
            url_from_clipboard(Some(&payload)).as_deref(),
            Some("https://example.com/page.html")
        );
    }
}
