//! HTTP GET via the curl crate (libcurl).
//!
//! Buffers the whole response body in memory; image payloads are small
//! enough that streaming to disk is not worth the machinery. Follows
//! redirects. No overall timeout is set: a slow fetch blocks that paste
//! until it completes, which is the documented behavior.
//! Runs in the current thread; call from `spawn_blocking` if used from
//! async code.

use anyhow::{Context, Result};
use std::str;

use crate::host::{Fetcher, HttpResponse};

/// Fetcher backed by libcurl's easy API.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher;

impl CurlFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let mut body: Vec<u8> = Vec::new();
        let mut status_lines: Vec<String> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;

        {
            let mut transfer = easy.transfer();
            // Each hop contributes a status line; the last one is the final
            // response and carries the reason phrase (HTTP/1.x).
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let s = s.trim_end();
                    if s.starts_with("HTTP/") {
                        status_lines.push(s.to_string());
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("GET request failed")?;
        }

        let status = easy.response_code().context("no response code")?;
        let status_text = status_lines
            .last()
            .and_then(|line| reason_from_status_line(line))
            .unwrap_or_else(|| canonical_reason(status).to_string());

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Extracts the reason phrase from a status line like `HTTP/1.1 404 Not Found`.
/// HTTP/2 responses omit the phrase; returns `None` so the caller can fall
/// back to the canonical one.
fn reason_from_status_line(line: &str) -> Option<String> {
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let _code = parts.next()?;
    let reason = parts.next()?.trim();
    if reason.is_empty() {
        None
    } else {
        Some(reason.to_string())
    }
}

/// Canonical reason phrases for the statuses image hosts actually return.
fn canonical_reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}
