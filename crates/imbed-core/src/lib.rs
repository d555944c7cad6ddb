pub mod config;
pub mod logging;

// Core paste pipeline: classify → extract → name → fetch → persist → embed.
pub mod classify;
pub mod clipboard;
pub mod download;
pub mod fetch;
pub mod filename;
pub mod host;
pub mod paste;
pub mod vault;
