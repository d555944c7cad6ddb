//! `imbed settings` – show the resolved settings blob and its location.

use anyhow::Result;

use imbed_core::config::{self, Settings};

pub fn run_settings(settings: &Settings) -> Result<()> {
    println!("settings file: {}", config::config_path()?.display());
    println!("confirm_before_embed = {}", settings.confirm_before_embed);
    println!("show_file_path = {}", settings.show_file_path);
    println!("attachment_folder = {:?}", settings.attachment_folder);
    println!("filename_format = {:?}", settings.filename_format);
    println!("use_timestamp = {}", settings.use_timestamp);
    Ok(())
}
