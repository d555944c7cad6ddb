use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::filename::NamingPolicy;

/// Plugin settings persisted by the host as a flat key-value blob, loaded
/// from `~/.config/imbed/settings.toml`. The core reads these per paste
/// invocation and never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ask before downloading and embedding.
    pub confirm_before_embed: bool,
    /// Include the saved path in the success notice.
    pub show_file_path: bool,
    /// Vault-relative attachment directory; empty falls back to the
    /// host-wide default.
    pub attachment_folder: String,
    /// Filename template with `{name}`, `{timestamp}`, `{date}` placeholders.
    pub filename_format: String,
    /// Expand `{timestamp}` (otherwise it becomes empty).
    pub use_timestamp: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_before_embed: true,
            show_file_path: false,
            attachment_folder: String::new(),
            filename_format: "{name}-{timestamp}".to_string(),
            use_timestamp: true,
        }
    }
}

impl Settings {
    /// Naming policy for one paste invocation.
    pub fn naming_policy(&self) -> NamingPolicy {
        NamingPolicy {
            format_template: self.filename_format.clone(),
            use_timestamp: self.use_timestamp,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imbed")?;
    Ok(xdg_dirs.place_config_file("settings.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        let defaults = Settings::default();
        persist(&defaults)?;
        tracing::info!("created default settings at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&data)?;
    Ok(settings)
}

/// Write the settings blob back to disk (the host's persist capability).
pub fn persist(settings: &Settings) -> Result<()> {
    let path = config_path()?;
    let toml = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_values() {
        let settings = Settings::default();
        assert!(settings.confirm_before_embed);
        assert!(!settings.show_file_path);
        assert_eq!(settings.attachment_folder, "");
        assert_eq!(settings.filename_format, "{name}-{timestamp}");
        assert!(settings.use_timestamp);
    }

    #[test]
    fn settings_toml_roundtrip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.confirm_before_embed, settings.confirm_before_embed);
        assert_eq!(parsed.show_file_path, settings.show_file_path);
        assert_eq!(parsed.attachment_folder, settings.attachment_folder);
        assert_eq!(parsed.filename_format, settings.filename_format);
        assert_eq!(parsed.use_timestamp, settings.use_timestamp);
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let toml = r#"
            attachment_folder = "media"
            use_timestamp = false
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.attachment_folder, "media");
        assert!(!settings.use_timestamp);
        assert!(settings.confirm_before_embed);
        assert_eq!(settings.filename_format, "{name}-{timestamp}");
    }

    #[test]
    fn naming_policy_mirrors_settings() {
        let settings: Settings = toml::from_str(
            r#"
            filename_format = "{date}-{name}"
            use_timestamp = false
        "#,
        )
        .unwrap();
        let policy = settings.naming_policy();
        assert_eq!(policy.format_template, "{date}-{name}");
        assert!(!policy.use_timestamp);
    }
}
