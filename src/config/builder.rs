//! Default configuration file creation.
//!
//! The default file is assembled with a small builder so setting comments line
//! up in one column regardless of value width.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::common::constants::*;
use crate::common::utils::private_path;

/// Write a commented default `carousel.toml` at `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", private_path(path)))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", private_path(path));
    Ok(())
}

/// Text of the default configuration file.
pub fn default_config_content() -> String {
    let mut builder = ConfigBuilder::new()
        .add_section("Timing")
        .add_setting(
            "interval_ms",
            &DEFAULT_INTERVAL_MS.to_string(),
            &format!(
                "Auto-advance interval ({MINIMUM_INTERVAL_MS}-{MAXIMUM_INTERVAL_MS}) ms"
            ),
        )
        .add_setting(
            "autoplay",
            &DEFAULT_AUTOPLAY.to_string(),
            "Start auto-advancing immediately",
        )
        .add_section("Playback")
        .add_setting(
            "resume_restarts_timer",
            &DEFAULT_RESUME_RESTARTS_TIMER.to_string(),
            "Re-arm the timer when resuming after a pause",
        )
        .add_setting(
            "restart_after_navigation",
            &DEFAULT_RESTART_AFTER_NAVIGATION.to_string(),
            "Re-arm the timer after jumping to a slide",
        );

    for (src, alt) in DEFAULT_SLIDES {
        let src = quote(src);
        let alt = quote(alt);
        builder = builder.add_table_entry("slides", &[("src", src.as_str()), ("alt", alt.as_str())]);
    }

    let mut content = builder.build();
    content.push('\n');
    content
}

/// Encode `value` as a TOML string literal.
pub(super) fn quote(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
    Table(String),
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    /// Append one `[[name]]` array-of-tables entry. Must follow all settings.
    fn add_table_entry(mut self, name: &str, fields: &[(&str, &str)]) -> Self {
        let mut block = format!("[[{name}]]");
        for (key, value) in fields {
            block.push_str(&format!("\n{key} = {value}"));
        }
        self.entries.push(ConfigEntry::Table(block));
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) | ConfigEntry::Table(title) => {
                    if !result.is_empty() {
                        result.push(String::new());
                    }
                    result.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}
