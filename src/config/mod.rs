//! Configuration system for the carousel.
//!
//! Settings live in `carousel.toml`. The file is searched in:
//! 1. The directory given with `--config <dir>`
//! 2. **XDG_CONFIG_HOME**/carousel/carousel.toml
//!
//! When no file exists at the default location, a commented default
//! configuration is written there on first load.
//!
//! ```toml
//! #[Timing]
//! interval_ms = 2000               # Auto-advance interval (100-600000) ms
//! autoplay = true                  # Start auto-advancing immediately
//!
//! #[Playback]
//! resume_restarts_timer = false    # Re-arm the timer when resuming after a pause
//! restart_after_navigation = false # Re-arm the timer after jumping to a slide
//!
//! [[slides]]
//! src = "Images/image1.jpg"
//! alt = "Description of Image 1"
//! ```
//!
//! Every field is optional; missing fields fall back to the constants in
//! `common::constants`. Values are validated after parsing, and unknown keys
//! are rejected so typos surface as errors instead of silently using defaults.

pub mod builder;
pub mod loading;
pub mod validation;


use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::carousel::slide::{Slide, default_slides};
use crate::common::constants::*;
use crate::common::utils::private_path;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Carousel settings loaded from `carousel.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Milliseconds between automatic advances.
    pub interval_ms: Option<u64>,
    /// Whether the carousel starts auto-advancing on creation.
    pub autoplay: Option<bool>,
    /// Re-arm the repeating timer when `resume()` re-enables auto-advancing.
    ///
    /// Off by default: resuming sets the auto-advancing flag but leaves the
    /// timer idle until playback is toggled.
    pub resume_restarts_timer: Option<bool>,
    /// Re-arm the repeating timer after a manual jump to a slide.
    pub restart_after_navigation: Option<bool>,
    /// Ordered slide registry. The built-in five images are used when absent.
    pub slides: Option<Vec<Slide>>,
}

impl Config {
    /// Auto-advance interval.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS))
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    pub fn resume_restarts_timer(&self) -> bool {
        self.resume_restarts_timer
            .unwrap_or(DEFAULT_RESUME_RESTARTS_TIMER)
    }

    pub fn restart_after_navigation(&self) -> bool {
        self.restart_after_navigation
            .unwrap_or(DEFAULT_RESTART_AFTER_NAVIGATION)
    }

    /// The configured slides, or the built-in registry.
    pub fn slides(&self) -> Vec<Slide> {
        self.slides.clone().unwrap_or_else(default_slides)
    }

    /// Load configuration using the module's load function
    pub fn load() -> Result<Self> {
        load()
    }

    /// Load from path using the module's load_from_path function
    pub fn load_from_path(path: &Path) -> Result<Self> {
        load_from_path(path)
    }

    /// Get configuration path using the module's get_config_path function
    pub fn get_config_path() -> Result<PathBuf> {
        get_config_path()
    }

    /// Log the effective settings.
    pub fn log_config(&self, source: &Path) {
        log_block_start!("Loaded configuration from {}", private_path(source));
        log_indented!("Interval: {}ms", self.interval().as_millis());
        log_indented!("Autoplay: {}", self.autoplay());
        if self.resume_restarts_timer() {
            log_indented!("Resume restarts timer: true");
        }
        if self.restart_after_navigation() {
            log_indented!("Restart after navigation: true");
        }

        let slides = self.slides();
        log_indented!("Slides: {}", slides.len());
        for (position, slide) in slides.iter().enumerate() {
            log_indented!("  {}. {}", position + 1, slide);
        }
    }
}
