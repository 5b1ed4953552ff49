//! Configuration validation functionality.
//!
//! Rejects settings that would produce a broken carousel and warns about
//! settings that work but hurt accessibility.

use anyhow::Result;

use super::Config;
use crate::common::constants::*;

/// Validate a parsed configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(interval) = config.interval_ms
        && !(MINIMUM_INTERVAL_MS..=MAXIMUM_INTERVAL_MS).contains(&interval)
    {
        anyhow::bail!(
            "interval_ms ({} ms) must be between {} and {} milliseconds",
            interval,
            MINIMUM_INTERVAL_MS,
            MAXIMUM_INTERVAL_MS
        );
    }

    if let Some(slides) = &config.slides {
        if slides.is_empty() {
            anyhow::bail!("slides must contain at least one entry when specified");
        }

        for (position, slide) in slides.iter().enumerate() {
            if slide.image_source.trim().is_empty() {
                anyhow::bail!("slide {} has an empty src", position + 1);
            }
        }

        let missing_alt: Vec<String> = slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.alt_text.trim().is_empty())
            .map(|(position, _)| (position + 1).to_string())
            .collect();
        if !missing_alt.is_empty() {
            log_pipe!();
            log_warning!(
                "Slides without alt text will not be described to screen readers: {}",
                missing_alt.join(", ")
            );
        }
    }

    Ok(())
}
