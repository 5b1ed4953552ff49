//! Slide descriptors and the default registry.

use serde::Deserialize;
use std::fmt;

use crate::common::constants::DEFAULT_SLIDES;

/// One image entry in the carousel sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    /// Image path or URL.
    #[serde(rename = "src")]
    pub image_source: String,
    /// Accessible text for the image.
    #[serde(rename = "alt", default)]
    pub alt_text: String,
}

impl Slide {
    pub fn new(image_source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_source: image_source.into(),
            alt_text: alt_text.into(),
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt_text.is_empty() {
            write!(f, "{}", self.image_source)
        } else {
            write!(f, "{} ({})", self.image_source, self.alt_text)
        }
    }
}

/// The built-in five image registry used when no slides are configured.
pub fn default_slides() -> Vec<Slide> {
    DEFAULT_SLIDES
        .iter()
        .map(|(src, alt)| Slide::new(*src, *alt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let slides = default_slides();
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[0].image_source, "Images/image1.jpg");
        assert_eq!(slides[4].alt_text, "Description of Image 5");
    }

    #[test]
    fn test_display_without_alt_text() {
        assert_eq!(Slide::new("a.jpg", "").to_string(), "a.jpg");
        assert_eq!(Slide::new("a.jpg", "Cat").to_string(), "a.jpg (Cat)");
    }
}
