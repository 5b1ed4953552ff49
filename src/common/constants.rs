//! Application-wide constants and defaults.

// # Timing

/// Auto-advance interval used when `interval_ms` is not configured.
pub const DEFAULT_INTERVAL_MS: u64 = 2000;
pub const MINIMUM_INTERVAL_MS: u64 = 100;
pub const MAXIMUM_INTERVAL_MS: u64 = 600_000;

/// Upper bound on how long the interactive loop blocks waiting for input,
/// so shutdown signals are noticed promptly.
pub const INPUT_POLL_CEILING_MS: u64 = 250;

// # Playback

pub const DEFAULT_AUTOPLAY: bool = true;
pub const DEFAULT_RESUME_RESTARTS_TIMER: bool = false;
pub const DEFAULT_RESTART_AFTER_NAVIGATION: bool = false;

/// Built-in slide registry as (image source, alt text).
pub const DEFAULT_SLIDES: &[(&str, &str)] = &[
    ("Images/image1.jpg", "Description of Image 1"),
    ("Images/image2.jpg", "Description of Image 2"),
    ("Images/image3.jpg", "Description of Image 3"),
    ("Images/image4.jpg", "Description of Image 4"),
    ("Images/image5.jpg", "Description of Image 5"),
];

// # Files

pub const CONFIG_DIR_NAME: &str = "carousel";
pub const CONFIG_FILE_NAME: &str = "carousel.toml";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
