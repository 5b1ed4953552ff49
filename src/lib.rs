//! # Carousel
//!
//! Auto-advancing image carousel controller with accessible indicator
//! navigation, plus the terminal host used by the `carousel` binary.
//!
//! ## Architecture
//!
//! - **Controller**: `carousel` owns the position state, the repeating timer and
//!   the render step that keeps slide and indicator handles in sync
//! - **Timing**: `timer` (passive cancellable interval) and `time_source`
//!   (real or simulated clocks)
//! - **Configuration**: `config` for TOML-based settings
//! - **Commands**: `commands` hosts the controller in a terminal or a
//!   fast-forwarded headless run
//! - **Infrastructure**: argument parsing, signal handling, logging and
//!   utilities

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod carousel;
pub mod commands;
pub mod common;
pub mod config;
pub mod signals;
pub mod time_source;
pub mod timer;

pub use carousel::{Announcement, Carousel, CarouselState, Key, Slide};
pub use config::Config;
