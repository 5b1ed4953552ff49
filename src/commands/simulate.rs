//! Headless simulation of the carousel under a fast-forwarded clock.
//!
//! Sets up a [`SimulatedTimeSource`], attaches the carousel to in-memory slide
//! frames and indicator dots, and jumps the clock from one timer deadline to
//! the next until the requested span of slideshow time has passed.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use super::describe;
use crate::carousel::view::frames_and_dots;
use crate::carousel::{Carousel, CarouselState};
use crate::common::utils::format_duration;
use crate::config::Config;
use crate::time_source::{self, SimulatedTimeSource};

/// Handle `carousel simulate <duration_ms>`.
///
/// Installs the simulated clock as the global time source so log lines carry
/// simulated timestamps, then runs the simulation.
pub fn handle_simulate_command(
    config: &Config,
    duration_ms: u64,
    debug_enabled: bool,
) -> Result<CarouselState> {
    let clock = Arc::new(SimulatedTimeSource::starting_now());
    time_source::init_time_source(clock.clone());

    log_block_start!("Simulation Mode");
    log_indented!(
        "Simulating {} of slideshow time",
        format_duration(Duration::from_millis(duration_ms))
    );

    let final_state = run_simulation(
        config,
        clock,
        Duration::from_millis(duration_ms),
        debug_enabled,
    );

    log_block_start!("Simulation finished");
    log_indented!(
        "Final slide {} ({})",
        final_state.current_index,
        if final_state.is_auto_advancing {
            "playing"
        } else {
            "paused"
        }
    );
    Ok(final_state)
}

/// Drive a carousel on `clock` for `duration` and return its final state.
pub fn run_simulation(
    config: &Config,
    clock: Arc<SimulatedTimeSource>,
    duration: Duration,
    debug_enabled: bool,
) -> CarouselState {
    let start = clock.elapsed();
    let carousel = Carousel::create(config, clock.clone()).with_debug(debug_enabled);
    let (frames, dots) = frames_and_dots(carousel.len());
    let mut carousel = carousel.attach(frames, dots);
    log_decorated!("{}", describe(&carousel));

    loop {
        let remaining = duration.saturating_sub(clock.elapsed() - start);
        let Some(wait) = carousel.time_until_next_tick() else {
            log_indented!("Timer idle, nothing further will change");
            clock.advance(remaining);
            break;
        };
        if wait > remaining {
            clock.advance(remaining);
            break;
        }

        clock.advance(wait);
        let fired = carousel.poll();
        if debug_enabled {
            log_debug!("Dispatched {} tick(s)", fired);
        }
        log_decorated!("{}", describe(&carousel));
    }

    carousel.teardown()
}
