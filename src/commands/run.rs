//! Interactive terminal host for the carousel.
//!
//! The terminal plays the role of the surrounding view: it owns one slide
//! frame and one indicator dot per slide, draws a single status line, and
//! forwards key presses to the controller. The loop blocks on keyboard input
//! for at most the time left until the next timer tick, then polls the
//! carousel, so timer ticks and user input interleave on one thread.

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use super::describe;
use crate::carousel::view::frames_and_dots;
use crate::carousel::{Carousel, CarouselState, IndicatorDot, Key, SlideFrame, View};
use crate::common::constants::INPUT_POLL_CEILING_MS;
use crate::common::utils::TerminalGuard;
use crate::config::Config;
use crate::signals::setup_signal_handler;
use crate::time_source::TimeSource;

type TerminalCarousel = Carousel<View<SlideFrame, IndicatorDot>>;

/// What the host loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Host-side UI state that is not part of the carousel itself.
#[derive(Debug, Default)]
pub(crate) struct HostState {
    /// Zero-based indicator that keyboard activation applies to.
    pub focus: usize,
}

/// Run the carousel in the terminal until the user quits or a shutdown
/// signal arrives.
pub fn run_interactive(
    config: &Config,
    clock: Arc<dyn TimeSource>,
    debug_enabled: bool,
) -> Result<CarouselState> {
    let signal_state = setup_signal_handler(debug_enabled)?;

    let carousel = Carousel::create(config, clock).with_debug(debug_enabled);
    let (frames, dots) = frames_and_dots(carousel.len());
    let mut carousel = carousel.attach(frames, dots);
    let mut host = HostState::default();

    log_block_start!("Carousel running ({} slides)", carousel.len());
    log_indented!("Press 'q' to quit, 'help run' lists all keys");

    let loop_result = {
        let _terminal = TerminalGuard::new()?;
        run_loop(&mut carousel, &mut host, || signal_state.is_running())
    };

    // Teardown happens on every exit path, including loop errors.
    let final_state = carousel.teardown();
    loop_result?;

    log_block_start!("Carousel stopped at slide {}", final_state.current_index);
    Ok(final_state)
}

fn run_loop(
    carousel: &mut TerminalCarousel,
    host: &mut HostState,
    is_running: impl Fn() -> bool,
) -> Result<()> {
    draw(carousel, host)?;
    let ceiling = Duration::from_millis(INPUT_POLL_CEILING_MS);

    while is_running() {
        let wait = carousel
            .time_until_next_tick()
            .map_or(ceiling, |until_tick| until_tick.min(ceiling));

        if event::poll(wait).context("Failed to poll terminal events")?
            && let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && key.kind == KeyEventKind::Press
            && handle_key(carousel, host, key) == Flow::Quit
        {
            break;
        }

        carousel.poll();
        draw(carousel, host)?;
    }

    Ok(())
}

/// Apply one key press to the carousel.
pub(crate) fn handle_key(
    carousel: &mut TerminalCarousel,
    host: &mut HostState,
    event: KeyEvent,
) -> Flow {
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    let count = carousel.len();
    match Key::from(event.code) {
        Key::Char('q') | Key::Escape => return Flow::Quit,
        // The prev/next controls are disabled at the ends.
        Key::Left if !carousel.is_first_slide() => carousel.advance_to_previous(),
        Key::Right if !carousel.is_last_slide() => carousel.advance_to_next(),
        Key::Tab if count > 0 => host.focus = (host.focus + 1) % count,
        Key::BackTab if count > 0 => host.focus = (host.focus + count - 1) % count,
        key if key.is_activation() => {
            carousel.handle_indicator_activation(key, host.focus as isize + 1);
        }
        Key::Char('p') => carousel.toggle_play_pause(),
        Key::Char('s') => carousel.pause(),
        Key::Char('r') => carousel.resume(),
        Key::Char(digit @ '1'..='9') => {
            let n = digit.to_digit(10).map_or(0, |d| d as usize);
            if (1..=count).contains(&n) {
                host.focus = n - 1;
                carousel.activate_indicator(n as isize);
            }
        }
        _ => {}
    }
    Flow::Continue
}

/// Render the indicator strip with the focused dot bracketed.
pub(crate) fn indicator_strip(carousel: &TerminalCarousel, host: &HostState) -> String {
    carousel
        .view()
        .indicators()
        .iter()
        .enumerate()
        .map(|(i, dot)| {
            let glyph = if dot.active { '●' } else { '○' };
            if i == host.focus {
                format!("[{glyph}]")
            } else {
                format!(" {glyph} ")
            }
        })
        .collect()
}

fn draw(carousel: &TerminalCarousel, host: &HostState) -> Result<()> {
    let line = format!("{} {}", indicator_strip(carousel, host), describe(carousel));
    execute!(
        stdout(),
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(line)
    )
    .context("Failed to draw carousel")
}
