//! Slideshow controller.
//!
//! [`Carousel`] owns the position state and the auto-advance timer and keeps
//! the slide and indicator handles consistent with the current position.
//!
//! ## Lifecycle
//!
//! 1. [`Carousel::create`] builds the state (position 1) and, with autoplay
//!    on, arms the repeating timer.
//! 2. [`Carousel::attach`] hands over the rendered slide and indicator handles
//!    and performs the first render. It consumes the unattached controller, so
//!    it can only happen once.
//! 3. The host event loop calls [`Carousel::poll`] whenever
//!    [`Carousel::time_until_next_tick`] has elapsed, and forwards user input
//!    to the navigation operations.
//! 4. [`Carousel::teardown`] cancels the timer and consumes the controller.
//!
//! Every position change funnels through one render step: normalize the
//! index by wraparound, hide every slide, clear every indicator, then show
//! and mark the one at the current position.
//!
//! ## Play state
//!
//! `toggle_play_pause` and `pause` start and stop the timer together with the
//! auto-advancing flag. `go_to_slide` cancels the timer so a pending tick
//! cannot overwrite a manual jump, and `resume` sets the flag without
//! re-arming the timer. Both leave the carousel claiming to auto-advance
//! with no tick scheduled unless `restart_after_navigation` /
//! `resume_restarts_timer` are enabled in the configuration.

pub mod input;
pub mod slide;
pub mod view;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::time_source::TimeSource;
use crate::timer::IntervalTimer;

pub use input::Key;
pub use slide::Slide;
pub use view::{
    IndicatorDot, IndicatorElement, RenderTarget, SlideElement, SlideFrame, Unattached, View,
};

/// Politeness of assistive-technology announcements for slide changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Announcement {
    /// Automatic changes are not announced.
    #[default]
    Off,
    /// User-driven changes are announced when the reader is idle.
    Polite,
}

impl Announcement {
    /// Value for an `aria-live` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Announcement::Off => "off",
            Announcement::Polite => "polite",
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable position state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// One-based position. Within `1..=N` after every render once attached.
    pub current_index: isize,
    pub is_auto_advancing: bool,
    pub announcement: Announcement,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 1,
            is_auto_advancing: true,
            announcement: Announcement::Off,
        }
    }
}

/// Image carousel controller, generic over where it renders.
pub struct Carousel<V = Unattached> {
    slides: Vec<Slide>,
    state: CarouselState,
    timer: IntervalTimer,
    clock: Arc<dyn TimeSource>,
    resume_restarts_timer: bool,
    restart_after_navigation: bool,
    debug_enabled: bool,
    view: V,
}

impl Carousel<Unattached> {
    /// Build a carousel from configuration and start its timer.
    ///
    /// With `autoplay = false` the carousel starts paused and the timer stays
    /// disarmed until playback is toggled on.
    pub fn create(config: &Config, clock: Arc<dyn TimeSource>) -> Self {
        let autoplay = config.autoplay();
        let mut timer = IntervalTimer::new(config.interval());
        if autoplay {
            timer.arm(clock.now());
        }

        Self {
            slides: config.slides(),
            state: CarouselState {
                is_auto_advancing: autoplay,
                ..CarouselState::default()
            },
            timer,
            clock,
            resume_restarts_timer: config.resume_restarts_timer(),
            restart_after_navigation: config.restart_after_navigation(),
            debug_enabled: false,
            view: Unattached,
        }
    }

    /// Emit per-operation debug traces.
    pub fn with_debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    /// Hand over the rendered slide and indicator handles and render.
    pub fn attach<S, I>(self, slides: Vec<S>, indicators: Vec<I>) -> Carousel<View<S, I>>
    where
        S: SlideElement,
        I: IndicatorElement,
    {
        let expected = self.slides.len();
        if slides.len() != expected || indicators.len() != expected {
            log_pipe!();
            log_warning!(
                "Carousel has {} slides but was attached to {} slide elements and {} indicators",
                expected,
                slides.len(),
                indicators.len()
            );
        }

        let mut attached = Carousel {
            slides: self.slides,
            state: self.state,
            timer: self.timer,
            clock: self.clock,
            resume_restarts_timer: self.resume_restarts_timer,
            restart_after_navigation: self.restart_after_navigation,
            debug_enabled: self.debug_enabled,
            view: View::new(slides, indicators),
        };
        attached.render();
        attached
    }
}

impl<S, I> Carousel<View<S, I>> {
    /// The attached slide and indicator handles.
    pub fn view(&self) -> &View<S, I> {
        &self.view
    }
}

impl<V: RenderTarget> Carousel<V> {
    /// Dispatch every timer tick that is due.
    ///
    /// Each tick advances one slide while auto-advancing is on. Returns the
    /// number of ticks dispatched.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while self.timer.fire_if_due(now) {
            fired += 1;
            self.on_tick();
        }
        fired
    }

    fn on_tick(&mut self) {
        if self.state.is_auto_advancing {
            self.advance_to_next();
        }
    }

    /// Time the host may wait before the next [`poll`](Self::poll) is due,
    /// or `None` when no tick is scheduled.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.timer.time_until_next(self.clock.now())
    }

    pub fn advance_to_next(&mut self) {
        // Saturates while render cannot normalize (unattached or no slides)
        self.state.current_index = self.state.current_index.saturating_add(1);
        self.render();
    }

    pub fn advance_to_previous(&mut self) {
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.render();
    }

    /// Jump to the one-based slide `n`.
    ///
    /// Out-of-range values are wrapped by the render step, never rejected.
    /// The change is announced politely since it was user-driven.
    pub fn go_to_slide(&mut self, n: isize) {
        self.timer.cancel();
        self.state.current_index = n;
        self.render();
        self.state.announcement = Announcement::Polite;

        if self.restart_after_navigation && self.state.is_auto_advancing {
            self.timer.arm(self.clock.now());
        }
        if self.debug_enabled {
            log_debug!("Manual navigation to slide {}", self.state.current_index);
        }
    }

    /// Pointer activation of the indicator for one-based slide `n`.
    pub fn activate_indicator(&mut self, n: isize) {
        self.go_to_slide(n);
    }

    /// Keyboard activation of the indicator for one-based slide `n`.
    ///
    /// Returns `true` when `key` was an activation key; the caller must then
    /// suppress the control's default handling.
    pub fn handle_indicator_activation(&mut self, key: Key, n: isize) -> bool {
        if key.is_activation() {
            self.go_to_slide(n);
            true
        } else {
            false
        }
    }

    pub fn toggle_play_pause(&mut self) {
        self.state.is_auto_advancing = !self.state.is_auto_advancing;
        if self.state.is_auto_advancing {
            self.timer.arm(self.clock.now());
            self.render();
        } else {
            self.timer.cancel();
        }
        self.state.announcement = Announcement::Off;

        if self.debug_enabled {
            log_debug!(
                "Playback {}",
                if self.state.is_auto_advancing {
                    "started"
                } else {
                    "paused"
                }
            );
        }
    }

    /// Stop auto-advancing without rendering.
    pub fn pause(&mut self) {
        self.timer.cancel();
        self.state.is_auto_advancing = false;
    }

    /// Re-enable auto-advancing after a pause.
    ///
    /// The timer is only re-armed when `resume_restarts_timer` is configured.
    pub fn resume(&mut self) {
        if !self.state.is_auto_advancing {
            self.render();
            if self.resume_restarts_timer {
                self.timer.arm(self.clock.now());
            }
            self.state.is_auto_advancing = true;
        }
    }

    pub fn is_first_slide(&self) -> bool {
        self.state.current_index == 1
    }

    pub fn is_last_slide(&self) -> bool {
        self.state.current_index == self.len() as isize
    }

    /// Normalize the position and bring the render target in line with it.
    ///
    /// A no-op until slide elements exist. Idempotent for an unchanged index.
    pub fn render(&mut self) {
        let count = self.len() as isize;
        if count == 0 || !self.view.is_ready() {
            return;
        }

        if self.state.current_index > count {
            self.state.current_index = 1;
        }
        if self.state.current_index < 1 {
            self.state.current_index = count;
        }

        self.view.sync((self.state.current_index - 1) as usize);
    }

    pub fn current_index(&self) -> isize {
        self.state.current_index
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.state.is_auto_advancing
    }

    pub fn announcement(&self) -> Announcement {
        self.state.announcement
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn interval(&self) -> Duration {
        self.timer.interval()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The slide at the current position, if the position is in range.
    pub fn active_slide(&self) -> Option<&Slide> {
        self.state
            .current_index
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.slides.get(i))
    }

    /// Cancel the timer and discard the controller, returning its final state.
    pub fn teardown(mut self) -> CarouselState {
        self.timer.cancel();
        if self.debug_enabled {
            log_debug!(
                "Carousel torn down at slide {}/{}",
                self.state.current_index,
                self.len()
            );
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::SimulatedTimeSource;

    const INTERVAL: Duration = Duration::from_millis(2000);

    fn five_slides() -> Config {
        Config::default()
    }

    fn setup(config: &Config) -> (Arc<SimulatedTimeSource>, Carousel<View<SlideFrame, IndicatorDot>>) {
        let clock = Arc::new(SimulatedTimeSource::starting_now());
        let carousel = Carousel::create(config, clock.clone());
        let (frames, dots) = view::frames_and_dots(carousel.len());
        (clock, carousel.attach(frames, dots))
    }

    fn visible_positions(carousel: &Carousel<View<SlideFrame, IndicatorDot>>) -> Vec<usize> {
        carousel
            .view()
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, _)| i + 1)
            .collect()
    }

    fn active_positions(carousel: &Carousel<View<SlideFrame, IndicatorDot>>) -> Vec<usize> {
        carousel
            .view()
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.active)
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[test]
    fn test_create_starts_playing_at_first_slide() {
        let clock = Arc::new(SimulatedTimeSource::starting_now());
        let carousel = Carousel::create(&five_slides(), clock);

        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_auto_advancing());
        assert!(carousel.is_timer_armed());
        assert_eq!(carousel.announcement(), Announcement::Off);
        assert_eq!(carousel.interval(), INTERVAL);
    }

    #[test]
    fn test_create_without_autoplay() {
        let config = Config {
            autoplay: Some(false),
            ..Config::default()
        };
        let clock = Arc::new(SimulatedTimeSource::starting_now());
        let carousel = Carousel::create(&config, clock);

        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.is_timer_armed());
    }

    #[test]
    fn test_attach_renders_first_slide() {
        let (_, carousel) = setup(&five_slides());
        assert_eq!(visible_positions(&carousel), vec![1]);
        assert_eq!(active_positions(&carousel), vec![1]);
    }

    #[test]
    fn test_ticks_before_attach_are_normalized_on_attach() {
        let clock = Arc::new(SimulatedTimeSource::starting_now());
        let mut carousel = Carousel::create(&five_slides(), clock.clone());

        clock.advance(INTERVAL * 6);
        assert_eq!(carousel.poll(), 6);
        // Unrendered, so the index is not wrapped yet
        assert_eq!(carousel.current_index(), 7);

        let (frames, dots) = view::frames_and_dots(5);
        let carousel = carousel.attach(frames, dots);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(visible_positions(&carousel), vec![1]);
    }

    #[test]
    fn test_timer_advances_each_interval() {
        let (clock, mut carousel) = setup(&five_slides());

        clock.advance(INTERVAL);
        assert_eq!(carousel.poll(), 1);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(visible_positions(&carousel), vec![2]);

        clock.advance(Duration::from_millis(1999));
        assert_eq!(carousel.poll(), 0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let (_, mut carousel) = setup(&five_slides());
        carousel.go_to_slide(5);
        assert!(carousel.is_last_slide());

        carousel.advance_to_next();
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_first_slide());
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let (_, mut carousel) = setup(&five_slides());
        carousel.advance_to_previous();
        assert_eq!(carousel.current_index(), 5);
        assert_eq!(active_positions(&carousel), vec![5]);
    }

    #[test]
    fn test_go_to_slide_shows_target_and_announces() {
        let (_, mut carousel) = setup(&five_slides());
        carousel.go_to_slide(3);

        assert_eq!(visible_positions(&carousel), vec![3]);
        assert_eq!(active_positions(&carousel), vec![3]);
        assert_eq!(carousel.announcement(), Announcement::Polite);
        assert_eq!(carousel.announcement().as_str(), "polite");
    }

    #[test]
    fn test_go_to_slide_cancels_pending_tick() {
        let (clock, mut carousel) = setup(&five_slides());
        clock.advance(Duration::from_millis(1900));
        carousel.go_to_slide(4);

        clock.advance(INTERVAL * 3);
        assert_eq!(carousel.poll(), 0);
        assert_eq!(carousel.current_index(), 4);
        assert!(carousel.is_auto_advancing());
        assert!(!carousel.is_timer_armed());
    }

    #[test]
    fn test_go_to_slide_restarts_timer_when_configured() {
        let config = Config {
            restart_after_navigation: Some(true),
            ..Config::default()
        };
        let (clock, mut carousel) = setup(&config);
        clock.advance(Duration::from_millis(1900));
        carousel.go_to_slide(4);

        clock.advance(Duration::from_millis(1900));
        assert_eq!(carousel.poll(), 0);
        clock.advance(Duration::from_millis(100));
        assert_eq!(carousel.poll(), 1);
        assert_eq!(carousel.current_index(), 5);
    }

    #[test]
    fn test_go_to_slide_wraps_out_of_range() {
        let (_, mut carousel) = setup(&five_slides());
        carousel.go_to_slide(9);
        assert_eq!(carousel.current_index(), 1);
        carousel.go_to_slide(-2);
        assert_eq!(carousel.current_index(), 5);
    }

    #[test]
    fn test_toggle_twice_restores_playing() {
        let (clock, mut carousel) = setup(&five_slides());
        carousel.go_to_slide(2);

        carousel.toggle_play_pause();
        assert!(!carousel.is_auto_advancing());
        assert!(!carousel.is_timer_armed());
        assert_eq!(carousel.announcement(), Announcement::Off);

        carousel.toggle_play_pause();
        assert!(carousel.is_auto_advancing());
        assert!(carousel.is_timer_armed());
        assert_eq!(carousel.announcement(), Announcement::Off);

        clock.advance(INTERVAL);
        carousel.poll();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn test_pause_stops_timer() {
        let (clock, mut carousel) = setup(&five_slides());
        carousel.pause();

        clock.advance(INTERVAL * 4);
        assert_eq!(carousel.poll(), 0);
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_auto_advancing());
    }

    #[test]
    fn test_resume_does_not_rearm_timer_by_default() {
        let (clock, mut carousel) = setup(&five_slides());
        carousel.pause();
        carousel.resume();

        assert!(carousel.is_auto_advancing());
        assert!(!carousel.is_timer_armed());
        clock.advance(INTERVAL * 2);
        assert_eq!(carousel.poll(), 0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_resume_rearms_timer_when_configured() {
        let config = Config {
            resume_restarts_timer: Some(true),
            ..Config::default()
        };
        let (clock, mut carousel) = setup(&config);
        carousel.pause();
        carousel.resume();

        clock.advance(INTERVAL);
        assert_eq!(carousel.poll(), 1);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_resume_while_playing_is_noop() {
        let (_, mut carousel) = setup(&five_slides());
        let before = carousel.state();
        carousel.resume();
        assert_eq!(carousel.state(), before);
        assert!(carousel.is_timer_armed());
    }

    #[test]
    fn test_indicator_activation_keys() {
        let (_, mut carousel) = setup(&five_slides());

        assert!(!carousel.handle_indicator_activation(Key::Right, 4));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.announcement(), Announcement::Off);

        assert!(carousel.handle_indicator_activation(Key::Space, 4));
        assert_eq!(carousel.current_index(), 4);

        assert!(carousel.handle_indicator_activation(Key::Enter, 2));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_boundary_predicates() {
        let (_, mut carousel) = setup(&five_slides());
        assert!(carousel.is_first_slide());
        assert!(!carousel.is_last_slide());

        carousel.go_to_slide(5);
        assert!(!carousel.is_first_slide());
        assert!(carousel.is_last_slide());
    }

    #[test]
    fn test_render_is_idempotent() {
        let (_, mut carousel) = setup(&five_slides());
        carousel.go_to_slide(4);
        let before: Vec<_> = carousel.view().slides().to_vec();

        carousel.render();
        assert_eq!(carousel.view().slides(), before.as_slice());
        assert_eq!(active_positions(&carousel), vec![4]);
    }

    #[test]
    fn test_empty_registry_never_renders() {
        let config = Config {
            slides: Some(Vec::new()),
            ..Config::default()
        };
        let (clock, mut carousel) = setup(&config);
        clock.advance(INTERVAL);
        carousel.poll();
        carousel.advance_to_previous();
        assert!(carousel.view().slides().is_empty());
        assert_eq!(carousel.active_slide(), None);
    }

    #[test]
    fn test_extreme_index_before_attach_does_not_overflow() {
        let clock = Arc::new(SimulatedTimeSource::starting_now());
        let mut carousel = Carousel::create(&five_slides(), clock.clone());

        carousel.go_to_slide(isize::MAX);
        carousel.advance_to_next();
        clock.advance(INTERVAL * 3);
        carousel.poll();
        assert_eq!(carousel.current_index(), isize::MAX);

        carousel.go_to_slide(isize::MIN);
        carousel.advance_to_previous();
        assert_eq!(carousel.current_index(), isize::MIN);

        let (frames, dots) = view::frames_and_dots(5);
        let carousel = carousel.attach(frames, dots);
        assert_eq!(carousel.current_index(), 5);
        assert_eq!(visible_positions(&carousel), vec![5]);
    }

    #[test]
    fn test_extreme_index_without_slide_elements_does_not_overflow() {
        let config = Config {
            slides: Some(Vec::new()),
            ..Config::default()
        };
        let (_, mut carousel) = setup(&config);

        carousel.go_to_slide(isize::MIN);
        carousel.advance_to_previous();
        assert_eq!(carousel.current_index(), isize::MIN);
        assert_eq!(carousel.active_slide(), None);

        carousel.go_to_slide(isize::MAX);
        carousel.advance_to_next();
        assert_eq!(carousel.current_index(), isize::MAX);
    }

    #[test]
    fn test_active_slide_matches_index() {
        let (_, mut carousel) = setup(&five_slides());
        carousel.go_to_slide(2);
        assert_eq!(
            carousel.active_slide().map(|s| s.image_source.as_str()),
            Some("Images/image2.jpg")
        );
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let (clock, mut carousel) = setup(&five_slides());
        clock.advance(INTERVAL);
        carousel.poll();

        let final_state = carousel.teardown();
        clock.advance(INTERVAL * 5);
        assert_eq!(final_state.current_index, 2);
    }
}
