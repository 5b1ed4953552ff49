use std::sync::Arc;
use std::time::Duration;

use carousel::carousel::view::{IndicatorElement, SlideElement, frames_and_dots};
use carousel::time_source::SimulatedTimeSource;
use carousel::{Announcement, Carousel, Config, Key};

const INTERVAL: Duration = Duration::from_millis(2000);

fn clock() -> Arc<SimulatedTimeSource> {
    Arc::new(SimulatedTimeSource::starting_now())
}

#[test]
fn test_go_to_slide_three_of_five() {
    let clock = clock();
    let carousel = Carousel::create(&Config::default(), clock);
    let (frames, dots) = frames_and_dots(5);
    let mut carousel = carousel.attach(frames, dots);

    carousel.go_to_slide(3);

    let visible: Vec<usize> = carousel
        .view()
        .slides()
        .iter()
        .enumerate()
        .filter(|(_, f)| f.visible)
        .map(|(i, _)| i + 1)
        .collect();
    let active: Vec<usize> = carousel
        .view()
        .indicators()
        .iter()
        .enumerate()
        .filter(|(_, d)| d.active)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(visible, vec![3]);
    assert_eq!(active, vec![3]);
    assert_eq!(carousel.announcement(), Announcement::Polite);
}

#[test]
fn test_toggle_twice_restores_state() {
    let clock = clock();
    let carousel = Carousel::create(&Config::default(), clock);
    let (frames, dots) = frames_and_dots(5);
    let mut carousel = carousel.attach(frames, dots);
    carousel.go_to_slide(2);
    let original = carousel.is_auto_advancing();

    carousel.toggle_play_pause();
    carousel.toggle_play_pause();

    assert_eq!(carousel.is_auto_advancing(), original);
    assert_eq!(carousel.announcement(), Announcement::Off);
}

#[test]
fn test_no_mutation_after_teardown() {
    let clock = clock();
    let carousel = Carousel::create(&Config::default(), clock.clone());
    let (frames, dots) = frames_and_dots(5);
    let mut carousel = carousel.attach(frames, dots);

    clock.advance(INTERVAL);
    carousel.poll();
    let before = carousel.state();

    let after = carousel.teardown();
    clock.advance(INTERVAL * 5);

    assert_eq!(after, before);
    assert_eq!(after.current_index, 2);
}

#[test]
fn test_timer_keeps_running_while_playing() {
    let clock = clock();
    let carousel = Carousel::create(&Config::default(), clock.clone());
    let (frames, dots) = frames_and_dots(5);
    let mut carousel = carousel.attach(frames, dots);

    for expected in [2, 3, 4, 5, 1, 2] {
        clock.advance(INTERVAL);
        assert_eq!(carousel.poll(), 1);
        assert_eq!(carousel.current_index(), expected);
        assert_eq!(carousel.announcement(), Announcement::Off);
    }
}

#[test]
fn test_arrow_key_on_indicator_does_nothing() {
    let clock = clock();
    let carousel = Carousel::create(&Config::default(), clock);
    let (frames, dots) = frames_and_dots(5);
    let mut carousel = carousel.attach(frames, dots);

    assert!(!carousel.handle_indicator_activation(Key::from_name("ArrowRight"), 4));
    assert!(!carousel.handle_indicator_activation(Key::Left, 4));
    assert_eq!(carousel.current_index(), 1);
}

/// Element handles that share one log, the way DOM handles share a document.
#[derive(Clone)]
struct Logged {
    name: String,
    log: Arc<std::sync::Mutex<Vec<String>>>,
}

impl SlideElement for Logged {
    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.log.lock().unwrap().push(format!("show {}", self.name));
        }
    }
}

impl IndicatorElement for Logged {
    fn set_active(&mut self, active: bool) {
        if active {
            self.log.lock().unwrap().push(format!("mark {}", self.name));
        }
    }
}

#[test]
fn test_custom_element_handles() {
    let log = Arc::new(std::sync::Mutex::new(Vec::new()));
    let handles = |prefix: &str| -> Vec<Logged> {
        (1..=5)
            .map(|i| Logged {
                name: format!("{prefix}{i}"),
                log: Arc::clone(&log),
            })
            .collect()
    };

    let carousel = Carousel::create(&Config::default(), clock());
    let mut carousel = carousel.attach(handles("slide"), handles("dot"));
    carousel.advance_to_previous();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["show slide1", "mark dot1", "show slide5", "mark dot5"]
    );
}

#[test]
fn test_attach_with_fewer_indicators() {
    let carousel = Carousel::create(&Config::default(), clock());
    let (frames, mut dots) = frames_and_dots(5);
    dots.truncate(2);
    let mut carousel = carousel.attach(frames, dots);

    carousel.go_to_slide(4);
    assert!(carousel.view().slides()[3].visible);
    assert!(carousel.view().indicators().iter().all(|d| !d.active));
}
