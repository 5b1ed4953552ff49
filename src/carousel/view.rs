//! Render targets for the carousel.
//!
//! The controller never queries a document. Whatever surface hosts the
//! carousel hands over its slide and indicator handles once they exist, and the
//! controller only ever flips visibility and the active marker on them.
//!
//! Before that handover the controller renders into [`Unattached`], which
//! ignores every sync. After [`Carousel::attach`](super::Carousel::attach) it
//! renders into a [`View`].

/// A per-slide renderable handle.
#[cfg_attr(test, mockall::automock)]
pub trait SlideElement {
    fn set_visible(&mut self, visible: bool);
}

/// A per-slide indicator handle.
#[cfg_attr(test, mockall::automock)]
pub trait IndicatorElement {
    fn set_active(&mut self, active: bool);
}

/// Something the controller can render its position into.
pub trait RenderTarget {
    /// Whether slide elements exist to render into.
    fn is_ready(&self) -> bool;

    /// Show only the slide at zero-based `position` and mark only its indicator.
    fn sync(&mut self, position: usize);
}

/// Render target before the view exists: every sync is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unattached;

impl RenderTarget for Unattached {
    fn is_ready(&self) -> bool {
        false
    }

    fn sync(&mut self, _position: usize) {}
}

/// Slide and indicator handles supplied by the hosting surface.
#[derive(Debug)]
pub struct View<S, I> {
    slides: Vec<S>,
    indicators: Vec<I>,
}

impl<S, I> View<S, I> {
    pub fn new(slides: Vec<S>, indicators: Vec<I>) -> Self {
        Self { slides, indicators }
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }
}

impl<S: SlideElement, I: IndicatorElement> RenderTarget for View<S, I> {
    fn is_ready(&self) -> bool {
        !self.slides.is_empty()
    }

    fn sync(&mut self, position: usize) {
        for slide in &mut self.slides {
            slide.set_visible(false);
        }
        for indicator in &mut self.indicators {
            indicator.set_active(false);
        }
        if let Some(slide) = self.slides.get_mut(position) {
            slide.set_visible(true);
        }
        if let Some(indicator) = self.indicators.get_mut(position) {
            indicator.set_active(true);
        }
    }
}

/// Plain slide handle that records its visibility.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SlideFrame {
    pub visible: bool,
}

impl SlideElement for SlideFrame {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Plain indicator handle that records whether it is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDot {
    pub active: bool,
}

impl IndicatorElement for IndicatorDot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// `count` fresh slide frames and indicator dots.
pub fn frames_and_dots(count: usize) -> (Vec<SlideFrame>, Vec<IndicatorDot>) {
    (
        vec![SlideFrame::default(); count],
        vec![IndicatorDot::default(); count],
    )
}
