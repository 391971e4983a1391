//! # Paged carousel navigation
//!
//! `PageNavigator` turns a horizontal scroll offset into a page index for an
//! onboarding-style carousel: full-width pages, a "Next" button that advances
//! one page, and a "Done" state once the last page has been reached.
//!
//! The host feeds three things:
//!
//! - raw scroll samples through [`PageNavigator::on_scroll`] (these only move
//!   the shared offset, which drives the indicator dots),
//! - settle events through [`PageNavigator::on_settle`] once momentum stops,
//! - "Next" presses through [`PageNavigator::advance`], which either asks the
//!   host to scroll or, on the last page, reports completion.
//!
//! Reaching the last page is sticky: scrolling back afterwards updates the
//! current index but the navigator stays in [`PagerPhase::AtTerminalPage`]
//! until [`PageNavigator::reset`].

use glide_core::{ControlPoints, DrivingValue, Extrapolate, Result, driving_value};

/// Side effects the navigator asks of its host.
pub trait PagerHost {
    /// Start a (fire-and-forget) scroll animation to `offset`. The outcome is
    /// observed later through a settle event.
    fn request_scroll_to(&mut self, offset: f32);
    /// "Done" was pressed on the last page.
    fn on_finished(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerPhase {
    Browsing,
    AtTerminalPage,
}

/// Read-only snapshot for the render layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub current_index: usize,
    pub is_terminal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Advance {
    ScrollTo { index: usize, offset: f32 },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub scale: f32,
    pub opacity: f32,
}

const DOT_SCALE: [f32; 3] = [0.8, 1.5, 0.8];
const DOT_OPACITY: [f32; 3] = [0.3, 1.0, 0.3];

pub struct PageNavigator {
    page_count: usize,
    page_width: f32,
    offset: DrivingValue<f32>,
    current_index: usize,
    phase: PagerPhase,
}

impl PageNavigator {
    pub fn new(page_count: usize, page_width: f32) -> Self {
        Self::with_offset(page_count, page_width, driving_value(0.0))
    }

    /// Uses an existing offset cell, e.g. one the scroll container already
    /// writes to.
    pub fn with_offset(page_count: usize, page_width: f32, offset: DrivingValue<f32>) -> Self {
        let mut nav = Self {
            page_count,
            page_width,
            offset,
            current_index: 0,
            phase: PagerPhase::Browsing,
        };
        nav.current_index = nav.index_for(nav.offset.get());
        nav.check_terminal();
        nav
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    /// Handle to the shared scroll offset.
    pub fn offset(&self) -> DrivingValue<f32> {
        self.offset.clone()
    }

    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    pub fn snapshot(&self) -> PageState {
        PageState {
            current_index: self.current_index,
            is_terminal: self.phase == PagerPhase::AtTerminalPage,
        }
    }

    /// Raw scroll sample. Moves the offset only; page state waits for settle.
    pub fn on_scroll(&self, offset: f32) {
        self.offset.set(offset);
    }

    /// Scroll momentum stopped at `offset`.
    pub fn on_settle(&mut self, offset: f32) -> PageState {
        self.offset.set(offset);
        let index = self.index_for(offset);
        if index != self.current_index {
            log::debug!("pager: settled on page {index} of {}", self.page_count);
        }
        self.current_index = index;
        self.check_terminal();
        self.snapshot()
    }

    /// "Next". Scrolls one page past the current offset, or reports
    /// completion once the last page has been reached. Never scrolls past the
    /// last page. Every call while terminal reports completion again.
    pub fn advance(&mut self, host: &mut dyn PagerHost) -> Advance {
        if self.phase == PagerPhase::AtTerminalPage {
            log::debug!("pager: finished on page {}", self.current_index);
            host.on_finished();
            return Advance::Finished;
        }

        let last = self.last_index();
        let next = if self.page_width > 0.0 {
            let from = (self.offset.get() / self.page_width).ceil().max(0.0) as usize;
            (from + 1).min(last)
        } else {
            last
        };
        let offset = next as f32 * self.page_width.max(0.0);
        log::debug!("pager: advancing to page {next} (offset {offset})");
        host.request_scroll_to(offset);
        Advance::ScrollTo {
            index: next,
            offset,
        }
    }

    /// Back to the first page, non-terminal.
    pub fn reset(&mut self) {
        self.offset.set(0.0);
        self.current_index = 0;
        self.phase = PagerPhase::Browsing;
        self.check_terminal();
    }

    /// Scale/opacity for dot `i`, from the live offset: full size on its own
    /// page, fading toward the neighbours.
    pub fn indicator_style(&self, i: usize) -> Result<IndicatorStyle> {
        let w = self.page_width;
        let center = i as f32 * w;
        let bps = [center - w, center, center + w];
        let scale = ControlPoints::new(bps.into_iter().zip(DOT_SCALE)).inspect_err(|e| {
            log::warn!("pager: cannot build indicator curve for page width {w}: {e}");
        })?;
        let opacity = ControlPoints::new(bps.into_iter().zip(DOT_OPACITY))?;

        let x = self.offset.get();
        Ok(IndicatorStyle {
            scale: scale.sample(x, Extrapolate::Clamp),
            opacity: opacity.sample(x, Extrapolate::Clamp),
        })
    }

    pub fn indicator_styles(&self) -> Result<Vec<IndicatorStyle>> {
        (0..self.page_count)
            .map(|i| self.indicator_style(i))
            .collect()
    }

    fn last_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    fn index_for(&self, offset: f32) -> usize {
        if self.page_width <= 0.0 || !offset.is_finite() {
            return 0;
        }
        let raw = (offset / self.page_width).round().max(0.0) as usize;
        raw.min(self.last_index())
    }

    fn check_terminal(&mut self) {
        if self.phase == PagerPhase::Browsing
            && (self.page_count == 0 || self.current_index == self.last_index())
        {
            log::debug!("pager: reached last page");
            self.phase = PagerPhase::AtTerminalPage;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Host {
        scrolls: Vec<f32>,
        finished: usize,
    }

    impl PagerHost for Host {
        fn request_scroll_to(&mut self, offset: f32) {
            self.scrolls.push(offset);
        }
        fn on_finished(&mut self) {
            self.finished += 1;
        }
    }

    #[test]
    fn settle_rounds_to_nearest_page() {
        let mut nav = PageNavigator::new(4, 320.0);
        assert_eq!(nav.on_settle(150.0).current_index, 0);
        assert_eq!(nav.on_settle(170.0).current_index, 1);
        assert_eq!(nav.on_settle(-40.0).current_index, 0);
        assert_eq!(nav.on_settle(5000.0).current_index, 3);
    }

    #[test]
    fn advance_scrolls_one_page_from_offset() {
        let mut nav = PageNavigator::new(4, 320.0);
        let mut host = Host::default();
        assert_eq!(
            nav.advance(&mut host),
            Advance::ScrollTo {
                index: 1,
                offset: 320.0
            }
        );
        nav.on_settle(320.0);
        nav.advance(&mut host);
        // mid-swipe offsets round up before stepping
        nav.on_scroll(700.0);
        nav.advance(&mut host);
        assert_eq!(host.scrolls, vec![320.0, 640.0, 960.0]);
        assert_eq!(host.finished, 0);
    }

    #[test]
    fn terminal_is_sticky_and_keeps_finishing() {
        let mut nav = PageNavigator::new(4, 320.0);
        let mut host = Host::default();
        for i in 0..4 {
            nav.on_settle(i as f32 * 320.0);
        }
        assert_eq!(nav.phase(), PagerPhase::AtTerminalPage);

        for n in 1..=3 {
            assert_eq!(nav.advance(&mut host), Advance::Finished);
            assert_eq!(host.finished, n);
        }
        assert!(host.scrolls.is_empty());
        assert_eq!(nav.snapshot().current_index, 3);

        nav.on_settle(0.0);
        assert_eq!(
            nav.snapshot(),
            PageState {
                current_index: 0,
                is_terminal: true
            }
        );

        nav.reset();
        assert_eq!(nav.phase(), PagerPhase::Browsing);
    }

    #[test]
    fn empty_and_single_page_carousels_start_terminal() {
        let mut host = Host::default();
        let mut empty = PageNavigator::new(0, 320.0);
        assert!(empty.snapshot().is_terminal);
        assert_eq!(empty.advance(&mut host), Advance::Finished);

        let single = PageNavigator::new(1, 320.0);
        assert!(single.snapshot().is_terminal);
        assert!(host.scrolls.is_empty());
    }

    #[test]
    fn indicators_follow_offset() {
        let nav = PageNavigator::new(3, 100.0);
        nav.on_scroll(100.0);
        let dots = nav.indicator_styles().unwrap();
        assert_eq!(dots[1], IndicatorStyle { scale: 1.5, opacity: 1.0 });
        assert_eq!(dots[0], IndicatorStyle { scale: 0.8, opacity: 0.3 });
        assert_eq!(dots[2], IndicatorStyle { scale: 0.8, opacity: 0.3 });

        nav.on_scroll(50.0);
        let half = nav.indicator_style(0).unwrap();
        assert!((half.scale - 1.15).abs() < 1e-4);
        assert!((half.opacity - 0.65).abs() < 1e-4);
    }

    #[test]
    fn zero_width_pages_reject_indicator_curves() {
        let nav = PageNavigator::new(3, 0.0);
        assert!(nav.indicator_style(1).is_err());
    }
}
