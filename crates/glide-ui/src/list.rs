//! # Animated list
//!
//! Items animate in as the host reports them visible and back out when they
//! leave the viewport. The list keeps a [`ViewabilityTracker`] fed by the
//! host's viewability callback and maps each item's visibility to a transform
//! through the configured [`AnimationMode`]:
//!
//! | mode                 | visible          | hidden                   |
//! |----------------------|------------------|--------------------------|
//! | `slide-left`         | `TranslateX(0)`  | `TranslateX(width)`      |
//! | `slide-right`        | `TranslateX(0)`  | `TranslateX(-width)`     |
//! | `bottom-up`          | `TranslateY(0)`  | `TranslateY(100)`        |
//! | `bottom-up-spring`   | `TranslateY(0)`  | `TranslateY(height)`     |
//! | `scale` (default)    | `Scale(1)`       | `Scale(0)`               |
//!
//! The `-spring` variants share their timing sibling's targets and only swap
//! the easing.
//!
//! ```rust
//! use glide_core::config::{AnimationMode, MotionConfig};
//! use glide_ui::list::{AnimatedList, DeviceSize, ItemTransform};
//! use glide_ui::viewability::VisibilityReport;
//!
//! let mut list = AnimatedList::new(
//!     MotionConfig::with_mode(AnimationMode::SlideLeft),
//!     DeviceSize::new(320.0, 640.0),
//! );
//! list.apply_reports([VisibilityReport::visible(0u32), VisibilityReport::hidden(1)]);
//! assert_eq!(list.target_transform(&0), ItemTransform::TranslateX(0.0));
//! assert_eq!(list.target_transform(&1), ItemTransform::TranslateX(320.0));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use glide_core::config::{AnimationMode, MotionConfig};
use glide_core::{AnimatedValue, Instant};

use crate::viewability::{ViewabilityTracker, VisibilityReport};

/// Vertical offset hidden `bottom-up` items sit at. Unlike the spring
/// variant this is a fixed nudge, not a full screen.
pub const BOTTOM_UP_OFFSET: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceSize {
    pub width: f32,
    pub height: f32,
}

impl DeviceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The single transform an item animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemTransform {
    TranslateX(f32),
    TranslateY(f32),
    Scale(f32),
}

impl ItemTransform {
    pub fn value(self) -> f32 {
        match self {
            ItemTransform::TranslateX(v) | ItemTransform::TranslateY(v) | ItemTransform::Scale(v) => v,
        }
    }

    /// Same transform kind carrying `v`.
    pub fn with_value(self, v: f32) -> Self {
        match self {
            ItemTransform::TranslateX(_) => ItemTransform::TranslateX(v),
            ItemTransform::TranslateY(_) => ItemTransform::TranslateY(v),
            ItemTransform::Scale(_) => ItemTransform::Scale(v),
        }
    }
}

/// Target transform for an item in `mode`, given whether it is visible.
pub fn select_transform(mode: AnimationMode, visible: bool, device: DeviceSize) -> ItemTransform {
    let pick = |shown: f32, hidden: f32| if visible { shown } else { hidden };
    match mode {
        AnimationMode::SlideLeft | AnimationMode::SlideLeftSpring => {
            ItemTransform::TranslateX(pick(0.0, device.width))
        }
        AnimationMode::SlideRight | AnimationMode::SlideRightSpring => {
            ItemTransform::TranslateX(pick(0.0, -device.width))
        }
        AnimationMode::BottomUp => ItemTransform::TranslateY(pick(0.0, BOTTOM_UP_OFFSET)),
        AnimationMode::BottomUpSpring => ItemTransform::TranslateY(pick(0.0, device.height)),
        AnimationMode::Scale => ItemTransform::Scale(pick(1.0, 0.0)),
    }
}

pub struct AnimatedList<K> {
    config: MotionConfig,
    device: DeviceSize,
    tracker: ViewabilityTracker<K>,
    animators: HashMap<K, AnimatedValue<f32>>,
}

impl<K: Eq + Hash + Clone> AnimatedList<K> {
    pub fn new(config: MotionConfig, device: DeviceSize) -> Self {
        Self {
            config,
            device,
            tracker: ViewabilityTracker::new(),
            animators: HashMap::new(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn tracker(&self) -> &ViewabilityTracker<K> {
        &self.tracker
    }

    /// Viewability callback entry point.
    pub fn apply_reports<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = VisibilityReport<K>>,
    {
        self.tracker.apply(batch)
    }

    pub fn is_visible(&self, key: &K) -> bool {
        self.tracker.is_visible(key)
    }

    /// Where `key` is headed right now. Pure in the tracker state.
    pub fn target_transform(&self, key: &K) -> ItemTransform {
        select_transform(self.config.mode, self.tracker.is_visible(key), self.device)
    }

    /// The transform to paint this frame. Each item first appears at its
    /// hidden position and animates toward its target; a visibility flip
    /// mid-animation restarts from the current sample.
    pub fn animated_transform(&mut self, key: &K, now: Instant) -> ItemTransform {
        let target = self.target_transform(key);
        let spec = self.config.timing_spec();
        let hidden = select_transform(self.config.mode, false, self.device).value();

        let anim = self
            .animators
            .entry(key.clone())
            .or_insert_with(|| AnimatedValue::new(hidden, spec));
        if *anim.target() != target.value() {
            anim.set_target(target.value(), now);
        }
        anim.update(now);
        target.with_value(*anim.get())
    }

    pub fn is_animating(&self) -> bool {
        self.animators.values().any(|a| a.is_animating())
    }

    /// Drops per-item animation state for keys the host no longer renders.
    pub fn retain_items(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.animators.retain(|k, _| keep(k));
    }
}
