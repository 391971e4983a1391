use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;
use std::sync::Arc;

use glide_core::{
    AnimatedValue, AnimationSpec, Clock, ControlPoints, Duration, DrivingValue, Easing,
    Extrapolate, FrameScheduler, Result, driving_value,
};

use crate::counter::{FrameCounter, drive_counter};

pub const DEFAULT_DURATION_MS: u64 = 1000;

/// Ring geometry, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub size: f32,
    pub stroke_width: f32,
}

impl RingGeometry {
    pub fn new(size: f32, stroke_width: f32) -> Self {
        Self { size, stroke_width }
    }
    pub fn center(&self) -> f32 {
        self.size / 2.0
    }
    pub fn radius(&self) -> f32 {
        ((self.size - self.stroke_width) / 2.0).max(0.0)
    }
    pub fn circumference(&self) -> f32 {
        2.0 * PI * self.radius()
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// Circular progress ring with a percentage counter in the middle.
///
/// The arc eases out toward the target percentage; the label counts toward
/// it linearly with a [`FrameCounter`] over the same duration.
pub struct CircularProgress {
    geometry: RingGeometry,
    clock: Arc<dyn Clock>,
    duration: Duration,
    percent: DrivingValue<f32>,
    arc: AnimatedValue<f32>,
    dash_curve: ControlPoints<f32>,
    counter: Rc<RefCell<FrameCounter>>,
    show_percentage: bool,
}

impl CircularProgress {
    pub fn new(clock: Arc<dyn Clock>, geometry: RingGeometry, duration_ms: u64) -> Result<Self> {
        let duration = Duration::from_millis(duration_ms);
        let dash_curve = ControlPoints::linear(0.0, geometry.circumference(), 100.0, 0.0)?;
        Ok(Self {
            geometry,
            counter: Rc::new(RefCell::new(FrameCounter::new(clock.clone(), 0))),
            clock,
            duration,
            percent: driving_value(0.0),
            arc: AnimatedValue::new(0.0, AnimationSpec::tween(duration, Easing::EaseOut)),
            dash_curve,
            show_percentage: true,
        })
    }

    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    /// Target percentage, after clamping.
    pub fn percent(&self) -> DrivingValue<f32> {
        self.percent.clone()
    }

    pub fn counter(&self) -> Rc<RefCell<FrameCounter>> {
        self.counter.clone()
    }

    /// Sets the target and restarts both the arc and the counter from where
    /// they are. Out-of-range input is clamped to `[0, 100]`; NaN reads as 0.
    pub fn set_progress(&mut self, percent: f32) -> f32 {
        let clamped = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        self.percent.set(clamped);

        let now = self.clock.now();
        self.arc.update(now);
        self.arc.set_target(clamped, now);
        self.counter
            .borrow_mut()
            .set_target(clamped.round() as i64, self.duration.as_millis() as i64);
        clamped
    }

    /// `set_progress` plus starting the counter's frame loop.
    pub fn set_progress_driven<S>(&mut self, percent: f32, scheduler: &Rc<S>) -> f32
    where
        S: FrameScheduler + 'static,
    {
        let clamped = self.set_progress(percent);
        drive_counter(&self.counter, scheduler);
        clamped
    }

    /// Samples the arc and ticks the counter at the clock's current time.
    /// Returns true while either is still moving. Hosts that don't run
    /// [`drive_counter`] rely on this to move the label.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now();
        let arc_running = self.arc.update(now);
        let counter_running = self.counter.borrow_mut().tick_at(now);
        arc_running || counter_running
    }

    /// Animated percentage the arc currently shows.
    pub fn arc_percent(&self) -> f32 {
        *self.arc.get()
    }

    /// Stroke dash offset for the progress arc: the full circumference at 0%,
    /// nothing left at 100%.
    pub fn stroke_dash_offset(&self) -> f32 {
        self.dash_curve.sample(*self.arc.get(), Extrapolate::Clamp)
    }

    pub fn label(&self) -> String {
        let n = self.counter.borrow().display_value();
        if self.show_percentage {
            format!("{n}%")
        } else {
            n.to_string()
        }
    }
}
