//! Multi-step loader: a vertical list of steps that scrolls up one row every
//! `step_duration` while loading, with rows fading by distance from the
//! current one.

use glide_core::config::StepPolicy;
use glide_core::{
    AnimationSpec, Color, ControlPoints, Duration, DrivingValue, Easing, Extrapolate, Instant,
    Result, driving_value,
};

pub const DEFAULT_STEP_MS: u64 = 2000;
/// Row pitch the list shifts by per step.
pub const STEP_SPACING: f32 = 40.0;
/// Opacity lost per row of distance from the current step.
pub const OPACITY_FALLOFF: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Current,
    Done,
}

/// Targets for one row; the host eases to them with [`MultiStepLoader::transition_spec`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepStyle {
    pub opacity: f32,
    pub translate_y: f32,
    pub status: StepStatus,
    pub tint: Color,
}

pub struct MultiStepLoader {
    step_count: usize,
    step_duration: Duration,
    policy: StepPolicy,
    step: DrivingValue<usize>,
    loading: bool,
    last_step_at: Option<Instant>,
}

impl MultiStepLoader {
    pub fn new(step_count: usize, step_duration_ms: u64, policy: StepPolicy) -> Self {
        Self {
            step_count,
            step_duration: Duration::from_millis(step_duration_ms),
            policy,
            step: driving_value(0),
            loading: false,
            last_step_at: None,
        }
    }

    pub fn step(&self) -> DrivingValue<usize> {
        self.step.clone()
    }

    pub fn current_step(&self) -> usize {
        self.step.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starting restarts the step timer; stopping snaps back to step 0.
    pub fn set_loading(&mut self, loading: bool, now: Instant) {
        if loading == self.loading {
            return;
        }
        self.loading = loading;
        if loading {
            self.last_step_at = Some(now);
        } else {
            self.last_step_at = None;
            self.step.set(0);
        }
        log::debug!("loader: loading={loading}");
    }

    /// Advances one step per full `step_duration` elapsed since the last
    /// step. Returns the current step.
    pub fn tick(&mut self, now: Instant) -> usize {
        let (true, Some(last)) = (self.loading, self.last_step_at) else {
            return self.step.get();
        };
        if self.step_count == 0 {
            return 0;
        }

        let elapsed = now.saturating_duration_since(last);
        let due = if self.step_duration.is_zero() {
            1
        } else {
            (elapsed.as_nanos() / self.step_duration.as_nanos()) as u64
        };
        if due == 0 {
            return self.step.get();
        }

        // Keep the remainder so late ticks don't drift the cadence.
        let consumed = u32::try_from(due)
            .ok()
            .and_then(|n| self.step_duration.checked_mul(n))
            .and_then(|d| last.checked_add(d))
            .unwrap_or(now);
        self.last_step_at = Some(consumed);

        let before = self.step.get();
        let after = self.advance_by(before, due);
        if after != before {
            log::debug!("loader: step {before} -> {after}");
            self.step.set(after);
        }
        after
    }

    fn advance_by(&self, from: usize, n: u64) -> usize {
        let last = self.step_count - 1;
        match self.policy {
            // Wrapping snaps straight back to 0; nothing animates backwards.
            StepPolicy::Loop => ((from as u64 + n) % self.step_count as u64) as usize,
            StepPolicy::Clamp => (from as u64 + n).min(last as u64) as usize,
        }
    }

    pub fn step_style(&self, index: usize) -> Result<StepStyle> {
        let v = self.step.get();
        let vf = v as f32;
        let reach = 1.0 / OPACITY_FALLOFF;
        let fade = ControlPoints::new([(vf - reach, 0.0f32), (vf, 1.0), (vf + reach, 0.0)])?;

        let status = match index.cmp(&v) {
            std::cmp::Ordering::Greater => StepStatus::Pending,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Less => StepStatus::Done,
        };
        Ok(StepStyle {
            opacity: fade.sample(index as f32, Extrapolate::Clamp),
            translate_y: -vf * STEP_SPACING,
            status,
            tint: if status == StepStatus::Current {
                Color::LIME_GREEN
            } else {
                Color::BLACK
            },
        })
    }

    pub fn step_styles(&self) -> Result<Vec<StepStyle>> {
        (0..self.step_count).map(|i| self.step_style(i)).collect()
    }

    pub fn transition_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(Duration::from_millis(500), Easing::EaseInOut)
    }
}
