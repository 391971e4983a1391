use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());

                if zeta < 1.0 {
                    // Underdamped
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    // Overdamped or critically damped: fall back to ease out
                    t * (2.0 - t)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }
    pub fn spring() -> Self {
        Self {
            duration: Duration::from_millis(500),
            easing: Easing::Spring {
                damping: 0.8,
                stiffness: 200.0,
            },
            delay: Duration::ZERO,
        }
    }
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Values that can be blended between two endpoints.
///
/// `t` is not restricted to `[0, 1]`: the interpolation engine passes values
/// outside that range when extrapolating.
pub trait Lerp: Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for crate::Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        // Float-to-int `as` casts saturate, so extrapolated channels pin at 0/255.
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        crate::Color(
            ch(self.0, other.0),
            ch(self.1, other.1),
            ch(self.2, other.2),
            ch(self.3, other.3),
        )
    }
}

/// Value that transitions smoothly toward its target over an [`AnimationSpec`].
///
/// Time is always passed in, so the same value can be driven by a real frame
/// clock or by a test.
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Lerp> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Lerp> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Starts a transition from the current value. An in-flight transition is
    /// abandoned from wherever it was last sampled.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Samples the transition at `now`. Returns true while still animating.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);

        if elapsed < self.spec.delay {
            return true;
        }

        let animation_time = elapsed - self.spec.delay;

        if animation_time >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.apply(t);
        self.current = self.start.lerp(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
        }
    }

    #[test]
    fn retarget_starts_from_last_sample() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(100.0, t0);
        a.update(t0 + Duration::from_millis(50));
        assert!((*a.get() - 50.0).abs() < 0.01);

        a.set_target(0.0, t0 + Duration::from_millis(50));
        a.update(t0 + Duration::from_millis(100));
        assert!((*a.get() - 25.0).abs() < 0.01);
    }

    #[test]
    fn delay_holds_start_value() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            1.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear)
                .with_delay(Duration::from_millis(50)),
        );
        a.set_target(0.0, t0);
        assert!(a.update(t0 + Duration::from_millis(40)));
        assert_eq!(*a.get(), 1.0);
        assert!(!a.update(t0 + Duration::from_millis(150)));
        assert_eq!(*a.get(), 0.0);
    }

    #[test]
    fn zero_duration_snaps_on_first_update() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::tween(Duration::ZERO, Easing::Linear));
        a.set_target(7.0, t0);
        assert!(!a.update(t0));
        assert_eq!(*a.get(), 7.0);
    }
}
