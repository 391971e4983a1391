#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::animation::*;
    use crate::clock::*;
    use crate::interpolate::*;
    use crate::value::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use web_time::{Duration, Instant};

    #[test]
    fn test_driving_value_basic() {
        let v = driving_value(42);
        assert_eq!(v.get(), 42);

        v.set(100);
        assert_eq!(v.get(), 100);

        v.update(|x| *x += 1);
        assert_eq!(v.get(), 101);
    }

    #[test]
    fn test_driving_value_subscription() {
        let v = driving_value(0u32);
        let last = Arc::new(AtomicU32::new(0));

        let last_clone = last.clone();
        v.subscribe(move |x| {
            last_clone.store(*x, Ordering::SeqCst);
        });

        v.set(42);
        assert_eq!(last.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_subscriber_can_read_back() {
        let v = driving_value(1.0f32);
        let seen = Arc::new(AtomicU32::new(0));
        {
            let reader = v.clone();
            let seen = seen.clone();
            v.subscribe(move |_| seen.store(reader.get() as u32, Ordering::SeqCst));
        }
        v.set(7.0);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = ManualClock::new(Instant::now());
        let t0 = clock.now();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, clock.now());

        clock.advance(Duration::from_millis(250));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.set(t0 + Duration::from_millis(1000));
        let cont = a.update(clock.now());
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_animated_color() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            Color::BLACK,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(Color::WHITE, t0);
        a.update(t0 + Duration::from_millis(50));
        assert_eq!(*a.get(), Color(128, 128, 128, 255));
    }

    #[test]
    fn test_indicator_curve() {
        // Pager dots: full size on their own page, shrinking toward neighbors.
        let w = 320.0f32;
        let i = 2.0f32;
        let scale =
            ControlPoints::new([((i - 1.0) * w, 0.8f32), (i * w, 1.5), ((i + 1.0) * w, 0.8)])
                .unwrap();
        assert_eq!(scale.sample(i * w, Extrapolate::Clamp), 1.5);
        assert_eq!(scale.sample(0.0, Extrapolate::Clamp), 0.8);
        assert!((scale.sample(i * w - w / 2.0, Extrapolate::Clamp) - 1.15).abs() < 1e-4);
    }
}
