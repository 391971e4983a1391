//! # Frame-synchronized counter
//!
//! Shows an integer that counts from its current value to a target over a
//! fixed duration, one rounded step per frame. It runs beside (not through)
//! eased animations because it has to produce whole numbers that move
//! linearly with wall-clock time.
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc, sync::Arc};
//! use glide_core::{Duration, ManualClock, ManualFrameScheduler, Clock};
//! use glide_ui::counter::{FrameCounter, drive_counter};
//!
//! let clock = ManualClock::default();
//! let sched = Rc::new(ManualFrameScheduler::new());
//! let counter = Rc::new(RefCell::new(FrameCounter::new(Arc::new(clock.clone()), 0)));
//!
//! counter.borrow_mut().set_target(100, 1000);
//! drive_counter(&counter, &sched);
//!
//! clock.advance(Duration::from_millis(500));
//! sched.run_frame(clock.now());
//! assert_eq!(counter.borrow().display_value(), 50);
//! ```
//!
//! Retargeting abandons the current trajectory: the new run starts from
//! whatever is on screen at that moment, and can jump if targets change
//! faster than the duration. Debounce upstream if that matters.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use glide_core::{Clock, Duration, FrameScheduler, Instant};

/// The in-flight run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterState {
    pub display_value: i64,
    pub start_value: i64,
    pub target_value: i64,
    pub start_time: Instant,
    pub duration: Duration,
}

pub struct FrameCounter {
    clock: Arc<dyn Clock>,
    display: i64,
    run: Option<CounterState>,
    generation: u64,
}

impl FrameCounter {
    pub fn new(clock: Arc<dyn Clock>, initial: i64) -> Self {
        Self {
            clock,
            display: initial,
            run: None,
            generation: 0,
        }
    }

    /// Starts counting from the displayed value toward `target`. Negative
    /// durations count as zero, which snaps immediately.
    pub fn set_target(&mut self, target: i64, duration_ms: i64) {
        self.generation = self.generation.wrapping_add(1);
        let duration = Duration::from_millis(duration_ms.max(0) as u64);

        if duration.is_zero() {
            self.display = target;
            self.run = None;
            log::debug!("counter: snapped to {target}");
            return;
        }

        if let Some(prev) = self.run {
            log::debug!(
                "counter: retarget from {} to {target}, abandoning run toward {}",
                self.display,
                prev.target_value
            );
        }
        self.run = Some(CounterState {
            display_value: self.display,
            start_value: self.display,
            target_value: target,
            start_time: self.clock.now(),
            duration,
        });
    }

    /// Advances to `now`. Returns true while the run is still going; once it
    /// returns false the counter does nothing until the next `set_target`.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let elapsed = now.saturating_duration_since(run.start_time);

        if elapsed >= run.duration {
            self.display = run.target_value;
            self.run = None;
            log::trace!("counter: reached {}", self.display);
            return false;
        }

        let t = elapsed.as_secs_f64() / run.duration.as_secs_f64();
        let span = run.target_value as f64 - run.start_value as f64;
        self.display = (run.start_value as f64 + span * t).round() as i64;
        run.display_value = self.display;
        true
    }

    /// Advances to the counter's own clock.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.tick_at(now)
    }

    pub fn display_value(&self) -> i64 {
        self.display
    }

    pub fn state(&self) -> Option<CounterState> {
        self.run
    }

    pub fn is_complete(&self) -> bool {
        self.run.is_none()
    }

    /// Changes on every `set_target`; tick loops compare it to notice they
    /// have been superseded.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Runs `counter` one tick per frame until it completes. Call again after
/// each `set_target`; the loop started for an earlier target stops at its
/// next frame instead of ticking alongside the new one. The loop holds only a
/// weak reference, so dropping the counter ends it too.
pub fn drive_counter<S>(counter: &Rc<RefCell<FrameCounter>>, scheduler: &Rc<S>)
where
    S: FrameScheduler + 'static,
{
    let generation = counter.borrow().generation();
    schedule(Rc::downgrade(counter), scheduler.clone(), generation);
}

fn schedule<S>(counter: Weak<RefCell<FrameCounter>>, scheduler: Rc<S>, generation: u64)
where
    S: FrameScheduler + 'static,
{
    let next = scheduler.clone();
    scheduler.request_tick(Box::new(move |now| {
        let Some(strong) = counter.upgrade() else {
            return;
        };
        let running = {
            let mut c = strong.borrow_mut();
            if c.generation() != generation {
                return;
            }
            c.tick_at(now)
        };
        if running {
            schedule(counter, next, generation);
        }
    }));
}
