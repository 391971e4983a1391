//! Frame callbacks.
//!
//! Hosts implement [`FrameScheduler`] on top of their own vsync/frame
//! callback. Anything that animates in discrete per-frame steps asks for the
//! next frame through it instead of looping on its own, so tests can swap in
//! [`ManualFrameScheduler`] and step frames with synthetic timestamps.

use std::cell::RefCell;

use web_time::Instant;

pub type TickCallback = Box<dyn FnOnce(Instant)>;

pub trait FrameScheduler {
    /// Runs `callback` once on the next frame with that frame's timestamp.
    fn request_tick(&self, callback: TickCallback);
}

/// Scheduler that only runs frames when told to.
#[derive(Default)]
pub struct ManualFrameScheduler {
    pending: RefCell<Vec<TickCallback>>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every callback queued before this call. Callbacks requested while
    /// the frame runs wait for the next frame. Returns how many ran.
    pub fn run_frame(&self, now: Instant) -> usize {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        let n = due.len();
        log::trace!("frame: running {n} tick callbacks");
        for cb in due {
            cb(now);
        }
        n
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_tick(&self, callback: TickCallback) {
        self.pending.borrow_mut().push(callback);
    }
}
