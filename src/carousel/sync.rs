//! Per-frame recentering while the sidebar animates
//!
//! The sidebar width change is a CSS transition, so the stage resizes over
//! several frames. `RecenterLoop` re-runs an instant recenter on every
//! animation frame for the length of that transition, then once more after
//! it has finished. Only one loop runs at a time.

use std::cell::Cell;
use std::rc::Rc;

/// Opaque id returned by the frame scheduler
pub type FrameHandle = i32;

/// Source of animation-frame callbacks (`requestAnimationFrame` in the browser)
pub trait FrameScheduler {
    /// Run `callback` with the frame timestamp in ms on the next frame.
    /// `None` if the frame could not be requested.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameHandle>;

    fn cancel_frame(&self, handle: FrameHandle);
}

/// Whether the loop wants another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    Continue,
    Finished,
}

/// Tracks elapsed time from the first frame a loop sees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncClock {
    duration_ms: f64,
    started_at: Option<f64>,
}

impl SyncClock {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: f64::from(duration_ms),
            started_at: None,
        }
    }

    pub fn tick(&mut self, now: f64) -> LoopStep {
        let start = *self.started_at.get_or_insert(now);
        if now - start < self.duration_ms {
            LoopStep::Continue
        } else {
            LoopStep::Finished
        }
    }
}

/// Cancelable handle for the recenter loop
pub struct RecenterLoop<S: FrameScheduler + 'static> {
    scheduler: Rc<S>,
    pending: Rc<Cell<Option<FrameHandle>>>,
    duration_ms: u32,
}

impl<S: FrameScheduler + 'static> RecenterLoop<S> {
    pub fn new(scheduler: Rc<S>, duration_ms: u32) -> Self {
        Self {
            scheduler,
            pending: Rc::new(Cell::new(None)),
            duration_ms,
        }
    }

    /// Start a loop calling `recenter` every frame, replacing any loop in flight
    pub fn start(&self, recenter: Rc<dyn Fn()>) {
        self.cancel();
        schedule(
            self.scheduler.clone(),
            self.pending.clone(),
            SyncClock::new(self.duration_ms),
            recenter,
        );
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }
}

fn schedule<S: FrameScheduler + 'static>(
    scheduler: Rc<S>,
    pending: Rc<Cell<Option<FrameHandle>>>,
    clock: SyncClock,
    recenter: Rc<dyn Fn()>,
) {
    let next_scheduler = scheduler.clone();
    let next_pending = pending.clone();
    let handle = scheduler.request_frame(Box::new(move |now| {
        next_pending.set(None);
        let mut clock = clock;
        recenter();
        match clock.tick(now) {
            LoopStep::Continue => schedule(next_scheduler, next_pending, clock, recenter),
            // Final correction once the sidebar has settled
            LoopStep::Finished => recenter(),
        }
    }));
    pending.set(handle);
}
