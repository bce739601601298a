//! Owned, cancellable timers driven by the frame clock.
//!
//! Nothing here spawns threads or registers callbacks.  The owner polls
//! each handle with the current clock reading in milliseconds and acts on
//! what it reports, so dropping or cancelling a handle is enough to make
//! sure it never fires again.

/// The per-frame activity.  Frames are delivered by the main loop; this
/// handle only records whether its owner still wants them.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn started() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    pub fn restart(&mut self) {
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Claim the next frame.  Returns `false` once cancelled.
    pub fn begin_frame(&mut self) -> bool {
        if self.running {
            self.frames += 1;
        }
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Fixed-period repeating timer.
#[derive(Clone, Debug)]
pub struct Interval {
    period_ms: u64,
    next_due_ms: u64,
    active: bool,
}

impl Interval {
    /// Start a timer whose first firing is one period after `now_ms`.
    pub fn start(now_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: now_ms + period_ms,
            active: true,
        }
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.next_due_ms = now_ms + self.period_ms;
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Fire at most once.  Callers that can fall behind call this in a loop
    /// so they can stop as soon as the timer is cancelled mid-catch-up.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.active || now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms += self.period_ms;
        true
    }
}

/// One-shot delayed timer.
#[derive(Clone, Debug, Default)]
pub struct Timeout {
    due_ms: u64,
    armed: bool,
}

impl Timeout {
    pub fn arm(now_ms: u64, delay_ms: u64) -> Self {
        Self {
            due_ms: now_ms + delay_ms,
            armed: true,
        }
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns `true` exactly once, on the first poll at or after the due time.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.armed && now_ms >= self.due_ms {
            self.armed = false;
            return true;
        }
        false
    }
}
