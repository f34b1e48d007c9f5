use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Idle,
    Scheduled(Instant),
    Running,
}

/// Lets at most one computation through per rendering frame.
///
/// A request schedules work for the next frame boundary; further requests
/// are dropped until that work has been entered and completed.
#[derive(Debug, Clone)]
pub struct FrameGate {
    frame: Duration,
    state: GateState,
}

impl FrameGate {
    /// 60 Hz.
    pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            state: GateState::Idle,
        }
    }

    /// Returns `true` when this request scheduled a new frame.
    pub fn request(&mut self, now: Instant) -> bool {
        if self.state != GateState::Idle {
            return false;
        }
        self.state = GateState::Scheduled(now + self.frame);
        true
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            GateState::Scheduled(at) => Some(at),
            _ => None,
        }
    }

    /// Returns `true` when the scheduled frame has arrived; the caller must
    /// run its computation and then call [`FrameGate::complete`].
    pub fn enter(&mut self, now: Instant) -> bool {
        match self.state {
            GateState::Scheduled(at) if now >= at => {
                self.state = GateState::Running;
                true
            }
            _ => false,
        }
    }

    pub fn complete(&mut self) {
        if self.state == GateState::Running {
            self.state = GateState::Idle;
        }
    }

    /// Entered but not yet completed.
    pub fn is_running(&self) -> bool {
        self.state == GateState::Running
    }

    pub fn is_busy(&self) -> bool {
        self.state != GateState::Idle
    }

    pub fn cancel(&mut self) {
        self.state = GateState::Idle;
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRAME)
    }
}
