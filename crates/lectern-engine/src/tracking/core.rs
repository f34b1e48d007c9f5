use std::time::{Duration, Instant};

use crate::anchor::AnchorId;

use super::{
    active::ActiveAnchor,
    debounce::Debounce,
    frame::FrameGate,
    geometry::{DEFAULT_THRESHOLD_PX, ScrollState, resolve_active},
};

/// Timing and geometry parameters of a tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerTiming {
    /// Distance from the container top, in the host's units, below which a
    /// heading counts as scrolled past.
    pub threshold: f64,
    pub debounce: Duration,
    pub initial_delay: Duration,
    pub frame: Duration,
}

impl Default for TrackerTiming {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_PX,
            debounce: Duration::from_millis(30),
            initial_delay: Duration::from_millis(100),
            frame: FrameGate::DEFAULT_FRAME,
        }
    }
}

/// Clock-driven active-heading tracker without any I/O.
///
/// The host feeds scroll notifications and the current time, sleeps until
/// [`TrackerCore::next_deadline`], and when [`TrackerCore::poll`] says so,
/// measures the layout and hands it to [`TrackerCore::complete`].
#[derive(Debug)]
pub struct TrackerCore {
    timing: TrackerTiming,
    anchors: Vec<AnchorId>,
    initial: Option<Instant>,
    debounce: Debounce,
    gate: FrameGate,
    active: ActiveAnchor,
    computations: usize,
    torn_down: bool,
}

impl TrackerCore {
    pub fn new(anchors: Vec<AnchorId>, timing: TrackerTiming, now: Instant) -> Self {
        Self {
            timing,
            anchors,
            initial: Some(now + timing.initial_delay),
            debounce: Debounce::new(timing.debounce),
            gate: FrameGate::new(timing.frame),
            active: ActiveAnchor::default(),
            computations: 0,
            torn_down: false,
        }
    }

    pub fn anchors(&self) -> &[AnchorId] {
        &self.anchors
    }

    pub fn active(&self) -> Option<AnchorId> {
        self.active.get()
    }

    pub fn timing(&self) -> &TrackerTiming {
        &self.timing
    }

    /// Number of computations that measured a layout.
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn scroll(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.debounce.trigger(now);
    }

    /// Earliest instant at which [`TrackerCore::poll`] has work to do.
    ///
    /// `None` while a computation is running; timers that expire meanwhile
    /// are picked up once it completes.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.gate.is_running() {
            return None;
        }
        [self.initial, self.debounce.deadline(), self.gate.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Advances timers; returns `true` when the host should measure now.
    pub fn poll(&mut self, now: Instant) -> bool {
        // a settled scroll must not be consumed by a busy gate
        if self.torn_down || self.gate.is_running() {
            return false;
        }

        if self.initial.is_some_and(|at| now >= at) {
            self.initial = None;
            self.gate.request(now);
        }
        if self.debounce.fire(now) {
            self.gate.request(now);
        }
        self.gate.enter(now)
    }

    /// Finishes a computation. `None` means the layout could not be read.
    ///
    /// Returns the anchor to publish when the active heading changed.
    pub fn complete(&mut self, state: Option<&ScrollState>) -> Option<AnchorId> {
        self.gate.complete();
        if self.torn_down {
            return None;
        }
        let state = state?;
        self.computations += 1;

        let candidate = resolve_active(state, self.timing.threshold)?;
        if self.active.publish(candidate) {
            log::debug!("active heading is now {candidate}");
            Some(candidate)
        } else {
            None
        }
    }

    /// Cancels every pending timer and frame. Nothing fires afterwards.
    pub fn teardown(&mut self) {
        self.initial = None;
        self.debounce.cancel();
        self.gate.cancel();
        self.active.reset();
        self.torn_down = true;
    }
}
