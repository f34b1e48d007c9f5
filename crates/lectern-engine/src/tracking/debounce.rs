use std::time::{Duration, Instant};

/// Trailing-edge debounce: fires once `quiet` has elapsed since the last
/// trigger. Every trigger cancels the pending deadline and starts over.
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per settled burst of triggers.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(30);

    #[test]
    fn fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debounce::new(QUIET);
        d.trigger(t0);
        assert!(!d.fire(t0 + Duration::from_millis(29)));
        assert!(d.fire(t0 + QUIET));
        assert!(!d.fire(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn retrigger_pushes_deadline_back() {
        let t0 = Instant::now();
        let mut d = Debounce::new(QUIET);
        for ms in [0, 10, 20, 25] {
            d.trigger(t0 + Duration::from_millis(ms));
        }
        assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(55)));
        assert!(!d.fire(t0 + Duration::from_millis(40)));
        assert!(d.fire(t0 + Duration::from_millis(55)));
    }

    #[test]
    fn cancel_drops_pending_fire() {
        let t0 = Instant::now();
        let mut d = Debounce::new(QUIET);
        d.trigger(t0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(t0 + Duration::from_secs(1)));
    }
}
