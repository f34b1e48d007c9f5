use std::future::Future;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::anchor::AnchorId;

use super::{
    core::{TrackerCore, TrackerTiming},
    probe::{LayoutProbe, measure},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    Scroll,
}

/// The host's side of a running tracker: forwards scroll events.
///
/// Dropping the last handle stops the tracker and cancels its timers.
#[derive(Debug, Clone)]
pub struct TrackerHandle {
    events: mpsc::UnboundedSender<TrackerEvent>,
}

impl TrackerHandle {
    pub fn notify_scroll(&self) {
        // a closed channel means the tracker is already gone
        let _ = self.events.send(TrackerEvent::Scroll);
    }

    pub fn is_attached(&self) -> bool {
        !self.events.is_closed()
    }
}

/// Async driver around [`TrackerCore`] for hosts with an event loop.
pub struct ScrollTracker {
    anchors: Vec<AnchorId>,
    timing: TrackerTiming,
    events: mpsc::UnboundedReceiver<TrackerEvent>,
}

/// Creates a tracker for one open document.
///
/// The returned future must be spawned on the host's executor; it ends once
/// every [`TrackerHandle`] is dropped.
pub fn scroll_tracker(anchors: Vec<AnchorId>, timing: TrackerTiming) -> (TrackerHandle, ScrollTracker) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        TrackerHandle { events: tx },
        ScrollTracker {
            anchors,
            timing,
            events: rx,
        },
    )
}

impl ScrollTracker {
    pub async fn run<P, F>(self, probe: P, mut on_change: F)
    where
        P: LayoutProbe,
        F: FnMut(AnchorId),
    {
        let ScrollTracker {
            anchors,
            timing,
            mut events,
        } = self;
        let mut core = TrackerCore::new(anchors, timing, now());
        log::debug!("scroll tracker started for {} anchors", core.anchors().len());

        loop {
            let wake = core.next_deadline();
            tokio::select! {
                event = events.recv() => match event {
                    Some(TrackerEvent::Scroll) => core.scroll(now()),
                    None => break,
                },
                () = wait_until(wake) => {
                    if core.poll(now()) {
                        let state = measure(&probe, core.anchors()).await;
                        if let Some(anchor) = core.complete(state.as_ref()) {
                            on_change(anchor);
                        }
                    }
                }
            }
        }

        core.teardown();
        log::debug!(
            "scroll tracker stopped after {} computations",
            core.computations()
        );
    }
}

fn now() -> std::time::Instant {
    Instant::now().into_std()
}

fn wait_until(deadline: Option<std::time::Instant>) -> impl Future<Output = ()> {
    async move {
        match deadline {
            Some(at) => sleep_until(Instant::from_std(at)).await,
            None => std::future::pending().await,
        }
    }
}
