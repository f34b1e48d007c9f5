//! Active-heading tracking for a scrolling document.
//!
//! [`TrackerCore`] owns the timers (initial delay, scroll debounce, frame
//! gate) and the active anchor, and is advanced by the host with explicit
//! instants. [`ScrollTracker`] drives a core on a tokio-compatible executor
//! for hosts that can answer [`LayoutProbe`] queries.

pub mod active;
pub mod core;
pub mod debounce;
pub mod driver;
pub mod frame;
pub mod geometry;
pub mod probe;

pub use active::ActiveAnchor;
pub use core::{TrackerCore, TrackerTiming};
pub use debounce::Debounce;
pub use driver::{ScrollTracker, TrackerEvent, TrackerHandle, scroll_tracker};
pub use frame::FrameGate;
pub use geometry::{DEFAULT_THRESHOLD_PX, HeadingPosition, ScrollState, resolve_active};
pub use probe::{ContainerMetrics, LayoutProbe, measure};
