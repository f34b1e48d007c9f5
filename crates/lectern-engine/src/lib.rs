pub mod anchor;
pub mod clipboard;
pub mod io;
pub mod models;
pub mod navigation;
pub mod parsing;
pub mod reader;
pub mod tracking;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use anchor::AnchorId;
pub use clipboard::{Clipboard, ClipboardError, Toast, copy_code, copy_text_for};
pub use io::*;
pub use models::{Article, article::read_time_minutes};
pub use navigation::{
    AnchorDrift, NavigationEntry, NavigationMode, anchor_drift, extract_toc, navigation_for,
    outline,
};
pub use parsing::{Diagnostic, ParsedArticle, blocks::ContentBlock, parse, parse_article};
pub use reader::{OpenArticle, ReaderSession};
pub use tracking::{
    ActiveAnchor, ContainerMetrics, DEFAULT_THRESHOLD_PX, HeadingPosition, LayoutProbe,
    ScrollState, ScrollTracker, TrackerCore, TrackerHandle, TrackerTiming, resolve_active,
    scroll_tracker,
};
