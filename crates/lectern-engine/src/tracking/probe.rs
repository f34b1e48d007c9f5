use crate::anchor::AnchorId;

use super::geometry::{HeadingPosition, ScrollState};

/// Geometry of the scroll container in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMetrics {
    /// Viewport y of the container's visible top edge.
    pub top: f64,
    /// Visible height of the container.
    pub height: f64,
    pub scroll_top: f64,
}

/// Host-side handle onto one scroll container and the headings inside it.
///
/// Measurements are asynchronous because UI hosts answer layout queries
/// through their event loop.
#[allow(async_fn_in_trait)]
pub trait LayoutProbe {
    async fn container(&self) -> Option<ContainerMetrics>;

    /// Viewport y of the heading's top edge, `None` if it is not mounted.
    async fn anchor_top(&self, anchor: AnchorId) -> Option<f64>;
}

/// Samples a [`ScrollState`]; headings the probe cannot find are skipped.
pub async fn measure<P: LayoutProbe>(probe: &P, anchors: &[AnchorId]) -> Option<ScrollState> {
    let container = probe.container().await?;

    let mut headings = Vec::with_capacity(anchors.len());
    for &anchor in anchors {
        if let Some(top) = probe.anchor_top(anchor).await {
            headings.push(HeadingPosition {
                anchor,
                offset: top - container.top,
            });
        }
    }

    log::trace!(
        "measured {}/{} headings at scroll_top {}",
        headings.len(),
        anchors.len(),
        container.scroll_top
    );

    Some(ScrollState {
        scroll_top: container.scroll_top,
        container_height: container.height,
        headings,
    })
}
