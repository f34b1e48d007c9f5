use crate::anchor::AnchorId;

/// Headings at or above this distance from the container top count as read.
pub const DEFAULT_THRESHOLD_PX: f64 = 80.0;

/// Where one heading sits relative to the visible top edge of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingPosition {
    pub anchor: AnchorId,
    /// Negative once the heading has scrolled past the top edge.
    pub offset: f64,
}

/// Geometry sampled for one tracker computation.
///
/// `headings` only holds anchors that could be measured, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_top: f64,
    pub container_height: f64,
    pub headings: Vec<HeadingPosition>,
}

/// Picks the heading the reader is looking at.
///
/// The last heading (scanning forward) whose offset is within `threshold`
/// wins. When none has reached the threshold yet, the first heading that is
/// inside the viewport is used instead, falling back to the first heading.
/// Returns `None` only when nothing could be measured.
pub fn resolve_active(state: &ScrollState, threshold: f64) -> Option<AnchorId> {
    let first = state.headings.first()?;

    let mut best = first;
    for heading in &state.headings {
        if heading.offset <= threshold {
            best = heading;
        } else {
            break;
        }
    }

    if best.offset > threshold
        && let Some(visible) = state
            .headings
            .iter()
            .find(|h| h.offset >= 0.0 && h.offset <= state.container_height)
    {
        best = visible;
    }

    Some(best.anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn state(offsets: &[f64], height: f64) -> ScrollState {
        ScrollState {
            scroll_top: 0.0,
            container_height: height,
            headings: offsets
                .iter()
                .enumerate()
                .map(|(i, offset)| HeadingPosition {
                    anchor: AnchorId(i),
                    offset: *offset,
                })
                .collect(),
        }
    }

    #[test]
    fn closest_heading_at_or_above_threshold_wins() {
        let s = state(&[-150.0, 30.0, 500.0], 800.0);
        assert_eq!(resolve_active(&s, 80.0), Some(AnchorId(1)));
    }

    #[rstest]
    #[case::exactly_on_threshold(&[-10.0, 80.0, 300.0], Some(1))]
    #[case::all_scrolled_past(&[-900.0, -400.0, -5.0], Some(2))]
    #[case::above_first_heading_first_visible(&[120.0, 400.0], Some(0))]
    #[case::nothing_visible_keeps_first(&[900.0, 1200.0], Some(0))]
    #[case::nothing_measured(&[], None)]
    fn resolves(#[case] offsets: &[f64], #[case] expected: Option<usize>) {
        let s = state(offsets, 600.0);
        assert_eq!(resolve_active(&s, DEFAULT_THRESHOLD_PX), expected.map(AnchorId));
    }

    #[test]
    fn scan_stops_at_first_heading_below_threshold() {
        // Out-of-order offsets (e.g. a sticky element) do not reach past the gap.
        let s = state(&[10.0, 200.0, 20.0], 600.0);
        assert_eq!(resolve_active(&s, 80.0), Some(AnchorId(0)));
    }

    #[test]
    fn fallback_prefers_first_heading_inside_viewport() {
        // First heading laid out below the viewport, the second inside it
        let s = state(&[700.0, 100.0], 600.0);
        assert_eq!(resolve_active(&s, 80.0), Some(AnchorId(1)));
    }
}
