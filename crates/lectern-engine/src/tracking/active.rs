use crate::anchor::AnchorId;

/// The heading currently being read. Empty when no document is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveAnchor(Option<AnchorId>);

impl ActiveAnchor {
    pub fn get(&self) -> Option<AnchorId> {
        self.0
    }

    pub fn is(&self, anchor: AnchorId) -> bool {
        self.0 == Some(anchor)
    }

    /// Stores `anchor`; returns `false` when it was already active.
    pub fn publish(&mut self, anchor: AnchorId) -> bool {
        if self.is(anchor) {
            return false;
        }
        self.0 = Some(anchor);
        true
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }
}
