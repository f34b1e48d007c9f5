//! DOM geometry for the scroll tracker.
//!
//! Elements register themselves from their `onmounted` handlers; the
//! tracker then reads their client rects through [`LayoutProbe`].

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use lectern_engine::{AnchorId, ContainerMetrics, LayoutProbe};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct Elements {
    container: Option<Rc<MountedData>>,
    headings: HashMap<AnchorId, Rc<MountedData>>,
}

/// Mounted scroll container and headings of one open article.
#[derive(Clone, Default)]
pub struct DomLayout {
    elements: Rc<RefCell<Elements>>,
}

impl PartialEq for DomLayout {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements)
    }
}

impl std::fmt::Debug for DomLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elements = self.elements.borrow();
        f.debug_struct("DomLayout")
            .field("container", &elements.container.is_some())
            .field("headings", &elements.headings.len())
            .finish()
    }
}

impl DomLayout {
    pub fn set_container(&self, element: Rc<MountedData>) {
        self.elements.borrow_mut().container = Some(element);
    }

    pub fn register_heading(&self, anchor: AnchorId, element: Rc<MountedData>) {
        self.elements.borrow_mut().headings.insert(anchor, element);
    }

    fn container(&self) -> Option<Rc<MountedData>> {
        self.elements.borrow().container.clone()
    }

    fn heading(&self, anchor: AnchorId) -> Option<Rc<MountedData>> {
        self.elements.borrow().headings.get(&anchor).cloned()
    }

    /// Smoothly scrolls the heading for `anchor` to the top of the container.
    pub async fn scroll_to(&self, anchor: AnchorId) {
        let Some(element) = self.heading(anchor) else {
            log::debug!("cannot scroll to {anchor}: not mounted");
            return;
        };
        if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
            log::warn!("failed to scroll to {anchor}: {e:?}");
        }
    }
}

async fn client_rect(element: &MountedData) -> Option<PixelsRect> {
    match element.get_client_rect().await {
        Ok(rect) => Some(rect),
        Err(e) => {
            log::trace!("client rect unavailable: {e:?}");
            None
        }
    }
}

impl LayoutProbe for DomLayout {
    async fn container(&self) -> Option<ContainerMetrics> {
        let element = DomLayout::container(self)?;
        let rect = client_rect(&element).await?;
        let scroll = element.get_scroll_offset().await.ok()?;

        Some(ContainerMetrics {
            top: rect.origin.y,
            height: rect.size.height,
            scroll_top: scroll.y,
        })
    }

    async fn anchor_top(&self, anchor: AnchorId) -> Option<f64> {
        let element = self.heading(anchor)?;
        client_rect(&element).await.map(|rect| rect.origin.y)
    }
}
