use std::time::Instant;

use crate::anchor::AnchorId;
use crate::models::{Article, article::read_time_minutes};
use crate::navigation::{NavigationEntry, NavigationMode, navigation_for};
use crate::parsing::{Diagnostic, blocks::ContentBlock, parse_article};
use crate::tracking::{ScrollState, TrackerCore, TrackerTiming};

/// Everything derived from one article's source.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenArticle {
    pub article: Article,
    pub blocks: Vec<ContentBlock>,
    pub navigation: Vec<NavigationEntry>,
    pub diagnostics: Vec<Diagnostic>,
    pub read_time_minutes: usize,
}

impl OpenArticle {
    pub fn load(article: Article, source: &str, mode: NavigationMode) -> Self {
        let parsed = parse_article(source);
        for diagnostic in &parsed.diagnostics {
            log::debug!("{}: {diagnostic}", article.display_path());
        }
        let navigation = navigation_for(source, &parsed.blocks, mode);

        Self {
            read_time_minutes: read_time_minutes(source),
            article,
            blocks: parsed.blocks,
            navigation,
            diagnostics: parsed.diagnostics,
        }
    }

    /// Anchors the tracker follows, in document order.
    pub fn anchors(&self) -> Vec<AnchorId> {
        self.navigation.iter().map(|entry| entry.anchor).collect()
    }
}

/// The article currently on screen and its scroll tracker.
///
/// At most one tracker exists at a time. Opening an article tears down the
/// previous tracker before the new one starts, so no timer from an old
/// document can publish into the new one.
#[derive(Debug)]
pub struct ReaderSession {
    mode: NavigationMode,
    timing: TrackerTiming,
    current: Option<(OpenArticle, TrackerCore)>,
}

impl ReaderSession {
    pub fn new(mode: NavigationMode, timing: TrackerTiming) -> Self {
        Self {
            mode,
            timing,
            current: None,
        }
    }

    pub fn open(&mut self, article: Article, source: &str, now: Instant) -> &OpenArticle {
        self.close();
        log::info!("opening {}", article.display_path());

        let open = OpenArticle::load(article, source, self.mode);
        let tracker = TrackerCore::new(open.anchors(), self.timing, now);
        let (open, _) = self.current.insert((open, tracker));
        open
    }

    pub fn close(&mut self) {
        if let Some((open, mut tracker)) = self.current.take() {
            tracker.teardown();
            log::debug!(
                "closed {} after {} computations",
                open.article.display_path(),
                tracker.computations()
            );
        }
    }

    pub fn article(&self) -> Option<&OpenArticle> {
        self.current.as_ref().map(|(open, _)| open)
    }

    pub fn active(&self) -> Option<AnchorId> {
        self.current.as_ref().and_then(|(_, tracker)| tracker.active())
    }

    pub fn scroll(&mut self, now: Instant) {
        if let Some((_, tracker)) = &mut self.current {
            tracker.scroll(now);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.current
            .as_ref()
            .and_then(|(_, tracker)| tracker.next_deadline())
    }

    /// See [`TrackerCore::poll`].
    pub fn poll(&mut self, now: Instant) -> bool {
        match &mut self.current {
            Some((_, tracker)) => tracker.poll(now),
            None => false,
        }
    }

    pub fn complete(&mut self, state: Option<&ScrollState>) -> Option<AnchorId> {
        let (_, tracker) = self.current.as_mut()?;
        tracker.complete(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::HeadingPosition;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const SOURCE: &str = "# One\n\ntext\n\n## Two\n";

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn top_heading(anchor: usize) -> ScrollState {
        ScrollState {
            scroll_top: 0.0,
            container_height: 600.0,
            headings: vec![HeadingPosition {
                anchor: AnchorId(anchor),
                offset: 0.0,
            }],
        }
    }

    fn session() -> ReaderSession {
        ReaderSession::new(NavigationMode::Parsed, TrackerTiming::default())
    }

    #[test]
    fn open_builds_navigation() {
        let mut s = session();
        let open = s.open(Article::from("intro.md"), SOURCE, Instant::now());

        assert_eq!(open.anchors(), vec![AnchorId(0), AnchorId(1)]);
        assert_eq!(open.navigation[1].title, "Two");
        assert_eq!(open.read_time_minutes, 1);
        assert!(open.diagnostics.is_empty());
    }

    #[test]
    fn diagnostics_survive_loading() {
        let open = OpenArticle::load(
            Article::from("broken.md"),
            "# T\n```rust\nfn f() {}",
            NavigationMode::Parsed,
        );
        assert_eq!(open.diagnostics.len(), 1);
        assert_eq!(open.blocks.len(), 1);
    }

    #[test]
    fn reopening_cancels_previous_tracker() {
        let t0 = Instant::now();
        let mut s = session();
        s.open(Article::from("a.md"), SOURCE, t0);
        s.poll(t0 + ms(100));
        assert!(s.poll(t0 + ms(116)));
        assert_eq!(s.complete(Some(&top_heading(1))), Some(AnchorId(1)));
        s.scroll(t0 + ms(200));

        let t1 = t0 + ms(205);
        s.open(Article::from("b.md"), SOURCE, t1);

        assert_eq!(s.active(), None);
        // only the new document's initial delay remains
        assert_eq!(s.next_deadline(), Some(t1 + ms(100)));
        assert!(!s.poll(t0 + ms(246)));
    }

    #[test]
    fn close_tears_down() {
        let t0 = Instant::now();
        let mut s = session();
        s.open(Article::from("a.md"), SOURCE, t0);
        s.scroll(t0 + ms(10));
        s.close();

        assert!(s.article().is_none());
        assert_eq!(s.active(), None);
        assert_eq!(s.next_deadline(), None);
        assert!(!s.poll(t0 + ms(1000)));
        assert_eq!(s.complete(Some(&top_heading(0))), None);
    }
}
