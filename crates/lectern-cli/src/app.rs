use crate::document::{DocumentRows, ROW_THRESHOLD};
use anyhow::Result;
use crossterm::event::KeyCode;
use lectern_config::Config;
use lectern_engine::{
    AnchorId, Article, NavigationEntry, NavigationMode, OpenArticle, ReaderSession, TrackerTiming,
    io,
};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Longest the event loop sleeps while no tracker timer is pending.
pub const IDLE_WAKEUP: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Articles,
    Document,
    Contents,
}

pub struct App {
    articles_path: PathBuf,
    pub articles: Vec<Article>,
    pub list_state: ListState,
    pub session: ReaderSession,
    pub document: DocumentRows,
    pub scroll: usize,
    pub viewport: usize,
    pub toc_state: ListState,
    pub focus: Focus,
    pub status: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let articles = io::scan_articles(&config.articles_path)?;
        let timing = TrackerTiming {
            threshold: ROW_THRESHOLD,
            ..config.tracking.timing()
        };
        Ok(Self::with_articles(
            config.articles_path.clone(),
            articles,
            config.reader.navigation,
            timing,
        ))
    }

    pub fn with_articles(
        articles_path: PathBuf,
        articles: Vec<Article>,
        mode: NavigationMode,
        timing: TrackerTiming,
    ) -> Self {
        let mut list_state = ListState::default();
        if !articles.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            articles_path,
            articles,
            list_state,
            session: ReaderSession::new(mode, timing),
            document: DocumentRows::default(),
            scroll: 0,
            viewport: 1,
            toc_state: ListState::default(),
            focus: Focus::Articles,
            status: None,
        }
    }

    pub fn open_article(&self) -> Option<&OpenArticle> {
        self.session.article()
    }

    pub fn navigation(&self) -> &[NavigationEntry] {
        self.open_article()
            .map(|open| open.navigation.as_slice())
            .unwrap_or_default()
    }

    pub fn next_article(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.articles.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_article(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.articles.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn open_selected(&mut self, now: Instant) {
        let Some(article) = self
            .list_state
            .selected()
            .and_then(|i| self.articles.get(i))
            .cloned()
        else {
            return;
        };

        match io::read_article(article.relative_path(), &self.articles_path) {
            Ok(source) => self.open_source(article, &source, now),
            Err(e) => {
                log::error!("Error reading article {}: {e}", article.display_path());
                self.status = Some(format!("Error reading article: {e}"));
            }
        }
    }

    pub fn open_source(&mut self, article: Article, source: &str, now: Instant) {
        let open = self.session.open(article, source, now);
        self.document = DocumentRows::layout(&open.blocks);
        self.status = open.diagnostics.first().map(ToString::to_string);
        self.scroll = 0;
        self.toc_state = ListState::default();
        self.focus = Focus::Document;
    }

    pub fn close(&mut self) {
        self.session.close();
        self.document = DocumentRows::default();
        self.scroll = 0;
        self.toc_state = ListState::default();
        self.status = None;
        self.focus = Focus::Articles;
    }

    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.scroll = self.scroll.min(self.document.max_scroll(self.viewport));
    }

    pub fn scroll_to(&mut self, row: usize, now: Instant) {
        let row = row.min(self.document.max_scroll(self.viewport));
        if row != self.scroll {
            self.scroll = row;
            self.session.scroll(now);
        }
    }

    pub fn scroll_by(&mut self, delta: isize, now: Instant) {
        self.scroll_to(self.scroll.saturating_add_signed(delta), now);
    }

    pub fn jump_to_selected_heading(&mut self, now: Instant) {
        let Some(entry) = self
            .toc_state
            .selected()
            .and_then(|i| self.navigation().get(i))
            .cloned()
        else {
            return;
        };

        match self.document.row_of(entry.anchor) {
            Some(row) => self.scroll_to(row, now),
            None => {
                log::warn!("{} is listed but not rendered", entry.anchor);
                self.status = Some(format!("\"{}\" is not a rendered heading", entry.title));
            }
        }
    }

    /// Runs a due tracker computation against the current row geometry.
    pub fn tick(&mut self, now: Instant) -> Option<AnchorId> {
        if !self.session.poll(now) {
            return None;
        }
        let state = self.document.scroll_state(self.scroll, self.viewport);
        let active = self.session.complete(Some(&state))?;

        if self.focus != Focus::Contents {
            let index = self.navigation().iter().position(|e| e.anchor == active);
            self.toc_state.select(index);
        }
        Some(active)
    }

    pub fn next_wakeup(&self, now: Instant) -> Duration {
        self.session
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(IDLE_WAKEUP)
    }

    fn move_toc_selection(&mut self, forward: bool) {
        let len = self.navigation().len();
        if len == 0 {
            return;
        }
        let i = match (self.toc_state.selected(), forward) {
            (Some(i), true) => (i + 1).min(len - 1),
            (Some(i), false) => i.saturating_sub(1),
            (None, _) => 0,
        };
        self.toc_state.select(Some(i));
    }

    /// Returns `true` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        if code == KeyCode::Char('q') {
            return true;
        }
        if code == KeyCode::Tab && self.open_article().is_some() {
            self.focus = match self.focus {
                Focus::Articles => Focus::Document,
                Focus::Document => Focus::Contents,
                Focus::Contents => Focus::Articles,
            };
            return false;
        }

        let page = self.viewport as isize;
        match self.focus {
            Focus::Articles => match code {
                KeyCode::Down | KeyCode::Char('j') => self.next_article(),
                KeyCode::Up | KeyCode::Char('k') => self.previous_article(),
                KeyCode::Enter | KeyCode::Char(' ') => self.open_selected(now),
                _ => {}
            },
            Focus::Document => match code {
                KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1, now),
                KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1, now),
                KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page, now),
                KeyCode::PageUp => self.scroll_by(-page, now),
                KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0, now),
                KeyCode::End | KeyCode::Char('G') => self.scroll_to(usize::MAX, now),
                KeyCode::Esc | KeyCode::Backspace => self.close(),
                _ => {}
            },
            Focus::Contents => match code {
                KeyCode::Down | KeyCode::Char('j') => self.move_toc_selection(true),
                KeyCode::Up | KeyCode::Char('k') => self.move_toc_selection(false),
                KeyCode::Enter => self.jump_to_selected_heading(now),
                KeyCode::Esc => self.focus = Focus::Document,
                _ => {}
            },
        }
        false
    }
}
