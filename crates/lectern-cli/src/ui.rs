use crate::app::{App, Focus};
use crate::document::RowKind;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    if app.open_article().is_some() {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(outer[0]);
        render_articles(f, app, panes[0]);
        render_document(f, app, panes[1]);
        render_contents(f, app, panes[2]);
    } else {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(outer[0]);
        render_articles(f, app, panes[0]);
        render_welcome(f, app, panes[1]);
    }

    render_help(f, app, outer[1]);
}

fn pane(title: impl Into<Line<'static>>, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn render_articles(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| ListItem::new(Line::from(article.display_path().to_string())))
        .collect();

    let list = List::new(items)
        .block(pane("Articles", app.focus == Focus::Articles))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_welcome(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.articles.len() {
        0 => "No articles found.".to_string(),
        1 => "1 article. Press Enter to start reading.".to_string(),
        n => format!("{n} articles. Press Enter to start reading."),
    };
    let welcome = Paragraph::new(vec![Line::from(text)]).block(pane("Lectern", false));
    f.render_widget(welcome, area);
}

fn row_style(kind: RowKind) -> Style {
    match kind {
        RowKind::Heading(1) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        RowKind::Heading(_) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        RowKind::CodeFrame => Style::default().fg(Color::DarkGray),
        RowKind::Code => Style::default().fg(Color::Green),
        RowKind::Text | RowKind::Blank => Style::default(),
    }
}

fn render_document(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(open) = app.open_article() else {
        return;
    };
    let title = format!(
        "{} · {} min read",
        open.article.display_name(),
        open.read_time_minutes
    );
    let block = pane(title, app.focus == Focus::Document);

    let inner = block.inner(area);
    app.set_viewport(usize::from(inner.height));

    let lines: Vec<Line> = if app.document.is_empty() {
        vec![Line::from("This article is empty.")]
    } else {
        app.document
            .rows
            .iter()
            .skip(app.scroll)
            .take(app.viewport)
            .map(|row| Line::styled(row.text.clone(), row_style(row.kind)))
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_contents(f: &mut Frame, app: &mut App, area: Rect) {
    let active = app.session.active();
    let items: Vec<ListItem> = app
        .navigation()
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            let (marker, style) = if active == Some(entry.anchor) {
                (
                    "▸ ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("{marker}{}", entry.title), style),
            ]))
        })
        .collect();

    let focused = app.focus == Focus::Contents;
    let mut list = List::new(items).block(pane("Contents", focused));
    if focused {
        list = list.highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    }

    f.render_stateful_widget(list, area, &mut app.toc_state);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let text = match (&app.status, app.focus) {
        (Some(status), _) => status.clone(),
        (None, Focus::Articles) => "q: Quit | ↑/k ↓/j: Select | Enter: Open | Tab: Switch pane".into(),
        (None, Focus::Document) => {
            "q: Quit | ↑/k ↓/j: Scroll | PgUp/PgDn: Page | Esc: Back | Tab: Switch pane".into()
        }
        (None, Focus::Contents) => {
            "q: Quit | ↑/k ↓/j: Select | Enter: Jump | Esc: Document | Tab: Switch pane".into()
        }
    };
    f.render_widget(Paragraph::new(Line::from(text)), area);
}
