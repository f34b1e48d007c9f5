use lectern_engine::parsing::blocks::kinds::CodeFence;
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const THEME_NAME: &str = "Solarized (light)";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

fn theme() -> Option<&'static Theme> {
    THEMES
        .themes
        .get(THEME_NAME)
        .or_else(|| THEMES.themes.values().next())
}

fn syntax_for(language: &str) -> &'static SyntaxReference {
    if language == CodeFence::DEFAULT_LANGUAGE {
        return SYNTAXES.find_syntax_plain_text();
    }
    SYNTAXES
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text())
}

/// Highlights `code` as HTML spans. Always returns markup that is safe to
/// inject: any highlighting failure yields the escaped source instead.
pub fn highlight_code(language: &str, code: &str) -> String {
    let Some(theme) = theme() else {
        return escape(code);
    };
    let mut highlighter = HighlightLines::new(syntax_for(language), theme);

    let mut out = String::with_capacity(code.len() * 2);
    for line in LinesWithEndings::from(code) {
        let html = highlighter
            .highlight_line(line, &SYNTAXES)
            .ok()
            .and_then(|ranges| styled_line_to_highlighted_html(&ranges, IncludeBackground::No).ok());
        match html {
            Some(html) => out.push_str(&html),
            None => {
                log::debug!("highlighting {language} failed, falling back to plain text");
                return escape(code);
            }
        }
    }
    out
}

fn escape(code: &str) -> String {
    html_escape::encode_text(code).into_owned()
}
