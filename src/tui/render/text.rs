//! Markdown copy → styled, word-wrapped lines.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Render markdown via tui-markdown and wrap it to `width` columns.
pub fn paragraph(text: &'static str, width: u16, base: Style) -> Vec<Line<'static>> {
    let rendered = tui_markdown::from_str(text);
    rendered
        .lines
        .iter()
        .flat_map(|line| wrap_line(line, width as usize, base))
        .collect()
}

/// Plain (non-markdown) text wrapped to `width`.
pub fn plain(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_line(&Line::from(text.to_string()), width as usize, style)
}

/// Greedy word wrap that keeps span styles. Words glued to a styled run
/// (e.g. "**code**,") stay glued.
pub fn wrap_line(line: &Line<'_>, width: usize, base: Style) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut out: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    let mut pending_space = false;

    for span in &line.spans {
        let style = base.patch(line.style).patch(span.style);
        let content = span.content.as_ref();
        if content.starts_with(char::is_whitespace) {
            pending_space = true;
        }
        for (i, word) in content.split_whitespace().enumerate() {
            let gap = i > 0 || pending_space;
            let w = Span::raw(word).width();
            if gap && used > 0 && used + 1 + w > width {
                out.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            if gap && used > 0 {
                current.push(Span::styled(" ", style));
                used += 1;
            }
            current.push(Span::styled(word.to_string(), style));
            used += w;
        }
        pending_space = content.ends_with(char::is_whitespace);
    }

    if !current.is_empty() || out.is_empty() {
        out.push(Line::from(current));
    }
    out
}
