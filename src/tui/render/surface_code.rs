//! Surface code diagram — 3x3 grid of data qubits and stabilizers.
//!
//! ```text
//!  ( )──[Z]──( )
//!   │    │    │
//!  [X]──(●)──[X]
//!   │    │    │
//!  ( )──[Z]──( )
//! ```

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;
use crate::widgets::{CheckKind, DataQubit, Stabilizer, SurfaceCode};

use super::text;

/// Panel width including borders.
pub const PANEL_WIDTH: u16 = 50;

const INTRO: &str = "Toggle the grey Data Qubits to inject errors. Watch the coloured Stabilizers light up when they detect an odd number of errors.";

const CONNECTOR: &str = "──";

/// Build the diagram lines. `cursor` is drawn when the diagram has focus.
pub fn lines(code: &SurfaceCode, cursor: Option<DataQubit>, theme: &Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.muted);
    let mut lines: Vec<Line<'static>> = text::plain(INTRO, PANEL_WIDTH - 4, muted)
        .into_iter()
        .map(Line::centered)
        .collect();
    lines.push(Line::default());

    for row in 0..3 {
        let mut spans = Vec::new();
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled(CONNECTOR, muted));
            }
            spans.push(cell_span(code, cursor, (row, col), theme));
        }
        lines.push(Line::from(spans).centered());
        if row < 2 {
            lines.push(Line::styled(" │    │    │ ", muted).centered());
        }
    }

    lines.push(Line::default());
    lines.push(legend(theme));
    lines.push(
        Line::styled(
            code.status(),
            Style::default().fg(theme.ink).add_modifier(Modifier::ITALIC),
        )
        .centered(),
    );
    lines.push(Line::styled("←/→ move · space toggle · 0-4 pick · r reset", muted).centered());
    lines
}

fn cell_span(
    code: &SurfaceCode,
    cursor: Option<DataQubit>,
    at: (usize, usize),
    theme: &Theme,
) -> Span<'static> {
    if let Some(q) = DataQubit::ALL.into_iter().find(|q| q.cell() == at) {
        return qubit_span(code, q, cursor == Some(q), theme);
    }
    match Stabilizer::ALL.into_iter().find(|s| s.cell() == at) {
        Some(s) => stabilizer_span(code, s, theme),
        None => Span::raw("   "),
    }
}

fn qubit_span(code: &SurfaceCode, q: DataQubit, under_cursor: bool, theme: &Theme) -> Span<'static> {
    let glyph = if code.has_error(q) { "(●)" } else { "( )" };
    let mut style = if code.has_error(q) {
        Style::default()
            .fg(theme.accent)
            .bg(theme.ink)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.ink)
    };
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(glyph, style)
}

fn stabilizer_span(code: &SurfaceCode, s: Stabilizer, theme: &Theme) -> Span<'static> {
    let label = format!("[{}]", s.kind().label());
    if code.is_active(s) {
        let color = check_color(s.kind(), theme);
        Span::styled(
            label,
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            label,
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        )
    }
}

fn check_color(kind: CheckKind, theme: &Theme) -> ratatui::style::Color {
    match kind {
        CheckKind::Z => theme.z_check,
        CheckKind::X => theme.x_check,
    }
}

fn legend(theme: &Theme) -> Line<'static> {
    let muted = Style::default().fg(theme.muted);
    Line::from(vec![
        Span::styled("●", Style::default().fg(theme.ink)),
        Span::styled(" Error   ", muted),
        Span::styled("■", Style::default().fg(theme.z_check)),
        Span::styled(" Z-Check   ", muted),
        Span::styled("■", Style::default().fg(theme.x_check)),
        Span::styled(" X-Check", muted),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::lines_to_text;

    #[test]
    fn stable_grid() {
        let code = SurfaceCode::new();
        let text = lines_to_text(&lines(&code, None, &Theme::default()));
        assert!(text.contains("( )──[Z]──( )"));
        assert!(text.contains("[X]──( )──[X]"));
        assert!(text.contains("System is stable."));
    }

    #[test]
    fn center_error_shows_all_checks_active() {
        let mut code = SurfaceCode::new();
        code.toggle(DataQubit::CENTER);
        let theme = Theme::default();
        let out = lines(&code, None, &theme);
        let text = lines_to_text(&out);
        assert!(text.contains("[X]──(●)──[X]"));
        assert!(text.contains("Detected 4 parity violations."));

        let active: Vec<&Span> = out
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.content.starts_with('[') && s.style.bg.is_some())
            .collect();
        assert_eq!(active.len(), 4);
    }

    #[test]
    fn cursor_is_reversed() {
        let code = SurfaceCode::new();
        let out = lines(&code, Some(DataQubit::ALL[1]), &Theme::default());
        let reversed = out
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.style.add_modifier.contains(Modifier::REVERSED))
            .count();
        assert_eq!(reversed, 1);
    }

    #[test]
    fn fits_panel() {
        let out = lines(&SurfaceCode::new(), None, &Theme::default());
        assert!(out.iter().all(|l| l.width() <= (PANEL_WIDTH - 2) as usize));
    }
}
