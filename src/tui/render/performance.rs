//! Performance chart — two vertical bars per selected distance.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;
use crate::widgets::{ChartView, CodeDistance, PerformanceChart};

use super::text;

/// Panel width including borders.
pub const PANEL_WIDTH: u16 = 56;

/// Rows available to the bars.
pub const CHART_HEIGHT: usize = 10;

/// Bar column width.
const COLUMN: usize = 14;
const BAR: &str = "██████████";

const INTRO: &str = "AlphaQubit consistently achieves lower logical error rates (LER) than the standard Minimum-Weight Perfect Matching (MWPM) decoder.";

/// Rows filled by a bar of normalised `height`. `floor` keeps a sliver
/// visible for tiny readings.
pub fn bar_rows(height: f64, floor: bool) -> usize {
    let rows = (height.clamp(0.0, 1.0) * CHART_HEIGHT as f64).round() as usize;
    if floor {
        rows.max(1)
    } else {
        rows
    }
}

pub fn lines(chart: &PerformanceChart, theme: &Theme) -> Vec<Line<'static>> {
    let view = chart.view();
    let muted = Style::default().fg(theme.muted);

    let mut lines: Vec<Line<'static>> = text::plain(INTRO, PANEL_WIDTH - 4, muted)
        .into_iter()
        .map(Line::centered)
        .collect();
    lines.push(Line::default());
    lines.push(buttons(chart.selected(), theme));
    lines.push(Line::default());
    lines.extend(bars(&view, theme));
    lines.push(Line::default());
    lines.push(
        Line::from(vec![
            Span::styled("▮ ", Style::default().fg(theme.accent)),
            Span::styled("LOGICAL ERROR RATE (LOWER IS BETTER)", muted),
        ])
        .centered(),
    );
    lines.push(Line::styled("←/→ or 3·5·1 select distance", muted).centered());
    lines
}

fn buttons(selected: CodeDistance, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span<'static>> = CodeDistance::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, d)| {
            let style = if *d == selected {
                Style::default()
                    .fg(theme.ink)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            let sep = if i == 0 { "" } else { "  " };
            [Span::raw(sep), Span::styled(format!(" {} ", d.label()), style)]
        })
        .collect();
    Line::from(spans).centered()
}

fn bars(view: &ChartView, theme: &Theme) -> Vec<Line<'static>> {
    let baseline_style = Style::default().fg(theme.muted);
    let improved_style = Style::default().fg(theme.accent);
    let label = |s: &str, style: Style| {
        Span::styled(format!("{s:^COLUMN$}"), style.add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![Line::from(vec![
        label(view.baseline_label.as_str(), baseline_style),
        Span::raw("  "),
        label(view.improved_label.as_str(), improved_style),
    ])
    .centered()];

    let baseline_rows = bar_rows(view.baseline_height, false);
    let improved_rows = bar_rows(view.improved_height, true);
    for row in 0..CHART_HEIGHT {
        let level = CHART_HEIGHT - row;
        let cell = |filled: usize, style: Style| {
            if level <= filled {
                Span::styled(format!("{BAR:^COLUMN$}"), style)
            } else {
                Span::raw(" ".repeat(COLUMN))
            }
        };
        lines.push(
            Line::from(vec![
                cell(baseline_rows, baseline_style),
                Span::raw("  "),
                cell(improved_rows, improved_style),
            ])
            .centered(),
        );
    }

    lines.push(
        Line::from(vec![
            label("STANDARD", baseline_style),
            Span::raw("  "),
            label("ALPHAQUBIT", improved_style),
        ])
        .centered(),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::lines_to_text;

    #[test]
    fn labels_follow_selection() {
        let mut chart = PerformanceChart::default();
        let text = lines_to_text(&lines(&chart, &Theme::default()));
        assert!(text.contains("3.60%"));
        assert!(text.contains("2.75%"));

        chart.select(CodeDistance::D11);
        let text = lines_to_text(&lines(&chart, &Theme::default()));
        assert!(text.contains("0.0041%"));
        assert!(text.contains("0.0009%"));
    }

    #[test]
    fn taller_bar_fills_eight_rows() {
        for d in CodeDistance::ALL {
            let v = PerformanceChart::new(d).view();
            let top = bar_rows(v.baseline_height, false).max(bar_rows(v.improved_height, true));
            assert_eq!(top, 8);
        }
    }

    #[test]
    fn floor_keeps_sliver() {
        assert_eq!(bar_rows(0.0, true), 1);
        assert_eq!(bar_rows(0.0, false), 0);
        assert_eq!(bar_rows(1.0, false), CHART_HEIGHT);
    }

    #[test]
    fn selected_button_is_highlighted() {
        let chart = PerformanceChart::new(CodeDistance::D3);
        let line = buttons(chart.selected(), &Theme::default());
        let highlighted: Vec<&Span> = line.spans.iter().filter(|s| s.style.bg.is_some()).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].content, " Distance 3 ");
    }

    #[test]
    fn fits_panel() {
        let out = lines(&PerformanceChart::default(), &Theme::default());
        assert!(out.iter().all(|l| l.width() <= (PANEL_WIDTH - 2) as usize));
    }
}
