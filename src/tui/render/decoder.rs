//! Decoder architecture diagram — syndrome → transformer → correction.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;
use crate::widgets::DecoderPipeline;

use super::text;

/// Panel width including borders.
pub const PANEL_WIDTH: u16 = 56;

const INTRO: &str = "The model processes syndrome history using a recurrent transformer, attending to spatial and temporal correlations.";

const INPUT_W: usize = 11;
const CORE_W: usize = 13;
const OUTPUT_W: usize = 12;

/// Build the diagram lines for the current stage.
pub fn lines(pipeline: &DecoderPipeline, theme: &Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.muted);
    let lit = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = text::plain(INTRO, PANEL_WIDTH - 4, muted)
        .into_iter()
        .map(Line::centered)
        .collect();
    lines.push(Line::default());

    let input_border = if pipeline.input_highlighted() { lit } else { muted };
    let core_border = if pipeline.transformer_highlighted() { lit } else { muted };
    let output_border = if pipeline.output_highlighted() {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        muted
    };

    let speckle = pipeline.speckle();
    for row in 0..5 {
        let mut spans = Vec::new();

        // Syndrome block
        spans.extend(boxed_row(row, INPUT_W, input_border, |r| {
            let dots: Vec<Span<'static>> = (0..3)
                .flat_map(|c| {
                    let on = speckle[r * 3 + c];
                    let dot = if on {
                        Span::styled("●", Style::default().fg(theme.ink))
                    } else {
                        Span::styled("·", muted)
                    };
                    [Span::raw(" "), dot]
                })
                .collect();
            let mut v = vec![Span::raw("  ")];
            v.extend(dots);
            v.push(Span::raw(" "));
            v
        }));

        spans.push(arrow(row, pipeline.input_arrow_lit(), lit, muted));

        // Transformer block
        spans.extend(boxed_row(row, CORE_W, core_border, |r| {
            let inner = CORE_W - 2;
            match r {
                1 => vec![Span::styled(
                    format!("{:^inner$}", "◈ CPU"),
                    if pipeline.transformer_highlighted() {
                        lit.add_modifier(Modifier::SLOW_BLINK)
                    } else {
                        muted
                    },
                )],
                _ if pipeline.attention_visible() => {
                    vec![Span::styled(format!(" {} ", "─".repeat(inner - 2)), lit)]
                }
                _ => vec![Span::raw(" ".repeat(inner))],
            }
        }));

        spans.push(arrow(row, pipeline.output_arrow_lit(), lit, muted));

        // Correction block
        spans.extend(boxed_row(row, OUTPUT_W, output_border, |r| {
            let inner = OUTPUT_W - 2;
            if r == 1 {
                let style = if pipeline.output_highlighted() {
                    Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
                } else {
                    muted
                };
                vec![Span::styled(format!("{:^inner$}", pipeline.output_glyph()), style)]
            } else {
                vec![Span::raw(" ".repeat(inner))]
            }
        }));

        lines.push(Line::from(spans).centered());
    }

    let label = Style::default().fg(theme.muted).add_modifier(Modifier::BOLD);
    lines.push(
        Line::from(vec![
            Span::styled(format!("{:^INPUT_W$}", "SYNDROME"), label),
            Span::raw("     "),
            Span::styled(format!("{:^CORE_W$}", "TRANSFORMER"), label),
            Span::raw("     "),
            Span::styled(format!("{:^OUTPUT_W$}", "CORRECTION"), label),
        ])
        .centered(),
    );
    lines.push(Line::default());
    lines.push(progress(pipeline, theme));
    lines.push(Line::styled(pipeline.stage().label().to_string(), muted).centered());
    lines
}

/// One row of a bordered block: row 0 top edge, row 4 bottom edge,
/// rows 1..=3 content from `inner(row - 1)`.
fn boxed_row<F>(row: usize, width: usize, border: Style, inner: F) -> Vec<Span<'static>>
where
    F: Fn(usize) -> Vec<Span<'static>>,
{
    let rule = "─".repeat(width - 2);
    match row {
        0 => vec![Span::styled(format!("┌{rule}┐"), border)],
        4 => vec![Span::styled(format!("└{rule}┘"), border)],
        r => {
            let mut spans = vec![Span::styled("│", border)];
            spans.extend(inner(r - 1));
            spans.push(Span::styled("│", border));
            spans
        }
    }
}

fn arrow(row: usize, on: bool, lit: Style, muted: Style) -> Span<'static> {
    if row != 2 {
        return Span::raw("     ");
    }
    if on {
        Span::styled(" ──▶ ", lit)
    } else {
        Span::styled(" ─▷  ", muted.add_modifier(Modifier::DIM))
    }
}

fn progress(pipeline: &DecoderPipeline, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span<'static>> = pipeline
        .progress()
        .iter()
        .flat_map(|current| {
            let dot = if *current {
                Span::styled("━━━━", Style::default().fg(theme.accent))
            } else {
                Span::styled("━", Style::default().fg(Color::DarkGray))
            };
            [dot, Span::raw(" ")]
        })
        .collect();
    Line::from(spans).centered()
}
