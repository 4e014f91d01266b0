//! Static decorative art for the impact section.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::theme::Theme;

/// Panel width including borders.
pub const PANEL_WIDTH: u16 = 52;

/// Dilution refrigerator ("gold chandelier") with the chip at the bottom.
const CRYOSTAT: [&str; 9] = [
    "▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄",
    " │    │     │    │ ",
    "  ▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄  ",
    "   │  ╭─────╮  │   ",
    "   │  ╰─────╯  │   ",
    "    ▄▄▄▄▄▄▄▄▄▄▄    ",
    "       ╭───╮       ",
    "       ╰─▪─╯       ",
    "         ▪         ",
];

/// Rows of the copper coil drawing, coloured separately.
const COIL_ROWS: [usize; 4] = [3, 4, 6, 7];

pub fn cryostat(theme: &Theme) -> Vec<Line<'static>> {
    let gold = Style::default().fg(theme.accent);
    let copper = Style::default().fg(Color::Rgb(0xB8, 0x73, 0x33));
    let mut lines: Vec<Line<'static>> = CRYOSTAT
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if COIL_ROWS.contains(&i) { copper } else { gold };
            Line::styled(*row, style).centered()
        })
        .collect();
    lines.push(Line::default());
    lines.push(
        Line::styled(
            "Simulation of the Sycamore Processor environment",
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        )
        .centered(),
    );
    lines
}
