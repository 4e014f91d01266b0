//! Page composition — the whole scrolling document laid out off-screen.
//!
//! The page is built top to bottom as a list of blocks (copy, panels,
//! spacers), rendered into a `Buffer` as tall as the document, and the
//! visible window is copied into the frame. Section anchors fall out of
//! the same pass, so navigation always matches what is drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::content::{
    self, Anchors, Embed, SectionId, AUTHORS, AUTHORS_CODA, AUTHORS_LEDE, FOOTER_NOTE,
    FOOTER_TAGLINE, FOOTER_TITLE, HERO,
};
use crate::theme::Theme;

use super::app::{Focus, TuiApp};
use super::render::{decor, decoder, performance, surface_code, text};

/// Widest the copy column grows, so lines stay readable.
const MAX_TEXT_WIDTH: u16 = 84;
/// Width of one author card.
const CARD_WIDTH: usize = 26;

/// What a block draws.
pub enum BlockKind {
    /// Copy, drawn in the text column.
    Text(Vec<Line<'static>>),
    /// Bordered panel centred on the page.
    Panel {
        title: String,
        lines: Vec<Line<'static>>,
        width: u16,
        focused: bool,
    },
    Spacer(u16),
}

/// One vertical slice of the page.
pub struct PageBlock {
    /// Section that starts at this block, if any.
    pub anchor: Option<SectionId>,
    pub kind: BlockKind,
    /// Background band.
    pub style: Style,
}

impl PageBlock {
    pub fn height(&self) -> u16 {
        let rows = match &self.kind {
            BlockKind::Text(lines) => lines.len(),
            BlockKind::Panel { lines, .. } => lines.len() + 2,
            BlockKind::Spacer(n) => *n as usize,
        };
        rows.min(u16::MAX as usize) as u16
    }
}

/// The laid-out page.
pub struct PageCanvas {
    pub buffer: Buffer,
    pub anchors: Anchors,
    pub height: u16,
}

impl PageCanvas {
    /// Page as plain text, trailing spaces trimmed.
    pub fn to_plain_text(&self) -> String {
        let area = self.buffer.area;
        (0..area.height)
            .map(|y| {
                let row: String = (0..area.width)
                    .map(|x| self.buffer[(x, y)].symbol().to_string())
                    .collect();
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct Composer<'a> {
    theme: &'a Theme,
    text_width: u16,
    blocks: Vec<PageBlock>,
    anchor: Option<SectionId>,
    band: Style,
}

impl<'a> Composer<'a> {
    fn start(&mut self, id: SectionId, band: Style) {
        self.anchor = Some(id);
        self.band = band;
    }

    fn push(&mut self, kind: BlockKind) {
        self.blocks.push(PageBlock {
            anchor: self.anchor.take(),
            kind,
            style: self.band,
        });
    }

    fn text(&mut self, lines: Vec<Line<'static>>) {
        self.push(BlockKind::Text(lines));
    }

    fn spacer(&mut self, rows: u16) {
        self.push(BlockKind::Spacer(rows));
    }

    fn centered(&mut self, s: &str, style: Style) {
        let lines = text::plain(s, self.text_width, style)
            .into_iter()
            .map(Line::centered)
            .collect();
        self.text(lines);
    }
}

/// Build the page blocks for the current state.
pub fn compose(app: &TuiApp, width: u16) -> Vec<PageBlock> {
    let theme = &app.theme;
    let light = Style::default().bg(theme.background).fg(theme.ink);
    let paper = Style::default().bg(theme.panel).fg(theme.ink);
    let dark = Style::default().bg(theme.ink).fg(theme.panel);
    let muted = Style::default().fg(theme.muted);
    let accent = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let mut c = Composer {
        theme,
        text_width: width.min(MAX_TEXT_WIDTH).saturating_sub(4).max(10),
        blocks: Vec::new(),
        anchor: None,
        band: light,
    };

    // Hero
    c.start(SectionId::Hero, light);
    c.spacer(3);
    c.centered(HERO.badge, accent);
    c.spacer(1);
    c.centered(HERO.title, Style::default().add_modifier(Modifier::BOLD));
    c.centered(HERO.subtitle, muted.add_modifier(Modifier::ITALIC));
    c.spacer(1);
    c.centered(HERO.lede, Style::default());
    c.spacer(2);
    c.centered(HERO.call_to_action, muted);
    c.spacer(3);

    for section in content::sections() {
        let band = if section.dark { dark } else { light };
        c.start(section.id, band);
        c.spacer(2);
        let body = if section.dark {
            Style::default().fg(theme.panel)
        } else {
            Style::default().fg(theme.ink)
        };

        let mut lines = Vec::new();
        if let Some(eyebrow) = section.eyebrow {
            lines.push(Line::styled(eyebrow, muted.add_modifier(Modifier::BOLD)));
        }
        lines.push(Line::styled(section.title, body.add_modifier(Modifier::BOLD)));
        lines.push(Line::styled("━━━━━━", Style::default().fg(theme.accent)));
        lines.push(Line::default());
        for (i, para) in section.paragraphs.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.extend(text::paragraph(*para, c.text_width, body));
        }
        if let Some((quote, attribution)) = section.quote {
            lines.push(Line::default());
            let bar = Span::styled("▌ ", Style::default().fg(theme.accent));
            for line in text::plain(
                &format!("\"{quote}\""),
                c.text_width.saturating_sub(2),
                body.add_modifier(Modifier::ITALIC),
            ) {
                let mut spans = vec![bar.clone()];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
            lines.push(Line::from(vec![
                bar.clone(),
                Span::styled(
                    format!("— {}", attribution.to_uppercase()),
                    muted.add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        c.text(lines);

        if let Some(embed) = section.embed {
            c.spacer(1);
            let panel = embed_panel(app, embed, c.theme);
            c.push(panel);
        }
        c.spacer(2);
    }

    // Authors
    c.start(SectionId::Authors, paper);
    c.spacer(2);
    c.centered("RESEARCH TEAM", muted.add_modifier(Modifier::BOLD));
    c.centered("Key Contributors", Style::default().add_modifier(Modifier::BOLD));
    c.centered(AUTHORS_LEDE, muted);
    c.spacer(1);
    let per_row = (c.text_width as usize / CARD_WIDTH).clamp(1, 3);
    let mut cards = Vec::new();
    for chunk in AUTHORS.chunks(per_row) {
        let names: Vec<Span<'static>> = chunk
            .iter()
            .map(|a| {
                Span::styled(
                    format!("{:^CARD_WIDTH$}", a.name),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        let rules: Vec<Span<'static>> = chunk
            .iter()
            .map(|_| Span::styled(format!("{:^CARD_WIDTH$}", "──"), Style::default().fg(theme.accent)))
            .collect();
        let roles: Vec<Span<'static>> = chunk
            .iter()
            .map(|a| {
                Span::styled(
                    format!("{:^CARD_WIDTH$}", a.affiliation.to_uppercase()),
                    muted,
                )
            })
            .collect();
        cards.push(Line::from(names).centered());
        cards.push(Line::from(rules).centered());
        cards.push(Line::from(roles).centered());
        cards.push(Line::default());
    }
    c.text(cards);
    c.centered(AUTHORS_CODA, muted.add_modifier(Modifier::ITALIC));
    c.spacer(2);

    // Footer
    c.start(SectionId::Footer, dark);
    c.spacer(1);
    c.centered(FOOTER_TITLE, Style::default().fg(theme.background).add_modifier(Modifier::BOLD));
    c.centered(FOOTER_TAGLINE, Style::default().fg(theme.panel));
    c.spacer(1);
    c.centered(FOOTER_NOTE, muted);
    c.spacer(1);

    c.blocks
}

fn embed_panel(app: &TuiApp, embed: Embed, theme: &Theme) -> BlockKind {
    match embed {
        Embed::SurfaceCode => {
            let focused = app.focus == Focus::SurfaceCode;
            let cursor = focused.then(|| app.cursor_qubit());
            BlockKind::Panel {
                title: "Interactive: Surface Code Detection".into(),
                lines: surface_code::lines(&app.surface_code, cursor, theme),
                width: surface_code::PANEL_WIDTH,
                focused,
            }
        }
        Embed::DecoderPipeline => BlockKind::Panel {
            title: "AlphaQubit Architecture".into(),
            lines: decoder::lines(&app.pipeline, theme),
            width: decoder::PANEL_WIDTH,
            focused: false,
        },
        Embed::PerformanceChart => BlockKind::Panel {
            title: "Performance vs Standard".into(),
            lines: performance::lines(&app.chart, theme),
            width: performance::PANEL_WIDTH,
            focused: app.focus == Focus::Chart,
        },
        Embed::Cryostat => BlockKind::Panel {
            title: "Sycamore".into(),
            lines: decor::cryostat(theme),
            width: decor::PANEL_WIDTH,
            focused: false,
        },
    }
}

/// Lay the page out at `width` columns and render it off-screen.
pub fn layout_page(app: &TuiApp, width: u16) -> PageCanvas {
    let width = width.max(1);
    let blocks = compose(app, width);
    let height = blocks
        .iter()
        .fold(0u16, |acc, b| acc.saturating_add(b.height()));

    let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
    let mut anchors = Anchors::new();
    let text_width = width.min(MAX_TEXT_WIDTH);
    let text_x = (width - text_width) / 2;

    let mut y = 0u16;
    for block in blocks {
        let h = block.height();
        if let Some(id) = block.anchor {
            anchors.insert(id, y);
        }
        if h == 0 {
            continue;
        }
        let band = Rect::new(0, y, width, h);
        buffer.set_style(band, block.style);

        match block.kind {
            BlockKind::Text(lines) => {
                let area = Rect::new(text_x + 2, y, text_width.saturating_sub(4), h);
                Paragraph::new(lines).style(block.style).render(area, &mut buffer);
            }
            BlockKind::Panel {
                title,
                lines,
                width: panel_width,
                focused,
            } => {
                let w = panel_width.min(width);
                let area = Rect::new((width - w) / 2, y, w, h);
                let border = if focused {
                    Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(app.theme.muted)
                };
                let frame = Block::default()
                    .title(format!(" {title} "))
                    .borders(Borders::ALL)
                    .border_style(border);
                Paragraph::new(lines)
                    .style(Style::default().bg(app.theme.panel).fg(app.theme.ink))
                    .block(frame)
                    .render(area, &mut buffer);
            }
            BlockKind::Spacer(_) => {}
        }
        y = y.saturating_add(h);
    }

    PageCanvas {
        buffer,
        anchors,
        height,
    }
}

/// Copy rows `scroll..scroll + area.height` of the page into `target`.
pub fn blit(canvas: &PageCanvas, target: &mut Buffer, area: Rect, scroll: u16) {
    for dy in 0..area.height {
        let src_y = scroll.saturating_add(dy);
        if src_y >= canvas.height {
            break;
        }
        for dx in 0..area.width.min(canvas.buffer.area.width) {
            if let (Some(src), Some(dst)) = (
                canvas.buffer.cell((dx, src_y)),
                target.cell_mut((area.x + dx, area.y + dy)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{CodeDistance, DataQubit};

    #[test]
    fn every_section_is_anchored_in_order() {
        let app = TuiApp::new();
        let canvas = layout_page(&app, 100);
        let rows: Vec<u16> = SectionId::ALL
            .iter()
            .map(|id| canvas.anchors.offset_of(*id).unwrap())
            .collect();
        assert_eq!(rows[0], 0);
        assert!(rows.windows(2).all(|w| w[0] < w[1]), "{rows:?}");
        assert!(canvas.height > rows[rows.len() - 1]);
    }

    #[test]
    fn page_contains_copy_and_diagrams() {
        let app = TuiApp::new();
        let text = layout_page(&app, 100).to_plain_text();
        assert!(text.contains("AlphaQubit"));
        assert!(text.contains("The Noise Barrier"));
        assert!(text.contains("Interactive: Surface Code Detection"));
        assert!(text.contains("System is stable."));
        assert!(text.contains("AlphaQubit Architecture"));
        assert!(text.contains("3.60%"));
        assert!(text.contains("Johannes Bausch"));
        assert!(text.contains("Based on research published in Nature (2024)."));
    }

    #[test]
    fn page_reflects_widget_state() {
        let mut app = TuiApp::new();
        app.surface_code.toggle(DataQubit::CENTER);
        app.chart.select(CodeDistance::D11);
        let text = layout_page(&app, 100).to_plain_text();
        assert!(text.contains("Detected 4 parity violations."));
        assert!(text.contains("0.0041%"));
        assert!(text.contains("0.0009%"));
    }

    #[test]
    fn narrow_page_still_lays_out() {
        let app = TuiApp::new();
        let canvas = layout_page(&app, 30);
        assert!(canvas.anchors.offset_of(SectionId::Footer).is_some());
    }

    #[test]
    fn blit_copies_window() {
        let app = TuiApp::new();
        let canvas = layout_page(&app, 80);
        let hero = canvas.anchors.offset_of(SectionId::Introduction).unwrap();
        let area = Rect::new(0, 0, 80, 5);
        let mut target = Buffer::empty(area);
        blit(&canvas, &mut target, area, hero);
        assert_eq!(target[(0, 0)], canvas.buffer[(0, hero)]);
    }
}
