//! Fixed navigation bar over a scrolling page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │ α ALPHAQUBIT 2024   Sections  Paper  Exit   ·… │  nav bar (tui-menu)
//! │                                                 │
//! │  (page window: hero, sections, diagrams, ...)   │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │ [page] Tab:diagrams m:menu p:paper q:quit  42%  │  status bar
//! └─────────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tui_menu::Menu;

use crate::content::{HERO, PAPER_URL};

use super::app::{Focus, TuiApp};
use super::dashboard;
use super::page;

/// Width of the brand mark at the left of the nav bar.
const BRAND_WIDTH: u16 = 20;

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // nav bar
            Constraint::Min(3),    // page
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    // Lay out first: anchors and page height feed navigation.
    let canvas = page::layout_page(app, outer[1].width);
    app.anchors = canvas.anchors.clone();
    app.page_height = canvas.height;
    app.viewport_height = outer[1].height;
    app.apply_pending_section();
    app.scroll = app.scroll.min(app.max_scroll());

    page::blit(&canvas, f.buffer_mut(), outer[1], app.scroll);
    draw_status(f, app, outer[2]);
    draw_nav(f, app, outer[0], outer[1]);

    if app.show_paper {
        draw_paper_popup(f, app);
    }
}

fn draw_nav(f: &mut Frame, app: &mut TuiApp, bar: Rect, page: Rect) {
    let theme = app.theme;
    // Transparent over the hero, filled once the reader scrolls.
    let bar_style = if app.scrolled() {
        Style::default().fg(theme.ink).bg(theme.panel)
    } else {
        Style::default().fg(theme.ink).bg(theme.background)
    };
    f.render_widget(Paragraph::new("").style(bar_style), bar);

    let brand = Line::from(vec![
        Span::styled(
            " α ",
            Style::default()
                .fg(Color::White)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ALPHAQUBIT ", bar_style.add_modifier(Modifier::BOLD)),
        Span::styled("2024", bar_style.fg(theme.muted)),
    ]);
    let brand_area = Rect::new(bar.x, bar.y, BRAND_WIDTH.min(bar.width), 1);
    f.render_widget(Paragraph::new(brand), brand_area);

    // Menu dropdowns overlay the page below.
    if bar.width > BRAND_WIDTH {
        let menu_area = Rect {
            x: bar.x + BRAND_WIDTH,
            y: bar.y,
            width: bar.width - BRAND_WIDTH,
            height: bar.height + page.height,
        };
        let menu_widget = Menu::new()
            .default_style(bar_style)
            .highlight(
                Style::default()
                    .fg(Color::White)
                    .bg(theme.ink)
                    .add_modifier(Modifier::BOLD),
            )
            .dropdown_width(22)
            .dropdown_style(Style::default().fg(theme.ink).bg(theme.panel));
        f.render_stateful_widget(menu_widget, menu_area, &mut app.menu_state);
    }

    // Scroll-position highlight on the right of the bar.
    if let Some(label) = app.current_section().and_then(dashboard::nav_label) {
        let text = format!("• {label} ");
        let w = (text.chars().count() as u16).min(bar.width);
        let area = Rect::new(bar.x + bar.width - w, bar.y, w, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                text,
                bar_style.fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            area,
        );
    }
}

fn draw_status(f: &mut Frame, app: &TuiApp, area: Rect) {
    let focus_color = match app.focus {
        Focus::Page => Color::Green,
        Focus::SurfaceCode | Focus::Chart => Color::Cyan,
    };
    let hints = if app.menu_open {
        "←/→ menus  ↑/↓ items  Enter go  Esc close"
    } else {
        match app.focus {
            Focus::Page => "j/k scroll  Tab diagrams  m menu  p paper  q quit",
            Focus::SurfaceCode => "←/→ qubit  Space toggle  r reset  Tab next  Esc page",
            Focus::Chart => "←/→ distance  3/5/1 pick  Tab next  Esc page",
        }
    };

    let mut spans = vec![
        Span::styled(" [", Style::default().fg(Color::DarkGray)),
        Span::styled(app.focus.label(), Style::default().fg(focus_color)),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ];
    let progress = dashboard::format_progress(app.scroll, app.max_scroll());
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let pad = (area.width as usize).saturating_sub(used + progress.len() + 1);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(progress, Style::default().fg(Color::Yellow)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_paper_popup(f: &mut Frame, app: &TuiApp) {
    let area = f.area();
    let width = 60u16.min(area.width);
    let height = 7u16.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let block = Block::default()
        .title(" View Paper ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .style(Style::default().bg(app.theme.panel).fg(app.theme.ink));
    let body = vec![
        Line::styled(
            format!("{} — Nature (2024)", HERO.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            PAPER_URL,
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Line::default(),
        Line::styled("press any key", Style::default().fg(app.theme.muted)),
    ];
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(body).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_hero_and_status() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = TuiApp::new();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("ALPHAQUBIT"));
        assert!(text.contains("AI for Quantum Error Correction"));
        assert!(text.contains("[page]"));
        assert!(text.contains("Top"));
        assert_eq!(app.viewport_height, 28);
        assert!(app.page_height > 28);
    }

    #[test]
    fn pending_section_applies_on_first_draw() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = TuiApp::new();
        app.pending_section = Some(SectionId::Results);
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(app.pending_section.is_none());
        assert!(app.scrolled());
        // The page re-draws with the new scroll on the next frame.
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Outperforming the Standard"));
        assert!(text.contains("• The Surface Code"));
    }

    #[test]
    fn paper_popup_shows_link() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = TuiApp::new();
        app.show_paper = true;
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains(PAPER_URL));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(12, 5)).unwrap();
        let mut app = TuiApp::new();
        app.show_paper = true;
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
