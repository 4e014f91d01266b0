//! Page layout and navigation through the public API.

use alphaqubit::config::ShowcaseConfig;
use alphaqubit::content::{SectionId, HEADER_OFFSET, NAV_ENTRIES};
use alphaqubit::tui::app::{Focus, MenuAction, TuiApp};
use alphaqubit::tui::page;
use alphaqubit::widgets::{CodeDistance, DataQubit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use alphaqubit::tui::event::TuiMessage;

fn laid_out(mut app: TuiApp, width: u16, viewport: u16) -> TuiApp {
    let canvas = page::layout_page(&app, width);
    app.anchors = canvas.anchors;
    app.page_height = canvas.height;
    app.viewport_height = viewport;
    app
}

fn press(app: &mut TuiApp, code: KeyCode) {
    app.update(TuiMessage::Input(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[test]
fn sections_laid_out_in_page_order() {
    let app = laid_out(TuiApp::new(), 100, 30);
    let rows: Vec<u16> = SectionId::ALL
        .iter()
        .map(|id| app.anchors.offset_of(*id).expect("section laid out"))
        .collect();
    assert!(rows.windows(2).all(|w| w[0] < w[1]), "{rows:?}");
    assert_eq!(rows[0], 0);
}

#[test]
fn nav_entries_land_under_the_bar() {
    for (label, id) in NAV_ENTRIES {
        let mut app = laid_out(TuiApp::new(), 100, 30);
        app.apply_menu_action(MenuAction::GoTo(id));
        let row = app.anchors.offset_of(id).unwrap();
        let expected = row.saturating_sub(HEADER_OFFSET).min(app.max_scroll());
        assert_eq!(app.scroll, expected, "{label}");
        assert!(app.scrolled(), "{label}");
    }
}

#[test]
fn plain_text_carries_every_section() {
    let text = page::layout_page(&TuiApp::new(), 100).to_plain_text();
    for needle in [
        "AlphaQubit",
        "System is stable.",
        "Outperforming the Standard",
        "Key Contributors",
    ] {
        assert!(text.contains(needle), "missing {needle}");
    }
}

#[test]
fn toggling_a_qubit_changes_the_page() {
    let mut app = TuiApp::new();
    app.surface_code.toggle(DataQubit::CENTER);
    let text = page::layout_page(&app, 100).to_plain_text();
    assert!(text.contains("Detected 4 parity violations."));
}

#[test]
fn keyboard_drives_the_diagrams() {
    let mut app = laid_out(TuiApp::new(), 100, 30);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::SurfaceCode);
    press(&mut app, KeyCode::Char('4'));
    assert!(app.surface_code.has_error(DataQubit::CENTER));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.surface_code.is_stable());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Chart);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.chart.selected(), CodeDistance::D11);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus, Focus::Page);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn config_start_section_waits_for_layout() {
    let config = ShowcaseConfig {
        start_section: SectionId::Authors,
        ..ShowcaseConfig::default()
    };
    let app = TuiApp::with_config(&config).unwrap();
    assert_eq!(app.pending_section, Some(SectionId::Authors));

    let mut app = laid_out(app, 100, 10);
    app.apply_pending_section();
    assert!(app.pending_section.is_none());
    assert_eq!(app.current_section(), Some(SectionId::Authors));
}
