//! Key binding dispatch for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::widgets::{CodeDistance, DataQubit};

use super::app::{Focus, TuiApp};

/// Rows moved by PageUp/PageDown when the viewport is unknown.
const PAGE_FALLBACK: u16 = 10;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Global bindings
    if let KeyCode::Char('c') = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            app.should_quit = true;
            return;
        }
    }

    if app.show_paper {
        // Any key dismisses the paper popup
        app.show_paper = false;
        return;
    }

    if app.menu_open {
        handle_menu_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Esc => {
            if app.focus == Focus::Page {
                app.should_quit = true;
            } else {
                app.focus = Focus::Page;
            }
            return;
        }
        KeyCode::Char('m') | KeyCode::F(10) => {
            app.toggle_menu();
            return;
        }
        KeyCode::Char('p') => {
            app.show_paper = true;
            return;
        }
        KeyCode::Tab => {
            app.set_focus(app.focus.next());
            return;
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return;
        }
        KeyCode::PageDown => {
            app.scroll_by(page_step(app) as i32);
            return;
        }
        KeyCode::PageUp => {
            app.scroll_by(-(page_step(app) as i32));
            return;
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.scroll_to_top();
            return;
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.scroll_to_bottom();
            return;
        }
        _ => {}
    }

    // Focus-specific bindings
    match app.focus {
        Focus::Page => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1),
            KeyCode::Char(' ') => app.scroll_by(page_step(app) as i32),
            _ => {}
        },
        Focus::SurfaceCode => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                app.cursor_next()
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                app.cursor_prev()
            }
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor_qubit(),
            KeyCode::Char('r') => app.surface_code.reset(),
            KeyCode::Char(c @ '0'..='4') => {
                let id = c as usize - '0' as usize;
                app.surface_code.toggle(DataQubit::ALL[id]);
            }
            _ => {}
        },
        Focus::Chart => match key.code {
            KeyCode::Right | KeyCode::Char('l') => app.chart.next(),
            KeyCode::Left | KeyCode::Char('h') => app.chart.previous(),
            KeyCode::Char('3') => app.chart.select(CodeDistance::D3),
            KeyCode::Char('5') => app.chart.select(CodeDistance::D5),
            KeyCode::Char('1') => app.chart.select(CodeDistance::D11),
            _ => {}
        },
    }
}

fn handle_menu_key(app: &mut TuiApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::F(10) => app.close_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.menu_state.left(),
        KeyCode::Right | KeyCode::Char('l') => app.menu_state.right(),
        KeyCode::Up | KeyCode::Char('k') => app.menu_state.up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_state.down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.menu_state.select();
            app.drain_menu_events();
        }
        _ => {}
    }
}

fn page_step(app: &TuiApp) -> u16 {
    if app.viewport_height > 2 {
        app.viewport_height - 2
    } else {
        PAGE_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionId;

    fn press(app: &mut TuiApp, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits() {
        let mut app = TuiApp::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn esc_leaves_widget_focus_first() {
        let mut app = TuiApp::new();
        app.focus = Focus::Chart;
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Page);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn space_toggles_qubit_under_cursor() {
        let mut app = TuiApp::new();
        app.focus = Focus::SurfaceCode;
        press(&mut app, KeyCode::Char(' '));
        assert!(app.surface_code.has_error(DataQubit::ALL[0]));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.surface_code.is_stable());
    }

    #[test]
    fn digit_toggles_qubit_directly() {
        let mut app = TuiApp::new();
        app.focus = Focus::SurfaceCode;
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.surface_code.status(), "Detected 4 parity violations.");
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.surface_code.status(), "System is stable.");
    }

    #[test]
    fn chart_keys_select_distance() {
        let mut app = TuiApp::new();
        app.focus = Focus::Chart;
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.chart.selected(), CodeDistance::D11);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.chart.selected(), CodeDistance::D5);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.chart.selected(), CodeDistance::D3);
    }

    #[test]
    fn page_keys_scroll() {
        let mut app = TuiApp::new();
        app.page_height = 100;
        app.viewport_height = 20;
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll, 2);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 20);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll, 80);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn tab_focus_jumps_to_widget_section() {
        let mut app = TuiApp::new();
        app.anchors.insert(SectionId::Hero, 0);
        app.anchors.insert(SectionId::Science, 50);
        app.page_height = 200;
        app.viewport_height = 20;
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::SurfaceCode);
        assert_eq!(app.scroll, 48);
    }

    #[test]
    fn keys_route_to_menu_when_open() {
        let mut app = TuiApp::new();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.menu_open);
        // 'j' goes to the menu, not the page
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.menu_open);
        assert!(!app.should_quit);
    }

    #[test]
    fn paper_popup_swallows_next_key() {
        let mut app = TuiApp::new();
        press(&mut app, KeyCode::Char('p'));
        assert!(app.show_paper);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_paper);
        assert!(!app.should_quit);
    }
}
