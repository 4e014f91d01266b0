//! TuiApp — the TEA model.
//!
//! All state lives here. Update receives TuiMessages, mutates state.
//! View reads state to produce ratatui widgets. The three diagrams each
//! own their state; nothing is shared between them.

use std::time::Duration;

use tracing::debug;
use tui_menu::{MenuEvent, MenuItem, MenuState};

use crate::config::ShowcaseConfig;
use crate::content::{Anchors, SectionId, NAV_ENTRIES, SCROLLED_THRESHOLD};
use crate::error::ShowcaseResult;
use crate::theme::Theme;
use crate::widgets::{DataQubit, DecoderPipeline, PerformanceChart, SurfaceCode};

use super::event::TuiMessage;

/// Which part of the page receives widget keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Plain reading: arrows scroll.
    Page,
    /// Arrows move the qubit cursor, Space toggles.
    SurfaceCode,
    /// Arrows pick the code distance.
    Chart,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Page => Focus::SurfaceCode,
            Focus::SurfaceCode => Focus::Chart,
            Focus::Chart => Focus::Page,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Page => Focus::Chart,
            Focus::SurfaceCode => Focus::Page,
            Focus::Chart => Focus::SurfaceCode,
        }
    }

    /// Section that hosts the focused diagram.
    pub fn section(self) -> Option<SectionId> {
        match self {
            Focus::Page => None,
            Focus::SurfaceCode => Some(SectionId::Science),
            Focus::Chart => Some(SectionId::Results),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Page => "page",
            Focus::SurfaceCode => "surface code",
            Focus::Chart => "performance",
        }
    }
}

/// Actions that can be triggered from the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    GoTo(SectionId),
    Top,
    ViewPaper,
    Quit,
}

/// Qubits in reading order (left→right, top→bottom) for cursor movement.
pub const CURSOR_ORDER: [DataQubit; 5] = [
    DataQubit::ALL[0],
    DataQubit::ALL[1],
    DataQubit::CENTER,
    DataQubit::ALL[2],
    DataQubit::ALL[3],
];

/// Build the navigation menu tree.
pub fn build_menu_items() -> Vec<MenuItem<MenuAction>> {
    let mut sections: Vec<MenuItem<MenuAction>> = NAV_ENTRIES
        .iter()
        .map(|(label, id)| MenuItem::item(*label, MenuAction::GoTo(*id)))
        .collect();
    sections.insert(0, MenuItem::item("Top", MenuAction::Top));

    vec![
        MenuItem::group("Sections", sections),
        MenuItem::group(
            "Paper",
            vec![MenuItem::item("View Paper", MenuAction::ViewPaper)],
        ),
        MenuItem::group("Exit", vec![MenuItem::item("Quit   ^C", MenuAction::Quit)]),
    ]
}

/// The main TUI application state (TEA model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Which diagram receives keys.
    pub focus: Focus,
    /// Parity toggle diagram.
    pub surface_code: SurfaceCode,
    /// Index into `CURSOR_ORDER`.
    pub qubit_cursor: usize,
    /// Decoding animation.
    pub pipeline: DecoderPipeline,
    /// Comparison chart.
    pub chart: PerformanceChart,
    /// Page scroll offset (rows).
    pub scroll: u16,
    /// Total page height from last layout.
    pub page_height: u16,
    /// Page viewport height (set by renderer).
    pub viewport_height: u16,
    /// Section positions from last layout.
    pub anchors: Anchors,
    /// Section to jump to once the page has been laid out.
    pub pending_section: Option<SectionId>,
    /// Menu bar state (tui-menu).
    pub menu_state: MenuState<MenuAction>,
    /// Whether the menu has keyboard focus (dropdowns visible).
    pub menu_open: bool,
    /// Paper link popup visible.
    pub show_paper: bool,
    pub theme: Theme,
    /// Period of the decoding animation timer.
    pub pipeline_interval: Duration,
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiApp {
    /// Fresh app with built-in defaults.
    pub fn new() -> Self {
        let config = ShowcaseConfig::default();
        Self {
            should_quit: false,
            focus: Focus::Page,
            surface_code: SurfaceCode::new(),
            qubit_cursor: 0,
            pipeline: DecoderPipeline::new(),
            chart: PerformanceChart::new(config.default_distance),
            scroll: 0,
            page_height: 0,
            viewport_height: 0,
            anchors: Anchors::new(),
            pending_section: None,
            menu_state: MenuState::new(build_menu_items()),
            menu_open: false,
            show_paper: false,
            theme: Theme::default(),
            pipeline_interval: config.pipeline_interval(),
        }
    }

    /// App configured from a resolved config.
    pub fn with_config(config: &ShowcaseConfig) -> ShowcaseResult<Self> {
        let mut app = Self::new();
        app.theme = Theme::from_config(&config.theme)?;
        app.chart = PerformanceChart::new(config.default_distance);
        app.pipeline_interval = config.pipeline_interval();
        if config.start_section != SectionId::Hero {
            app.pending_section = Some(config.start_section);
        }
        Ok(app)
    }

    /// Process a message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Input(key) => {
                super::input::handle_key(self, key);
            }
            TuiMessage::Advance => {
                self.pipeline.advance();
            }
            TuiMessage::Render => {
                // Render handled externally by runner
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Navigation bar switches to its filled style once the page moves.
    pub fn scrolled(&self) -> bool {
        self.scroll > SCROLLED_THRESHOLD
    }

    /// Section currently under the navigation bar.
    pub fn current_section(&self) -> Option<SectionId> {
        self.anchors
            .section_at(self.scroll.saturating_add(crate::content::HEADER_OFFSET))
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Jump so the section sits just under the navigation bar. Closes the
    /// menu. Unknown or not-yet-laid-out sections leave the scroll alone.
    pub fn scroll_to_section(&mut self, id: SectionId) {
        self.close_menu();
        match self.anchors.scroll_target(id) {
            Some(target) => self.scroll = target.min(self.max_scroll()),
            None => debug!(section = %id, "scroll target missing, ignored"),
        }
    }

    /// Resolve a deferred startup jump once anchors exist.
    pub fn apply_pending_section(&mut self) {
        if self.anchors.offset_of(SectionId::Hero).is_none() {
            return;
        }
        if let Some(id) = self.pending_section.take() {
            self.scroll_to_section(id);
        }
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.menu_open = true;
            self.menu_state.activate();
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.menu_state.reset();
    }

    /// Apply whatever the menu selected.
    pub fn drain_menu_events(&mut self) {
        let events: Vec<MenuEvent<MenuAction>> = self.menu_state.drain_events().collect();
        for event in events {
            if let MenuEvent::Selected(action) = event {
                self.apply_menu_action(action);
            }
        }
    }

    pub fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::GoTo(id) => self.scroll_to_section(id),
            MenuAction::Top => {
                self.close_menu();
                self.scroll_to_top();
            }
            MenuAction::ViewPaper => {
                self.close_menu();
                self.show_paper = true;
            }
            MenuAction::Quit => self.should_quit = true,
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if let Some(section) = focus.section() {
            self.scroll_to_section(section);
        }
    }

    /// Qubit under the cursor.
    pub fn cursor_qubit(&self) -> DataQubit {
        CURSOR_ORDER[self.qubit_cursor % CURSOR_ORDER.len()]
    }

    pub fn cursor_next(&mut self) {
        self.qubit_cursor = (self.qubit_cursor + 1) % CURSOR_ORDER.len();
    }

    pub fn cursor_prev(&mut self) {
        self.qubit_cursor = (self.qubit_cursor + CURSOR_ORDER.len() - 1) % CURSOR_ORDER.len();
    }

    pub fn toggle_cursor_qubit(&mut self) {
        let q = self.cursor_qubit();
        self.surface_code.toggle(q);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{CodeDistance, Stabilizer};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn laid_out() -> TuiApp {
        let mut app = TuiApp::new();
        app.anchors.insert(SectionId::Hero, 0);
        app.anchors.insert(SectionId::Introduction, 20);
        app.anchors.insert(SectionId::Science, 40);
        app.anchors.insert(SectionId::Results, 90);
        app.page_height = 200;
        app.viewport_height = 30;
        app
    }

    #[test]
    fn app_default_state() {
        let app = TuiApp::new();
        assert!(!app.should_quit);
        assert_eq!(app.focus, Focus::Page);
        assert!(app.surface_code.is_stable());
        assert_eq!(app.pipeline.stage_index(), 0);
        assert_eq!(app.chart.selected(), CodeDistance::D5);
        assert!(!app.scrolled());
    }

    #[test]
    fn app_quit_on_ctrl_c() {
        let mut app = TuiApp::new();
        app.update(TuiMessage::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn app_quit_on_message() {
        let mut app = TuiApp::new();
        app.update(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn advance_moves_pipeline() {
        let mut app = TuiApp::new();
        app.update(TuiMessage::Advance);
        app.update(TuiMessage::Advance);
        assert_eq!(app.pipeline.stage_index(), 2);
    }

    #[test]
    fn scroll_to_section_offsets_header() {
        let mut app = laid_out();
        app.scroll_to_section(SectionId::Science);
        assert_eq!(app.scroll, 40 - crate::content::HEADER_OFFSET);
        assert!(app.scrolled());
        assert_eq!(app.current_section(), Some(SectionId::Science));
    }

    #[test]
    fn scroll_to_missing_section_is_noop() {
        let mut app = laid_out();
        app.scroll = 7;
        app.scroll_to_section(SectionId::Authors);
        assert_eq!(app.scroll, 7);
    }

    #[test]
    fn scroll_clamped_to_page() {
        let mut app = laid_out();
        app.scroll_by(1000);
        assert_eq!(app.scroll, 170);
        app.scroll_by(-1000);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn menu_navigation_closes_menu() {
        let mut app = laid_out();
        app.toggle_menu();
        assert!(app.menu_open);
        app.apply_menu_action(MenuAction::GoTo(SectionId::Introduction));
        assert!(!app.menu_open);
        assert_eq!(app.scroll, 20 - crate::content::HEADER_OFFSET);
    }

    #[test]
    fn menu_toggle_twice_closes() {
        let mut app = TuiApp::new();
        app.toggle_menu();
        app.toggle_menu();
        assert!(!app.menu_open);
    }

    #[test]
    fn view_paper_opens_popup() {
        let mut app = TuiApp::new();
        app.apply_menu_action(MenuAction::ViewPaper);
        assert!(app.show_paper);
    }

    #[test]
    fn pending_section_waits_for_layout() {
        let mut app = TuiApp::new();
        app.pending_section = Some(SectionId::Results);
        app.apply_pending_section();
        assert_eq!(app.pending_section, Some(SectionId::Results));

        app.anchors.insert(SectionId::Hero, 0);
        app.anchors.insert(SectionId::Results, 90);
        app.page_height = 200;
        app.viewport_height = 30;
        app.apply_pending_section();
        assert_eq!(app.pending_section, None);
        assert_eq!(app.scroll, 88);
    }

    #[test]
    fn cursor_wraps_and_toggles() {
        let mut app = TuiApp::new();
        app.cursor_prev();
        assert_eq!(app.cursor_qubit(), DataQubit::ALL[3]);
        app.cursor_next();
        app.cursor_next();
        app.cursor_next();
        assert_eq!(app.cursor_qubit(), DataQubit::CENTER);
        app.toggle_cursor_qubit();
        assert_eq!(app.surface_code.active_stabilizers(), Stabilizer::ALL.to_vec());
    }

    #[test]
    fn focus_cycle() {
        assert_eq!(Focus::Page.next().next().next(), Focus::Page);
        assert_eq!(Focus::Page.prev(), Focus::Chart);
    }

    #[test]
    fn with_config_applies_defaults() {
        let config = ShowcaseConfig {
            pipeline_interval_ms: 500,
            default_distance: CodeDistance::D11,
            start_section: SectionId::Impact,
            ..ShowcaseConfig::default()
        };
        let app = TuiApp::with_config(&config).unwrap();
        assert_eq!(app.chart.selected(), CodeDistance::D11);
        assert_eq!(app.pipeline_interval, Duration::from_millis(500));
        assert_eq!(app.pending_section, Some(SectionId::Impact));
    }
}
