//! TUI messages — everything that can change the model.
//!
//! The runner multiplexes:
//! - crossterm keyboard events
//! - the decoder pipeline's stage timer (every 2s by default)
//! - render interval (~30fps, draw frame)
//!
//! and feeds them to `TuiApp::update` as TuiMessages.

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Stage timer fired: advance the decoding animation.
    Advance,
    /// Render: draw a frame.
    Render,
    /// Quit the TUI.
    Quit,
}
