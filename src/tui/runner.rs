//! TUI runner — main loop that wires everything together.
//!
//! Creates the terminal, mounts the stage timer, runs the TEA loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use crate::widgets::StageTimer;

use super::app::TuiApp;
use super::event::TuiMessage;
use super::layout;

/// Frame period (~30fps).
const RENDER_PERIOD: Duration = Duration::from_millis(33);

/// How long the input thread blocks before checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Forward key presses from crossterm into the loop.
///
/// Runs on the blocking pool; exits once the receiver is gone.
fn spawn_input(tx: mpsc::UnboundedSender<KeyEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press && tx.send(key).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// Drive `app` until it asks to quit.
///
/// The stage timer lives exactly as long as the loop, so the pipeline
/// animation stops advancing the moment the page is torn down.
pub async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut TuiApp,
    mut keys: mpsc::UnboundedReceiver<KeyEvent>,
) -> anyhow::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut timer = StageTimer::start(app.pipeline_interval);
    let mut render_interval = interval(RENDER_PERIOD);

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, app))?;
            }
            Some(()) = timer.tick() => {
                app.update(TuiMessage::Advance);
                debug!(stage = app.pipeline.stage().label(), "pipeline advanced");
            }
            key = keys.recv() => match key {
                Some(key) => app.update(TuiMessage::Input(key)),
                None => app.update(TuiMessage::Quit),
            },
        }

        if app.should_quit {
            break;
        }
    }

    drop(timer);
    Ok(())
}

/// Run the TUI main loop. Blocks until quit.
pub async fn run_tui(mut app: TuiApp) -> anyhow::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    spawn_input(tx);
    info!("page mounted");

    let result = event_loop(&mut terminal, &mut app, rx).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("page closed");
    result
}
