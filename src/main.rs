use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use alphaqubit::config::ShowcaseConfig;
use alphaqubit::content::SectionId;
use alphaqubit::tui::app::TuiApp;
use alphaqubit::tui::{page, runner};

/// Width used for `--print`.
const PRINT_WIDTH: u16 = 100;

#[derive(Parser)]
#[command(
    name = "alphaqubit",
    about = "AlphaQubit: AI for quantum error correction, in the terminal."
)]
struct Cli {
    /// Config file (defaults to .alphaqubit/config.yaml, then ~/.alphaqubit/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Section to open at (hero, introduction, science, decoder, results, impact, authors, footer)
    #[arg(short, long)]
    section: Option<SectionId>,

    /// Decoding pipeline stage period in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Write logs here instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the page as plain text and exit
    #[arg(long)]
    print: bool,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive("alphaqubit=info".parse()?),
                )
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            // stderr shares the terminal with the page; keep it quiet.
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive("alphaqubit=warn".parse()?),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let mut config = match &cli.config {
        Some(path) => ShowcaseConfig::from_file(path)?,
        None => ShowcaseConfig::load(),
    };
    if let Some(ms) = cli.interval_ms {
        config.pipeline_interval_ms = ms;
    }
    if let Some(section) = cli.section {
        config.start_section = section;
    }

    let app = TuiApp::with_config(&config)?;
    info!(
        interval_ms = app.pipeline_interval.as_millis() as u64,
        start = %config.start_section,
        "AlphaQubit starting"
    );

    if cli.print {
        print!("{}", page::layout_page(&app, PRINT_WIDTH).to_plain_text());
        return Ok(());
    }

    runner::run_tui(app).await
}
