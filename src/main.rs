use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use connect_four::config::{AppConfig, LogConfig};
use connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_appender::non_blocking::WorkerGuard;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override how many pieces in a line win
    #[arg(long)]
    win_length: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        app_config.game.cols = cols;
    }
    if let Some(win_length) = cli.win_length {
        app_config.game.win_length = win_length;
    }
    app_config.validate().context("invalid configuration")?;

    let _guard = init_logging(&app_config.log)?;
    tracing::info!(game = ?app_config.game, "starting");

    run(App::new(app_config.game))
}

/// Route tracing output to a log file; the terminal belongs to the UI.
fn init_logging(log: &LogConfig) -> Result<WorkerGuard> {
    let level = log.level()?;
    let appender = tracing_appender::rolling::never(&log.directory, &log.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")?;
    Ok(guard)
}

fn run(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(err) = &res {
        tracing::error!(%err, "front-end stopped");
    }
    res.context("running terminal UI")
}
