//! `itemkeep` — terminal UI for a personal item list.
//!
//! # Usage
//!
//! ```
//! itemkeep --db ~/items.db
//! itemkeep --config ~/.config/itemkeep/config.toml --log-file /tmp/itemkeep.log
//! ```

mod app;
mod ui;

use std::{
  fs::File,
  io,
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use itemkeep_core::ItemController;
use itemkeep_store_sqlite::SqliteStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_DB_PATH: &str = "items.db";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "itemkeep", version, about = "Terminal UI for a personal item list")]
struct Args {
  /// Path to a TOML config file (db_path, log_file).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite database file (default: items.db).
  #[arg(long, env = "ITEMKEEP_DB", value_name = "PATH")]
  db: Option<PathBuf>,

  /// Write logs to this file. Logging is off when unset.
  #[arg(long, env = "ITEMKEEP_LOG", value_name = "PATH")]
  log_file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  db_path:  Option<PathBuf>,
  log_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let db_path = args
    .db
    .or(file_cfg.db_path)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
  let db_path = expand_tilde(&db_path);

  if let Some(log_path) = args.log_file.or(file_cfg.log_file) {
    init_tracing(&expand_tilde(&log_path))?;
  }

  // One connection for the life of the process.
  let store = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("failed to open store at {}", db_path.display()))?;

  let mut controller = ItemController::new(store);
  controller
    .initialize()
    .await
    .context("initializing item store")?;
  tracing::info!(path = %db_path.display(), "item store ready");

  let mut app = App::new(controller);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Route `tracing` output to `path`; stdout belongs to the terminal UI.
fn init_tracing(path: &Path) -> Result<()> {
  let file = File::options()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Arc::new(file))
    .init();
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<SqliteStore>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event {
      let cont = app.handle_key(key).await?;
      if !cont {
        break;
      }
    }
  }

  Ok(())
}
