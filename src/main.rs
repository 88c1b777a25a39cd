use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::filter::LevelFilter;

use walletdash::app::{App, StatusLevel};
use walletdash::config;
use walletdash::core::Context;
use walletdash::domain::WalletSource;
use walletdash::store::{KeyValueStore, MemoryStore, SqliteStore};
use walletdash::{input, logger, ui};

#[derive(Debug, Parser)]
#[command(
    name = "walletdash",
    version,
    about = "Terminal dashboard for threshold signature wallet contracts"
)]
struct Args {
    /// JSON file holding the wallet list (e.g. [{"walletAdress": "0x.."}])
    #[arg(long)]
    wallets: Option<PathBuf>,

    /// Session database path
    #[arg(long)]
    store: Option<PathBuf>,

    /// Terminal width at which tabs go side by side
    #[arg(long)]
    breakpoint: Option<u16>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_warning) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err.to_string())),
    };

    let env_level =
        logger::parse_log_level().map_err(|e| anyhow::anyhow!("invalid LOG_LEVEL: {e}"))?;
    let log_level = match env_level {
        Some(level) => level,
        None => config.log_level()?.unwrap_or(LevelFilter::INFO),
    };
    if let Some(log_path) = config::log_path() {
        logger::setup_logger(log_level, &log_path)
            .with_context(|| format!("set up log file {}", log_path.display()))?;
    }
    tracing::info!("starting walletdash {}", env!("CARGO_PKG_VERSION"));
    if let Some(warning) = config_warning.as_deref() {
        tracing::warn!("using default config: {warning}");
    }

    let (store, store_warning) = open_store(args.store.clone().or_else(|| config.store_path()));
    let mut app = App::new(Context::new(store));
    app.breakpoint = args.breakpoint.unwrap_or_else(|| config.breakpoint());
    app.source = args
        .wallets
        .clone()
        .or_else(|| config.wallets_path())
        .map(WalletSource::new);
    if app.source.is_some() {
        app.reload();
    } else {
        app.set_status("No wallet source: pass --wallets <file>", StatusLevel::Warn);
    }
    if let Some(warning) = config_warning {
        app.set_status(format!("Config ignored: {warning}"), StatusLevel::Warn);
    }
    if let Some(warning) = store_warning {
        app.set_status(warning, StatusLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn open_store(path: Option<PathBuf>) -> (Box<dyn KeyValueStore>, Option<String>) {
    let Some(path) = path else {
        return (Box::new(MemoryStore::new()), None);
    };
    match SqliteStore::open(&path) {
        Ok(store) => (Box::new(store), None),
        Err(err) => {
            tracing::warn!("session db disabled: {err}");
            (
                Box::new(MemoryStore::new()),
                Some(format!("Session DB disabled: {err}")),
            )
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        input::handle_mouse(&mut app, mouse, size);
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect::new(0, 0, width, height))
}
