use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use newstui::api::NewsClient;
use newstui::config::Config;
use newstui::logic::{self, theme::THEME_KEY};
use newstui::model::{Model, ToastKind};
use newstui::services::spawn_news_service;
use newstui::store::PreferenceStore;
use newstui::{handlers, ui, utils, App};

/// News Summarizer TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/newstui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend fetch_news URL (overrides config)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Country code to preselect (us, gb, in, au, jp, fr)
    #[arg(long)]
    country: Option<String>,

    /// Fetch news for the preselected country right after startup
    #[arg(long)]
    fetch: bool,

    /// Enable vim keybindings (j/k)
    #[arg(long)]
    vim: bool,
}

/// Send tracing output to the debug log file; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let log_path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(())
}

/// Determine the config file path with fallback logic
///
/// Unlike an explicit `--config`, the default locations are optional: with
/// no file every setting takes its default.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/newstui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("newstui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn open_store() -> Result<PreferenceStore> {
    match PreferenceStore::new() {
        Ok(store) => Ok(store),
        Err(e) => {
            warn!(error = %e, "preference store unavailable, theme will not persist");
            PreferenceStore::new_in_memory()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        init_logging()?;
    }

    let config_path = get_config_path(args.config)?;
    let mut config = match &config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Override config with CLI flags
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if args.vim {
        config.vim_mode = true;
    }

    let store = open_store()?;
    let stored_theme = store.get(THEME_KEY).unwrap_or_else(|e| {
        warn!(error = %e, "failed to read theme preference");
        None
    });
    let colorfgbg = std::env::var("COLORFGBG").ok();
    let theme = logic::theme::initial_theme(
        stored_theme.as_deref(),
        logic::theme::prefers_dark(colorfgbg.as_deref()),
    );

    let client = NewsClient::with_timeout(
        config.endpoint.clone(),
        config.request_timeout_secs.map(Duration::from_secs),
    )?;
    info!(endpoint = client.endpoint(), "news client ready");
    let (news_tx, news_rx) = spawn_news_service(client);

    let mut model = Model::new(theme, config.vim_mode);
    if let Some(code) = args.country.or_else(|| config.default_country.clone()) {
        match logic::country::index_of(&code) {
            Some(index) => model.ui.country_index = index,
            None => {
                warn!(%code, "unsupported country code");
                model.show_toast(format!("Unsupported country code '{}'", code), ToastKind::Error);
            }
        }
    }

    let mut app = App::new(model, store, news_tx, news_rx, config.resolved_open_command());
    app.set_theme(theme);
    info!("News Summarizer initialized");

    if args.fetch {
        app.fetch_news();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|f| {
            ui::render(f, &app.model, now);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process completed fetches (non-blocking)
        app.drain_news_results();

        // Short poll keeps the spinner and card reveal animations moving
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
