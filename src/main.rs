use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, time::Duration};
use tokio::sync::mpsc::UnboundedReceiver;

mod handlers;

use topsites::config::{self, Config};
use topsites::intl::Messages;
use topsites::model::{self, Link};
use topsites::services::{spawn_store_service, StoreDispatcher, StoreSnapshot};
use topsites::store::{NavigationRequest, TopSitesStore};
use topsites::ui::{
    self,
    icons::{IconMode, IconRenderer, IconTheme},
};
use topsites::{utils, TileMode};

/// Top Sites tile grid for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (topsites-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// JSON file with link rows (overrides the config)
    #[arg(short, long)]
    links: Option<String>,

    /// Number of slots to show
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Start in edit mode
    #[arg(short, long)]
    edit: bool,
}

pub struct App {
    pub model: model::Model,

    /// Latest rows published by the store
    rows: Vec<Link>,
    dispatcher: StoreDispatcher,
    snapshot_rx: UnboundedReceiver<StoreSnapshot>,

    icon_renderer: IconRenderer,
    messages: Messages,
    open_command: Option<String>,
    private_open_command: Option<String>,
}

impl App {
    /// Build the app and start the store service (needs a tokio runtime)
    fn new(config: Config, links: Vec<Link>) -> Self {
        let model = model::Model::new(config.top_sites_count, config.vim_mode);
        let (dispatcher, snapshot_rx) = spawn_store_service(TopSitesStore::new(links.clone()));

        if model.grid.count == 0 {
            log::warn!("top_sites_count is 0, nothing will be shown");
        }

        Self {
            model,
            rows: links,
            dispatcher,
            snapshot_rx,
            icon_renderer: IconRenderer::new(
                IconMode::from_config(&config.icon_mode),
                IconTheme::default(),
            ),
            messages: Messages::with_overrides(config.messages),
            open_command: config.open_command,
            private_open_command: config.private_open_command,
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }

    /// Apply a snapshot published by the store
    fn handle_snapshot(&mut self, snapshot: StoreSnapshot) {
        self.rows = snapshot.rows;
        self.model.ui.store_stats = snapshot.stats;
        self.model.ui.last_action = Some(format!(
            "{} @ {}",
            snapshot.action,
            chrono::Local::now().format("%H:%M:%S")
        ));

        // A menu whose tile disappeared (blocked, deleted) is closed
        if let Some(index) = self.model.grid.interaction.open_tile() {
            if index >= self.rows.len() {
                self.model.grid.interaction.show_context_menu = false;
            }
        }

        match snapshot.navigation {
            Some(NavigationRequest::NewWindow(url)) => self.open_url(&url, false),
            Some(NavigationRequest::PrivateWindow(url)) => self.open_url(&url, true),
            None => {}
        }
    }

    /// Hand `url` to the configured open command
    fn open_url(&mut self, url: &str, private: bool) {
        let command = if private {
            self.private_open_command.as_ref()
        } else {
            self.open_command.as_ref()
        };
        let Some(open_cmd) = command else {
            let key = if private {
                "private_open_command"
            } else {
                "open_command"
            };
            self.model.show_toast(format!("Error: {} not configured", key));
            return;
        };

        // Spawn, don't wait, so browsers don't block the TUI
        let result = std::process::Command::new(open_cmd)
            .arg(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();

        match result {
            Ok(_child) => {
                log::debug!("open_command: spawned {} {}", open_cmd, url);
                let prefix = if private { "Opening privately" } else { "Opening" };
                self.model.show_toast(format!("{}: {}", prefix, url));
            }
            Err(e) => {
                log::warn!("Failed to execute open command '{}': {}", open_cmd, e);
                self.model
                    .show_toast(format!("Error: Failed to open with '{}'", open_cmd));
            }
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit `--config` must exist; otherwise a missing file means
/// built-in defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/topsites/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("topsites").join("config.yaml");
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

/// Route log records to the debug log file
fn init_debug_logging() -> Result<()> {
    let path = utils::get_debug_log_path();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.debug {
        init_debug_logging()?;
        log::debug!("Debug mode enabled");
    }

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(config_path) => {
            log::debug!("Loading config from: {:?}", config_path);
            let config_str = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Config::from_yaml(&config_str)?
        }
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(count) = args.count {
        config.top_sites_count = count;
    }
    if let Some(links) = args.links {
        config.links_path = Some(links);
    }

    let links = match &config.links_path {
        Some(path) => config::load_links(std::path::Path::new(path))?,
        None => std::mem::take(&mut config.links),
    };
    log::debug!("Loaded {} links", links.len());

    // Initialize app
    let mut app = App::new(config, links);
    if args.edit {
        app.model.grid.mode = TileMode::Edit;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(
                f,
                &mut app.model,
                &app.rows,
                &app.icon_renderer,
                &app.messages,
            );
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process store snapshots (non-blocking)
        while let Ok(snapshot) = app.snapshot_rx.try_recv() {
            app.handle_snapshot(snapshot);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }

        // Let the store task run before the next frame
        tokio::task::yield_now().await;
    }

    Ok(())
}
