use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use medcomplete::app::App;
use medcomplete::autocomplete::{AutocompleteView, Placeholder};
use medcomplete::config::{self, AutocompleteConfig};
use medcomplete::error::AppError;
use medcomplete::lookup::{LookupClient, SuggestionSource};
use medcomplete::markup::HtmlView;
use medcomplete::query::Query;

/// Longest wait for a terminal event before running timers again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[cfg(debug_assertions)]
const LOG_ENV: &str = "MEDCOMPLETE_LOG";

/// Debounced medicine-name autocomplete in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Suggestion endpoint, queried as <ENDPOINT>?q=<QUERY>
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Minimum query length before suggestions are fetched
    #[arg(long, global = true)]
    min_chars: Option<usize>,

    /// Quiet period after the last keystroke before fetching, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Config file to use instead of ~/.config/medcomplete/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch suggestions once and print them, one per line
    Lookup {
        query: String,

        /// Print the dropdown markup instead of plain lines
        #[arg(long)]
        html: bool,
    },
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    log::debug!("Using endpoint {}", config.endpoint);

    match cli.command {
        Some(Command::Lookup { query, html }) => run_lookup(&config, &query, html),
        None => run_interactive(&config),
    }
}

/// Load the config file and apply command-line overrides
fn resolve_config(cli: &Cli) -> Result<AutocompleteConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    let autocomplete = &mut config.autocomplete;
    if let Some(endpoint) = &cli.endpoint {
        autocomplete.endpoint = endpoint.clone();
    }
    if let Some(min_chars) = cli.min_chars {
        autocomplete.min_chars = min_chars;
    }
    if let Some(debounce_ms) = cli.debounce_ms {
        autocomplete.debounce_ms = debounce_ms;
    }

    config::validate(&config)?;
    Ok(config.autocomplete)
}

fn run_lookup(config: &AutocompleteConfig, raw: &str, html: bool) -> Result<()> {
    // Too short to look up: print nothing, like the dropdown staying closed
    let Some(query) = Query::parse(raw, config.min_chars) else {
        return Ok(());
    };

    let client = LookupClient::from_config(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let suggestions = runtime.block_on(client.fetch(query.as_str()))?;

    let mut stdout = io::stdout().lock();
    if html {
        let mut view = HtmlView::new();
        if suggestions.is_empty() {
            view.show_placeholder(Placeholder::Empty);
        } else {
            view.show_suggestions(query.as_str(), &suggestions);
        }
        writeln!(stdout, "{}", view.markup())?;
    } else {
        for suggestion in &suggestions {
            writeln!(stdout, "{}", suggestion)?;
        }
    }

    Ok(())
}

fn run_interactive(config: &AutocompleteConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|_| run(terminal, &mut app));

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;

    if let Some(text) = app.submitted() {
        println!("{}", text);
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now(), EVENT_POLL_INTERVAL))? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send debug logs to a file when MEDCOMPLETE_LOG is set, so they never land
/// on the terminal the UI is drawing to
#[cfg(debug_assertions)]
fn init_logging() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }

    let path = std::env::temp_dir().join("medcomplete.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter(LOG_ENV))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
