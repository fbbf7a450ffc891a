//! Command-line entry point.
//!
//! Wires the library together: configuration, tracing, the resource source,
//! the application state and a presenter.
//!
//! # Commands
//!
//! - `build [--out PATH]`: write the landing page HTML (`-` for stdout)
//! - `show`: print the landing page to the terminal
//! - `search <query>`: run one search and print the featured result
//! - `shell`: read queries from stdin (see [`archive_front::app::shell`])

#![allow(clippy::multiple_crate_versions)]

use archive_front::app::{run_shell, TICK_INTERVAL_MS};
use archive_front::infrastructure::default_config_path;
use archive_front::loader::{load_archive, open_source};
use archive_front::observability::init_tracing;
use archive_front::ui::terminal::DEFAULT_COLUMNS;
use archive_front::ui::{apply_actions, HtmlPresenter, TerminalPresenter};
use archive_front::{handle_event, initialize, ArchiveError, ArchiveSnapshot, AppState, Config, Event, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "archive-front",
    version,
    about = "Landing page, featured article and search for a static JSON archive"
)]
struct Cli {
    #[arg(long, global = true, help = "Config file (default: <config dir>/archive-front/config.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Archive directory or http(s) base URL")]
    source: Option<String>,
    #[arg(long, global = true, help = "Tracing filter, e.g. debug or archive_front=trace")]
    trace_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Build {
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,
    },
    Show,
    Search {
        query: String,
    },
    Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("archive-front: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(level) = cli.trace_level {
        config.trace_level = Some(level);
    }
    init_tracing(&config);

    let source = open_source(&config.source)?;
    let snapshot = load_archive(source.as_ref(), &config.resource_paths()).await;
    let mut state = initialize(&config);

    match cli.command {
        Commands::Build { out } => build(&config, &mut state, snapshot, &out).await,
        Commands::Show => show(&config, &mut state, snapshot).await,
        Commands::Search { query } => search(&config, &mut state, snapshot, query).await,
        Commands::Shell => shell(&config, &mut state, snapshot).await,
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) if !path.exists() => Err(ArchiveError::Config(format!(
            "config file {} does not exist",
            path.display()
        ))),
        Some(path) => Config::load(path),
        None => default_config_path().map_or_else(|| Ok(Config::default()), Config::load),
    }
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(DEFAULT_COLUMNS)
}

fn terminal(config: &Config, animate: bool) -> TerminalPresenter<std::io::Stdout> {
    TerminalPresenter::new(std::io::stdout(), config.theme(), &config.topics)
        .with_columns(terminal_columns())
        .with_animation(animate)
}

async fn build(
    config: &Config,
    state: &mut AppState,
    snapshot: Option<ArchiveSnapshot>,
    out: &Path,
) -> Result<()> {
    let mut presenter = HtmlPresenter::new(&config.title, &config.topics, &config.suggestions);
    let actions = handle_event(state, &Event::ArchiveLoaded(snapshot), chrono::Utc::now());
    apply_actions(&mut presenter, &actions).await?;

    let html = presenter.page().to_html()?;
    if out.as_os_str() == "-" {
        let mut stdout = std::io::stdout();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
    } else {
        tokio::fs::write(out, html).await?;
        tracing::info!(path = %out.display(), "wrote landing page");
    }
    Ok(())
}

async fn show(config: &Config, state: &mut AppState, snapshot: Option<ArchiveSnapshot>) -> Result<()> {
    let mut presenter = terminal(config, config.animate_counters);
    presenter.write_header(&config.title)?;
    load_into(state, &mut presenter, snapshot).await
}

async fn search(
    config: &Config,
    state: &mut AppState,
    snapshot: Option<ArchiveSnapshot>,
    query: String,
) -> Result<()> {
    let mut presenter = terminal(config, false);
    let now = chrono::Utc::now();
    handle_event(state, &Event::ArchiveLoaded(snapshot), now);
    if state.snapshot().is_none() {
        return presenter.write_notice("archive unavailable");
    }

    handle_event(state, &Event::QueryChanged(query), now);
    let actions = handle_event(state, &Event::SubmitSearch, now);
    apply_actions(&mut presenter, &actions).await
}

async fn shell(config: &Config, state: &mut AppState, snapshot: Option<ArchiveSnapshot>) -> Result<()> {
    let mut presenter = terminal(config, config.animate_counters);
    presenter.write_header(&config.title)?;
    load_into(state, &mut presenter, snapshot).await?;
    for (i, suggestion) in config.suggestions.iter().enumerate() {
        presenter.write_notice(&format!(":s {}  {}", i + 1, suggestion.label))?;
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_shell(
        state,
        &mut presenter,
        stdin,
        &config.suggestions,
        Duration::from_millis(TICK_INTERVAL_MS),
    )
    .await
}

async fn load_into(
    state: &mut AppState,
    presenter: &mut TerminalPresenter<std::io::Stdout>,
    snapshot: Option<ArchiveSnapshot>,
) -> Result<()> {
    let loaded = snapshot.is_some();
    let actions = handle_event(state, &Event::ArchiveLoaded(snapshot), chrono::Utc::now());
    if !loaded {
        presenter.write_notice("archive unavailable")?;
    }
    apply_actions(presenter, &actions).await
}
