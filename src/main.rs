mod app;
mod carousel;
mod config;
mod error;
mod events;
mod feed;
mod log;
mod scroll;
mod tui;
mod viewport;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use app::App;
use config::Config;
use events::EventHandler;

/// Command-line options
#[derive(Debug, Default)]
struct Args {
    feed: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--feed" | "-f" | "--config" | "-c") => {
                if i + 1 < args.len() {
                    let path = PathBuf::from(&args[i + 1]);
                    match flag {
                        "--feed" | "-f" => parsed.feed = Some(path),
                        _ => parsed.config = Some(path),
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: {} requires a path argument", flag);
                }
            }
            arg => {
                eprintln!("Warning: ignoring unknown argument '{}'", arg);
            }
        }
        i += 1;
    }

    parsed
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args = parse_args();

    // Config precedence: CLI > env var > file > default
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .with_overrides(args.feed);

    let feed_path = config.feed_path();
    let sightings = App::load_feed(feed_path.as_deref()).with_context(|| match &feed_path {
        Some(path) => format!("loading feed {}", path.display()),
        None => "loading built-in feed".to_string(),
    })?;
    log::log(&format!("Loaded {} sightings", sightings.len()));

    let mut app = App::new(&config, sightings, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    terminal.draw(|frame| tui::ui::render(frame, app))?;
    app.layout_ready(Instant::now());

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        let wakeup = app.next_wakeup(Instant::now());

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action, Instant::now());
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Terminal event error: {}", e));
                    }
                    None => break,
                }
            }

            // Timers and animation frames
            _ = tokio::time::sleep_until(wakeup.into()) => {}
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
