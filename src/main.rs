mod app;
mod events;
mod picker;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};

use app::App;
use events::EventHandler;
use wheelpick::{Config, log};

/// Host loop tick; drives flings, the drag grace period and arming
const TICK: Duration = Duration::from_millis(16);

/// Overrides collected from the command line
#[derive(Debug, Default, PartialEq)]
struct CliOverrides {
    enable_looping: Option<bool>,
    use_12_hours: Option<bool>,
    minute_step: Option<u32>,
}

fn parse_args(args: &[String]) -> CliOverrides {
    let mut overrides = CliOverrides::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--loop" => overrides.enable_looping = Some(true),
            "--no-loop" => overrides.enable_looping = Some(false),
            "--12h" => overrides.use_12_hours = Some(true),
            "--24h" => overrides.use_12_hours = Some(false),
            "--step" | "-s" => {
                match args.get(i + 1).and_then(|s| s.parse::<u32>().ok()) {
                    Some(step) if step > 0 && step < 60 => {
                        overrides.minute_step = Some(step);
                        i += 2;
                        continue;
                    }
                    _ => eprintln!("Warning: --step requires a minute step between 1 and 59"),
                }
            }
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    overrides
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Load config with precedence: CLI > env var > file > default
    let args: Vec<String> = std::env::args().collect();
    let overrides = parse_args(&args);
    let config = Config::load().with_env().with_overrides(
        overrides.enable_looping,
        overrides.use_12_hours,
        overrides.minute_step,
    );
    log::log(&format!("Config: {:?}", config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state around the current time
    let mut app = App::new(config, app::clock_of(&chrono::Local::now()));

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::log(&format!("Final time: {}", app.held_time_label()));
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    app.mount(Instant::now());

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action, Instant::now());
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Event stream error: {}", e));
                    }
                    None => break,
                }
            }
            _ = ticker.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
