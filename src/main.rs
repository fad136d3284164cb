use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, TimeZone, Utc};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use multicall_devtools::app::App;
use multicall_devtools::config::{self, TimeZoneSetting};
use multicall_devtools::domain::{Message, Reducer};
use multicall_devtools::{feed, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "mcdev",
    version,
    about = "Inspect recorded multicall devtools messages as a timeline"
)]
struct Args {
    /// Message feed (JSON array or one message per line). Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Print the final state as JSON instead of opening the viewer
    #[arg(long)]
    json: bool,

    /// Time zone for event times: local, utc or an offset like +02:00
    #[arg(long)]
    timezone: Option<String>,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();

    let log_path = args.log_file.clone().or_else(|| config.log_path());
    if let Some(path) = log_path {
        if let Err(err) = logging::init(&path, config.log_filter.as_deref()) {
            eprintln!("logging disabled: {err:#}");
        }
    }

    let zone = match args.timezone.as_deref() {
        Some(value) => TimeZoneSetting::parse(value)
            .with_context(|| format!("unrecognized time zone {value:?}"))?,
        None => config.timezone(),
    };

    let messages = load_messages(args.input.as_ref())?;
    tracing::info!(count = messages.len(), "loaded message feed");

    match zone {
        TimeZoneSetting::Local => run(Reducer::new(Local), messages, args.json),
        TimeZoneSetting::Utc => run(Reducer::new(Utc), messages, args.json),
        TimeZoneSetting::Fixed(offset) => run(Reducer::new(offset), messages, args.json),
    }
}

fn load_messages(input: Option<&PathBuf>) -> Result<Vec<Message>> {
    match input {
        Some(path) if path.as_os_str() != "-" => feed::load_path(path)
            .with_context(|| format!("load feed {}", path.display())),
        _ => feed::load_reader(io::stdin().lock()).context("load feed from stdin"),
    }
}

fn run<Tz: TimeZone>(reducer: Reducer<Tz>, messages: Vec<Message>, json: bool) -> Result<()> {
    let mut app = App::new(reducer);
    app.apply(&Message::replay(messages));

    if json {
        let out = serde_json::to_string_pretty(app.state().as_ref())?;
        println!("{out}");
        return Ok(());
    }

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        restore_terminal,
    )?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

/// Runs `setup`, calling `restore` when it fails.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    let res = setup();
    if res.is_err() {
        restore();
    }
    res
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn run_app<B: ratatui::backend::Backend, Tz: TimeZone>(
    terminal: &mut Terminal<B>,
    mut app: App<Tz>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores() {
        let restored = Cell::new(false);
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no tty")),
            || restored.set(true),
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let value = setup_or_restore(|| Ok(7), || restored.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
