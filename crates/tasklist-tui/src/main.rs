use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use tasklist_tui::app::{App, Mode};
use tasklist_tui::config::TuiConfig;
use tasklist_tui::logging;

fn main() -> Result<()> {
    let config = TuiConfig::parse();
    logging::init(config.log_file.as_deref())?;

    let store = config
        .initial_store()
        .context("failed to load initial tasks")?;
    info!(tasks = store.len(), filter = config.filter.as_str(), "tasklist starting");

    let app = App::new(store, config.filter);
    run_tui(app)
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits only from the list; dialogs use it themselves
            if key.code == KeyCode::Char('q') && matches!(app.mode(), Mode::Normal) {
                break;
            }
            app.handle_key(key);
        }
    }

    info!(tasks = app.store().len(), "tasklist exiting");
    Ok(())
}
