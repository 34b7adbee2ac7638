use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::thread;

use super::app::DashboardApp;
use super::event::{Event, EventHandler};
use crate::avatar;
use crate::config::{load_config, resolve_store_path};
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::store::TeamStore;

pub fn run_interactive_mode() -> Result<(), Box<dyn std::error::Error>> {
    log_info("Starting interactive mode");

    let config = load_config();
    let store_path = resolve_store_path(&config);
    let mut store = TeamStore::load(&store_path)?;
    log_debug(&format!(
        "Loaded {} member(s) from {}",
        store.len(),
        store_path.display()
    ));

    // Trace roster changes; stdout belongs to the TUI.
    store.subscribe(|state| {
        log_debug(&format!("Roster now has {} member(s)", state.team_members.len()));
    });

    // Route panics into the log file; raw mode swallows stderr.
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = DashboardApp::new(store, config);
    let events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log_error(&format!("Interactive mode exited with error: {}", e));
    } else {
        log_info("Interactive mode exited cleanly");
    }
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
    events: &EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| super::ui::draw(f, app))?;

        match events.recv()? {
            Event::Key(key_event) => {
                log_debug(&format!("Key pressed: {:?}, Mode: {:?}", key_event.code, app.mode));
                app.handle_key(key_event.code);
            }
            Event::Tick => {
                // Nothing to do; the redraw above keeps the clocks moving.
            }
            Event::AvatarReady(result) => {
                log_debug("Avatar read completed");
                app.on_avatar_ready(result);
            }
        }

        // A committed avatar path kicks off a background read; the result
        // comes back through the event channel whenever it is done.
        if let Some(path) = app.take_pending_avatar() {
            spawn_avatar_read(path, events);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn spawn_avatar_read(path: impl AsRef<Path> + Send + 'static, events: &EventHandler) {
    let sender = events.sender();
    thread::spawn(move || {
        let result = avatar::encode_file(path.as_ref()).map_err(|e| e.to_string());
        // The receiver may be gone if the app quit mid-read.
        let _ = sender.send(Event::AvatarReady(result));
    });
}
