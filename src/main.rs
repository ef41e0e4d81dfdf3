//! agenda - A terminal address book
//!
//! This is the main entry point for the agenda application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::services::{ContactController, ContactStore, JsonFileStore, MemoryStore};
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use flexi_logger::LoggerHandle;
use log::error;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(Config::load());

    if cli.write_config {
        config.save()?;
    }

    // Logging is optional; the address book works without it
    let logger = match Config::log_dir() {
        Some(dir) => match logging::init_logging(&config.log_level, &dir) {
            Ok(handle) => Some(handle),
            Err(err) => {
                eprintln!("Warning: file logging disabled: {:#}", err);
                None
            }
        },
        None => None,
    };

    // Open the store before touching the terminal so errors print normally
    let store: Box<dyn ContactStore> = if cli.in_memory {
        Box::new(MemoryStore::new())
    } else {
        match config.data_path().and_then(|path| Ok(JsonFileStore::open(path)?)) {
            Ok(store) => Box::new(store),
            Err(err) => {
                error!("event=store_open status=error error={:#}", err);
                eprintln!("Error: {:#}", err);
                exit_with_error(logger.as_ref());
            }
        }
    };

    let mut app = App::new(ContactController::new(store), config.toast_duration());

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!("event=app_exit status=error error={:#}", err);
        eprintln!("Error: {:?}", err);
        exit_with_error(logger.as_ref());
    }

    Ok(())
}

/// Exit with status 1, flushing buffered log records first
fn exit_with_error(logger: Option<&LoggerHandle>) -> ! {
    if let Some(handle) = logger {
        handle.flush();
    }
    std::process::exit(1)
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("event=draw status=error error={}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
