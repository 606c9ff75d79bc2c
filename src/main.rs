//! agrodash - an interactive agroindustry dashboard in the terminal
//!
//! Generates a seeded synthetic table of daily crop records and lets the
//! user browse it, filter it, and view it as a stacked bar chart.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::Event;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() -> Result<()> {
    let (config, warning) = Config::resolve();
    if let Some(log_path) = init_logging(&config) {
        log::info!("Starting agrodash, logging to {}", log_path.display());
    }
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config);

    let mut tui = Tui::new()?.with_tick_rate(tick_rate);
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        log::error!("Dashboard stopped: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("Exiting");
    Ok(())
}

/// Send log output to a timestamped file; the terminal belongs to the UI
///
/// Defaults to warnings globally and info for this crate. `RUST_LOG`
/// directives take precedence. Without a writable log directory the
/// dashboard still runs, unlogged.
fn init_logging(config: &Config) -> Option<PathBuf> {
    let (log_file, log_path) = match open_log_file(Path::new(&config.log_dir)) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            return None;
        }
    };

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter_level(log::LevelFilter::Warn)
        .filter_module("agrodash", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    Some(log_path)
}

fn open_log_file(log_dir: &Path) -> Result<(File, PathBuf)> {
    let ts = Local::now().format("%Y%m%d-%H%M%S").to_string();
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join(format!("agrodash-{}.log", ts));
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    Ok((log_file, log_path))
}

fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {}", e);
            }
        })?;

        match tui.next_event()? {
            Some(event) => {
                let action = match event {
                    Event::Key(key) => app.handle_key_event(key)?,
                    Event::Resize(w, h) => Some(Action::Resize(w, h)),
                    _ => None,
                };

                // An action may produce a follow-up action
                let mut current = action;
                while let Some(a) = current {
                    log::debug!("Action: {}", a);
                    current = app.update(a)?;
                }
            }
            None => {
                app.update(Action::Tick)?;
            }
        }
    }

    Ok(())
}
