// Calendar Grid
// Command-line driver for inspecting layouts and reschedules of an event file

mod cli;

use anyhow::{anyhow, Context, Result};
use calendar_grid::models::event::Event;
use calendar_grid::models::settings::Settings;
use calendar_grid::models::ui::ViewKind;
use calendar_grid::services::geometry::events_for_date;
use calendar_grid::services::layout::LayoutEngine;
use calendar_grid::services::reschedule::RescheduleController;
use calendar_grid::services::settings::SettingsService;
use clap::Parser;
use std::path::{Path, PathBuf};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config)?;

    match cli.command {
        Commands::Layout { events, date } => {
            let mut events = read_events(&events)?;
            if let Some(date) = date {
                events = events_for_date(&events, date);
            }

            log::info!("Laying out {} events", events.len());
            let placements = LayoutEngine::new(settings.layout.clone()).layout(&events);
            println!("{}", serde_json::to_string_pretty(&placements)?);
        }
        Commands::Reschedule {
            events: path,
            event_id,
            date,
            pointer_y,
            view,
        } => {
            let events = read_events(&path)?;
            let event = events
                .iter()
                .find(|event| event.id == event_id)
                .ok_or_else(|| anyhow!("event {} not found in {}", event_id, path.display()))?;

            let controller = RescheduleController::new(ViewKind::from(view), settings.grid.clone());
            let session = controller.begin_drag(event, 0.0)?;
            let track = controller.track_at(0.0, 0.0);
            let intent = controller.commit_drop(&session, date, pointer_y, Some(&track));
            println!("{}", serde_json::to_string_pretty(&intent)?);
        }
        Commands::Snap {
            pointer_y,
            top_y,
            scroll_offset,
        } => {
            let controller = RescheduleController::new(ViewKind::Day, settings.grid.clone());
            let track = controller.track_at(top_y, scroll_offset);
            match controller.compute_snapped_time(pointer_y, Some(&track)) {
                Some(time) => println!("{:02}:{:02}", time.hour, time.minute),
                None => println!("no time under pointer"),
            }
        }
    }

    Ok(())
}

fn load_settings(config: Option<PathBuf>) -> Result<Settings> {
    let service = match config {
        Some(path) => SettingsService::new(path),
        None => match SettingsService::from_default_location() {
            Ok(service) => service,
            Err(err) => {
                log::warn!("{:#}; using default settings", err);
                return Ok(Settings::default());
            }
        },
    };
    service.load()
}

fn read_events(path: &Path) -> Result<Vec<Event>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse events in {}", path.display()))
}
