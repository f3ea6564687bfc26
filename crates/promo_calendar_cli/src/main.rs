//! Command-line calendar viewer.
//!
//! # Responsibility
//! - Load promos from a JSON document file and lay them out for one window.
//! - Print the grid as text, or the raw layout as JSON.

mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::info;
use promo_calendar_core::{
    init_logging, parse_local_date, today_local, CalendarConfig, CalendarService, Category,
    JsonFileEventSource, ViewMode,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "promo_calendar", version, about = "Render promos on a week or day grid")]
struct Cli {
    /// JSON array of promo documents.
    #[arg(long)]
    events: Option<PathBuf>,
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// First day in view (YYYY-MM-DD); defaults to today.
    #[arg(long, value_parser = parse_date_arg)]
    date: Option<NaiveDate>,
    /// `week` or `day`.
    #[arg(long)]
    view: Option<ViewMode>,
    /// Show only one category.
    #[arg(long)]
    filter: Option<Category>,
    /// Navigation steps from `--date`; negative goes back.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    shift: i32,
    /// Print the layout as JSON instead of a text grid.
    #[arg(long)]
    json: bool,
    /// Absolute directory for rolling logs.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_local_date(value).map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CalendarConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(events) = cli.events {
        config.events_path = Some(events);
    }
    if let Some(view) = cli.view {
        config.view_mode = view;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(log_dir) = cli.log_dir {
        config.log_dir = Some(log_dir);
    }

    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir).context("starting logging")?;
    }

    let events_path = config
        .events_path
        .clone()
        .context("no events file; pass --events or set PROMO_CALENDAR_EVENTS_PATH")?;
    let today = today_local();
    let mut service = CalendarService::new(
        JsonFileEventSource::new(events_path),
        cli.date.unwrap_or(today),
        config.view_mode,
    );

    if let Err(err) = service.refresh() {
        eprintln!("warning: {err}; showing an empty calendar");
    }

    service.navigate_by(i64::from(cli.shift));
    if let Some(category) = cli.filter {
        service.toggle_filter(category);
    }

    info!(
        "event=cli_render module=cli status=start view={} reference={} json={}",
        service.view_mode().as_str(),
        service.reference_date(),
        cli.json
    );

    if cli.json {
        let layout = serde_json::to_string_pretty(service.layout()).context("encoding layout")?;
        println!("{layout}");
    } else {
        print!("{}", render::render_calendar(&mut service, today));
    }
    Ok(())
}
