use std::process;
use anyhow::Result;
use chrono::{Local, Utc};
use clap::Parser;
use log::{error, info, warn};
use crate::cli::{Cli, Command, LockState, MemoCommand, WallpaperCommand};
use crate::config::{load_config, Config};
use crate::dashboard::{refresh, refresh_offline, render_show, WeatherReport};
use crate::initialization::{init, Mgr};
use crate::logging::setup_logger;

mod air_quality;
mod carousel;
mod cli;
mod config;
mod dashboard;
mod errors;
mod forecast_summary;
mod initialization;
mod logging;
mod manager_owm;
mod models;
mod session;
mod store;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config {}: {}", cli.config, e);
            process::exit(1);
        }
    };

    if let Err(e) = setup_logger(&config.general) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = run(&config, cli.dry_run, cli.command.unwrap_or(Command::Show { unlock: false })) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config, dry_run: bool, command: Command) -> Result<()> {
    let mut mgr = init(config, dry_run)?;

    match command {
        Command::Show { unlock } => show(config, &mgr, unlock),
        Command::Memo(cmd) => memo(&mut mgr, cmd),
        Command::Wallpaper(cmd) => wallpaper(&mut mgr, cmd),
        Command::Lock { state } => {
            let enabled = matches!(state, LockState::On);
            mgr.session.set_lock_enabled(mgr.store.as_mut(), enabled)?;
            info!("lock screen {}", if enabled { "enabled" } else { "disabled" });
            println!("Lock screen {}", if enabled { "enabled" } else { "disabled" });
            Ok(())
        }
    }
}

fn show(config: &Config, mgr: &Mgr, unlock: bool) -> Result<()> {
    let now = Local::now();
    let screen = render_show(&now, &mgr.session, &mgr.carousel, unlock, || acquire_weather(config, mgr));
    println!("{}", screen);

    Ok(())
}

/// Weather problems never stop the dashboard, they are logged and the weather part is left out
fn acquire_weather(config: &Config, mgr: &Mgr) -> Option<WeatherReport> {
    let result = if let Some(file) = &config.weather.forecast_file {
        refresh_offline(file, &Local)
    } else if let Some(owm) = &mgr.owm {
        refresh(owm, &config.geo_ref, &Local)
    } else {
        return None;
    };

    match result {
        Ok(report) => Some(report),
        Err(e) => {
            warn!("weather not available: {}", e);
            None
        }
    }
}

fn memo(mgr: &mut Mgr, command: MemoCommand) -> Result<()> {
    match command {
        MemoCommand::Add { text } => {
            match mgr.session.add_memo(mgr.store.as_mut(), &text, Utc::now())? {
                Some(memo) => println!("Added memo {}", memo.id),
                None => println!("Empty memo ignored"),
            }
        }
        MemoCommand::Delete { id } => {
            mgr.session.delete_memo(mgr.store.as_mut(), &id)?;
            println!("Deleted memo {}", id);
        }
        MemoCommand::Select { id } => {
            match mgr.session.select_memo(mgr.store.as_mut(), &id)? {
                Some(selected) => println!("Pinned memo {}", selected),
                None => println!("Unpinned memo {}", id),
            }
        }
        MemoCommand::List => {
            for m in mgr.session.memos() {
                let pin = if mgr.session.selected_memo_id() == Some(m.id.as_str()) { "*" } else { " " };
                println!("{} {} {}", pin, m.id, m.content);
            }
        }
    }

    Ok(())
}

fn wallpaper(mgr: &mut Mgr, command: WallpaperCommand) -> Result<()> {
    match command {
        WallpaperCommand::Add { uris } => {
            mgr.session.add_wallpapers(mgr.store.as_mut(), &uris)?;
            println!("Added {} wallpaper(s)", uris.len());
        }
        WallpaperCommand::Remove { uris } => {
            let removed = mgr.session.remove_wallpapers(mgr.store.as_mut(), &uris)?;
            println!("Removed {} wallpaper(s)", removed);
        }
        WallpaperCommand::List => {
            for (i, uri) in mgr.session.wallpapers().iter().enumerate() {
                println!("{:>3} {}", i, uri);
            }
        }
        WallpaperCommand::Locate { uri } => {
            match mgr.carousel.resolve_target(mgr.session.wallpapers(), &uri) {
                Some(target) => println!("{}", target),
                None => println!("Wallpaper not found: {}", uri),
            }
        }
    }

    Ok(())
}
