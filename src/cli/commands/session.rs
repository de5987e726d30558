//! `start`, `end`, `progress` and `stats`.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::engine::SessionEngine;
use crate::errors::AppResult;
use crate::store::records;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::render;
use std::io::{self, Write};

pub fn start(cfg: &Config) -> AppResult<()> {
    let mut store = super::open_store(cfg)?;
    let engine = SessionEngine::new(SystemClock);

    let was_active = super::session_or_inactive(&store).is_active();
    let state = engine.start(&mut store)?;

    let started = state
        .start_time()
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default();

    store.audit("start", "bakdag", &format!("Session started at {started}"));

    if was_active {
        warning(format!("Bakdag restarted: clock reset to {started}"));
    } else {
        success(format!("Bakdag started at {started}. Cheers! 🍻"));
    }

    let check_ins = records::load_check_ins(&store)?;
    println!("{}", render::progress_bar(&engine.compute_progress(&check_ins, &state)));
    Ok(())
}

pub fn end(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let yes = matches!(cmd, Commands::End { yes: true });

    let mut store = super::open_store(cfg)?;

    if !yes && !confirm("Are you sure you want to end this Bakdag?")? {
        info("Bakdag continues.");
        return Ok(());
    }

    SessionEngine::new(SystemClock).end(&mut store)?;
    store.audit("end", "bakdag", "Session ended");
    success("Bakdag ended.");
    Ok(())
}

pub fn progress(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    let engine = SessionEngine::new(SystemClock);

    let state = records::load_session(&store)?;
    let check_ins = records::load_check_ins(&store)?;

    if !state.is_active() {
        info("No bakdag running. Start one with `bakdag start`.");
    }
    println!("{}", render::progress_bar(&engine.compute_progress(&check_ins, &state)));
    Ok(())
}

pub fn stats(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    let engine = SessionEngine::new(SystemClock);

    let state = records::load_session(&store)?;
    let check_ins = records::load_check_ins(&store)?;

    match engine.compute_stats(&check_ins, &state) {
        Some(stats) => {
            header("Bakdag stats");
            print!("{}", render::stats_panel(&stats));
        }
        None => info("No bakdag running. Start one with `bakdag start`."),
    }
    Ok(())
}

fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
