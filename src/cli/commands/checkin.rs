use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckInLogic;
use crate::core::clock::SystemClock;
use crate::core::engine::SessionEngine;
use crate::errors::AppResult;
use crate::store::records;
use crate::ui::messages::{success, warning};
use crate::ui::render;
use crate::utils::units_label;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        drink,
        notes,
        photo,
    } = cmd
    {
        let mut store = super::open_store(cfg)?;
        let engine = SessionEngine::new(SystemClock);

        let Some(check_in) = CheckInLogic::submit(
            &mut store,
            engine.clock(),
            drink.as_deref(),
            notes.clone(),
            photo.as_deref().map(Path::new),
        )?
        else {
            return Ok(());
        };

        let state = super::session_or_inactive(&store);
        if !state.is_active() {
            warning("No bakdag running: this check-in will not show up in progress until you start one.");
        }

        store.audit(
            "checkin",
            &check_in.drink_name,
            &format!(
                "{} checked in{}",
                units_label(check_in.units),
                if check_in.photo_data.is_some() { " with photo" } else { "" }
            ),
        );
        success(format!(
            "Checked in {} ({})",
            check_in.drink_name,
            units_label(check_in.units)
        ));

        let check_ins = records::load_check_ins(&store)?;
        println!("{}", render::progress_bar(&engine.compute_progress(&check_ins, &state)));
    }

    Ok(())
}
