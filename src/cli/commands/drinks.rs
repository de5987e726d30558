use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::drinks::DrinkLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::ui::render;
use crate::utils::units_label;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drinks {
        add,
        name,
        units,
        emoji,
    } = cmd
    {
        let mut store = super::open_store(cfg)?;

        if *add {
            let name = name
                .as_deref()
                .ok_or_else(|| AppError::InvalidDrink("--name is required".into()))?;
            let units =
                units.ok_or_else(|| AppError::InvalidDrink("--units is required".into()))?;

            let drink =
                DrinkLogic::add(&mut store, name, units, emoji.as_deref(), &cfg.default_emoji)?;

            store.audit(
                "drink_add",
                &drink.name,
                &format!("Added {} ({})", drink.name, units_label(drink.units)),
            );
            success(format!(
                "Added {} {} ({})",
                drink.emoji,
                drink.name,
                units_label(drink.units)
            ));
            println!();
        }

        let drinks = DrinkLogic::list(&store)?;
        print!("{}", render::drinks_grid(&drinks));
    }

    Ok(())
}
