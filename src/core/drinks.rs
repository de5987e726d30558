use crate::errors::AppResult;
use crate::models::DrinkType;
use crate::store::KvStore;
use crate::store::records;

pub struct DrinkLogic;

impl DrinkLogic {
    pub fn list<S: KvStore>(store: &S) -> AppResult<Vec<DrinkType>> {
        records::load_drinks(store)
    }

    /// Validate and append a new catalog entry.
    pub fn add<S: KvStore>(
        store: &mut S,
        name: &str,
        units: f64,
        emoji: Option<&str>,
        default_emoji: &str,
    ) -> AppResult<DrinkType> {
        let drink = DrinkType::new(name, units, emoji, default_emoji)?;

        let mut drinks = records::load_drinks(store)?;
        drinks.push(drink.clone());
        records::save_drinks(store, &drinks)?;

        Ok(drink)
    }
}
