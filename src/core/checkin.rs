use crate::core::clock::Clock;
use crate::core::photo;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckIn, DrinkType};
use crate::store::KvStore;
use crate::store::records;
use std::path::Path;

/// Resolve a catalog reference: a drink name (case-insensitive) or a
/// 1-based position. Names win, so a drink called "2" is never mistaken
/// for the second entry.
pub fn find_drink<'a>(drinks: &'a [DrinkType], reference: &str) -> AppResult<&'a DrinkType> {
    let reference = reference.trim();

    if let Some(d) = drinks.iter().find(|d| d.name.eq_ignore_ascii_case(reference)) {
        return Ok(d);
    }

    match reference.parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| drinks.get(i))
            .ok_or_else(|| AppError::UnknownDrink(format!("no drink at position {n}"))),
        Err(_) => Err(AppError::UnknownDrink(reference.to_string())),
    }
}

pub struct CheckInLogic;

impl CheckInLogic {
    /// Record a check-in for the selected drink.
    ///
    /// Without a selection nothing happens and `Ok(None)` is returned.
    pub fn submit<S: KvStore, C: Clock>(
        store: &mut S,
        clock: &C,
        selection: Option<&str>,
        notes: Option<String>,
        photo_file: Option<&Path>,
    ) -> AppResult<Option<CheckIn>> {
        let Some(reference) = selection.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        let drinks = records::load_drinks(store)?;
        let drink = find_drink(&drinks, reference)?;

        let photo_data = photo_file.map(photo::encode_data_uri).transpose()?;

        let check_in = CheckIn::new(drink, notes, photo_data, clock.now());
        records::add_check_in(store, check_in.clone())?;

        Ok(Some(check_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::drinks::DrinkLogic;
    use crate::models::drink::DEFAULT_EMOJI;
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::utc(Utc.with_ymd_and_hms(2025, 6, 7, 21, 0, 0).unwrap())
    }

    #[test]
    fn no_selection_is_a_silent_noop() {
        let mut store = MemoryStore::new();
        assert_eq!(CheckInLogic::submit(&mut store, &clock(), None, None, None).unwrap(), None);
        assert_eq!(
            CheckInLogic::submit(&mut store, &clock(), Some("  "), None, None).unwrap(),
            None
        );
        assert!(records::load_check_ins(&store).unwrap().is_empty());
    }

    #[test]
    fn selects_by_position_or_name() {
        let mut store = MemoryStore::new();

        let c = CheckInLogic::submit(&mut store, &clock(), Some("2"), Some("cold".into()), None)
            .unwrap()
            .unwrap();
        assert_eq!(c.drink_name, "IPA");
        assert_eq!(c.units, 1.5);
        assert_eq!(c.notes.as_deref(), Some("cold"));
        assert_eq!(c.timestamp, clock().at);

        let c = CheckInLogic::submit(&mut store, &clock(), Some("stout"), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(c.drink_name, "Stout");

        assert_eq!(records::load_check_ins(&store).unwrap().len(), 2);
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let mut store = MemoryStore::new();
        for r in ["0", "9", "Mead"] {
            assert!(matches!(
                CheckInLogic::submit(&mut store, &clock(), Some(r), None, None),
                Err(AppError::UnknownDrink(_))
            ));
        }
    }

    #[test]
    fn numeric_drink_names_match_by_name_first() {
        let mut store = MemoryStore::new();
        DrinkLogic::add(&mut store, "1664", 1.2, None, DEFAULT_EMOJI).unwrap();
        DrinkLogic::add(&mut store, "2", 3.0, None, DEFAULT_EMOJI).unwrap();

        let c = CheckInLogic::submit(&mut store, &clock(), Some("1664"), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(c.drink_name, "1664");
        assert_eq!(c.units, 1.2);

        let c = CheckInLogic::submit(&mut store, &clock(), Some("2"), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(c.drink_name, "2");
        assert_eq!(c.units, 3.0);

        // positions still work when no name matches
        let c = CheckInLogic::submit(&mut store, &clock(), Some("3"), None, None)
            .unwrap()
            .unwrap();
        assert_eq!(c.drink_name, "Stout");
    }

    #[test]
    fn later_catalog_changes_do_not_rewrite_history() {
        let mut store = MemoryStore::new();
        DrinkLogic::add(&mut store, "House Ale", 2.0, None, DEFAULT_EMOJI).unwrap();
        CheckInLogic::submit(&mut store, &clock(), Some("House Ale"), None, None).unwrap();

        let mut drinks = records::load_drinks(&store).unwrap();
        drinks[4].units = 5.0;
        records::save_drinks(&mut store, &drinks).unwrap();

        let log = records::load_check_ins(&store).unwrap();
        assert_eq!(log[0].units, 2.0);
    }
}
