use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EMOJI: &str = "🍺";

/// A catalog entry the user can check in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkType {
    pub name: String,
    pub units: f64,
    pub emoji: String,
}

impl DrinkType {
    /// Build a validated catalog entry.
    /// - `name` must contain something other than whitespace
    /// - `units` must be a positive, finite number
    /// - an empty `emoji` falls back to `default_emoji`
    pub fn new(name: &str, units: f64, emoji: Option<&str>, default_emoji: &str) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidDrink("name must not be empty".into()));
        }

        if !units.is_finite() || units <= 0.0 {
            return Err(AppError::InvalidDrink(format!(
                "units must be a positive number, got {units}"
            )));
        }

        let emoji = match emoji.map(str::trim) {
            Some(e) if !e.is_empty() => e.to_string(),
            _ => default_emoji.to_string(),
        };

        Ok(Self {
            name: name.to_string(),
            units,
            emoji,
        })
    }

    fn builtin(name: &str, units: f64) -> Self {
        Self {
            name: name.to_string(),
            units,
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

/// Catalog returned when nothing has been stored yet.
pub fn default_catalog() -> Vec<DrinkType> {
    vec![
        DrinkType::builtin("Standard Lager", 1.0),
        DrinkType::builtin("IPA", 1.5),
        DrinkType::builtin("Stout", 1.5),
        DrinkType::builtin("Pilsner", 1.0),
    ]
}
