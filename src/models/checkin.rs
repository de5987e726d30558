use super::drink::DrinkType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One consumption event.
///
/// Name and units are copied from the catalog entry when the check-in is
/// created, so later catalog changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub drink_name: String,
    pub units: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_data: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl CheckIn {
    pub fn new(
        drink: &DrinkType,
        notes: Option<String>,
        photo_data: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            drink_name: drink.name.clone(),
            units: drink.units,
            notes: notes.filter(|n| !n.trim().is_empty()),
            photo_data,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drink::DEFAULT_EMOJI;
    use chrono::TimeZone;

    #[test]
    fn copies_drink_by_value() {
        let mut drink = DrinkType::new("IPA", 1.5, None, DEFAULT_EMOJI).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 6, 7, 20, 0, 0).unwrap();
        let c = CheckIn::new(&drink, Some(String::new()), None, at);

        drink.units = 9.0;
        drink.name = "Renamed".into();

        assert_eq!(c.drink_name, "IPA");
        assert_eq!(c.units, 1.5);
        assert_eq!(c.notes, None);
    }

    #[test]
    fn reads_source_record_format() {
        let raw = r#"{"drinkName":"Stout","units":1.5,"notes":"","photoData":null,
                     "timestamp":"2025-06-07T20:15:00.000Z"}"#;
        let c: CheckIn = serde_json::from_str(raw).unwrap();
        assert_eq!(c.drink_name, "Stout");
        assert_eq!(c.photo_data, None);
        assert_eq!(c.timestamp, Utc.with_ymd_and_hms(2025, 6, 7, 20, 15, 0).unwrap());
    }
}
