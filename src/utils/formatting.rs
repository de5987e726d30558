//! Formatting utilities used for CLI and export outputs.

use super::colors::paint;

pub fn bold(s: &str) -> String {
    paint("\x1b[1m", s)
}

/// Unit amounts without trailing zeros: `1`, `1.5`, `3.25`.
pub fn format_units(units: f64) -> String {
    let s = format!("{:.2}", units);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `1 unit`, `1.5 units`.
pub fn units_label(units: f64) -> String {
    let suffix = if units == 1.0 { "" } else { "s" };
    format!("{} unit{}", format_units(units), suffix)
}

pub fn format_pace(pace: f64) -> String {
    format!("{:.2}", pace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_labels() {
        assert_eq!(units_label(1.0), "1 unit");
        assert_eq!(units_label(1.5), "1.5 units");
        assert_eq!(units_label(2.0), "2 units");
        assert_eq!(format_units(3.25), "3.25");
        assert_eq!(format_units(0.0), "0");
    }
}
