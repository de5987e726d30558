/// ANSI color helper utilities for terminal output.
/// Every helper returns plain text when `NO_COLOR` is set.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Wrap `value` in `color` (any ANSI prefix) and a reset.
pub fn paint(color: &str, value: &str) -> String {
    paint_if(colors_enabled(), color, value)
}

fn paint_if(enabled: bool, color: &str, value: &str) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey for placeholder values ("--:--", "0"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "0" || v == "0.00" {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}

/// Progress colour: green once the target is reached, yellow past half.
pub fn color_for_percentage(pct: f64) -> &'static str {
    if pct >= 100.0 {
        GREEN
    } else if pct >= 50.0 {
        YELLOW
    } else {
        CYAN
    }
}
