//! Display formatters shared by the summary and the CLI.

/// Format a brew duration: `H:MM:SS` at an hour or more, `M:SS` below.
pub fn format_brew_time(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Coarseness label for a grind size in microns.
pub fn grind_description(microns: u32) -> &'static str {
    match microns {
        0..=400 => "Fine",
        401..=800 => "Medium-Fine",
        801..=1100 => "Medium",
        1101..=1400 => "Medium-Coarse",
        _ => "Coarse",
    }
}

/// Render a dose/water amount, dropping the fraction when whole
/// (doses move in half-gram steps, derived values are whole).
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
