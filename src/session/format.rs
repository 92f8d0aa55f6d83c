use std::time::Duration;

/// Remaining cooldown for display, rounded up to whole minutes.
///
/// `"N min"` below one hour, `"Hh Mmin"` or `"Hh"` from one hour up.
pub fn format_remaining_time(remaining: Duration) -> String {
    let minutes = remaining.as_millis().div_ceil(60_000);
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{hours}h {rest}min")
    } else {
        format!("{hours}h")
    }
}
