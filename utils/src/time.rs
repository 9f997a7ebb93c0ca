//! Time formatting helpers.

const SEC: u64 = 1000;
const MIN: u64 = 60 * SEC;
const HOUR: u64 = 60 * MIN;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Format a duration in milliseconds to a short human-readable string.
pub fn format_duration(millis: u64) -> String {
    if millis < MIN {
        format!("{}s", millis / SEC)
    } else if millis < HOUR {
        format!("{}m {}s", millis / MIN, (millis % MIN) / SEC)
    } else if millis < DAY {
        format!("{}h {}m", millis / HOUR, (millis % HOUR) / MIN)
    } else if millis < WEEK {
        format!("{}d {}h", millis / DAY, (millis % DAY) / HOUR)
    } else {
        format!("{}w {}d", millis / WEEK, (millis % WEEK) / DAY)
    }
}
