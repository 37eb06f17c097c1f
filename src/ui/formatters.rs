use chrono::{DateTime, Utc};

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Format a byte count in human-readable form (B, KB, MB, GB, TB, PB)
///
/// Picks the first unit in which the value is below 1024, falling through to PB.
/// Always renders one decimal digit: `format_bytes(1536) == "1.5 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;

    for unit in BYTE_UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }

    format!("{:.1} PB", value)
}

/// Format the time elapsed since boot as `2d 3h 5m`, `1h 30m` or `4m`
///
/// Seconds are never shown. A boot time in the future (clock skew) counts as zero.
pub fn format_uptime(boot_time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - boot_time).num_seconds().max(0);

    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Number of filled cells for a bar of `width` cells at `percent`
pub fn bar_fill(percent: f64, width: usize) -> usize {
    // NaN compares false everywhere, treat it as empty
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };

    ((width as f64 * clamped) / 100.0).floor() as usize
}

/// Fixed-width usage bar, e.g. `progress_bar(50.0, 4) == "██░░"`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = bar_fill(percent, width).min(width);
    let empty = width - filled;

    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(empty));
    bar
}
