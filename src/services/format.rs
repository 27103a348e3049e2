//! Human-readable rendering of byte counts and timestamps
//!
//! All internal sizes are `u64` bytes; floating point appears only at the
//! display boundary. Formatted strings are lossy and must never be parsed
//! back into sizes.

use chrono::{DateTime, Local};
use std::time::SystemTime;

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const FACTOR: f64 = 1024.0;

/// Format a byte count with two decimal places and a binary unit.
///
/// The unit is chosen by checking the magnitude *before* dividing, so a value
/// just under a boundary is never promoted to the next unit (1023.999 KB
/// stays KB). Values beyond the PB range keep the PB label and the magnitude
/// may exceed 1024.
#[must_use]
pub fn format_bytes(size: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mut value = size as f64;

    for (idx, unit) in UNITS.iter().enumerate() {
        if value < FACTOR || idx == UNITS.len() - 1 {
            return format!("{value:.2} {unit}");
        }
        value /= FACTOR;
    }

    unreachable!("unit list is never exhausted")
}

/// Render a timestamp as local `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}
