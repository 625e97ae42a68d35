//! Formatting utilities for terminal output

/// Circled number badge for a word's letter count
///
/// Counts from 1 to 20 use the circled digit characters; anything else falls
/// back to a parenthesized number.
#[must_use]
pub fn letter_badge(count: usize) -> String {
    match count {
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
