//! Elapsed-time formatting for command summaries

use std::time::Duration;

/// Render a duration the way the terminal footer shows it.
///
/// Sub-millisecond runs collapse to "<1ms"; anything under a second is
/// reported in whole milliseconds, under a minute in fractional seconds,
/// and longer runs as minutes and seconds.
pub fn human_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else if total_secs >= 1 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        match duration.as_millis() {
            0 => "<1ms".to_string(),
            ms => format!("{}ms", ms),
        }
    }
}
