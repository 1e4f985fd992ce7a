//! Time and display helpers
//!
//! The core recomputes elapsed times on every read instead of running a
//! timer task, so these helpers are the single place "now" comes from.

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Seconds elapsed since a millisecond timestamp, clamped at zero
pub fn elapsed_secs_since(start_millis: i64, now_millis: i64) -> i64 {
    ((now_millis - start_millis) / 1000).max(0)
}

/// Format an elapsed duration for display
///
/// # Examples
///
/// ```
/// use shared::util::format_elapsed;
///
/// assert_eq!(format_elapsed(42), "42s");
/// assert_eq!(format_elapsed(420), "7m");
/// assert_eq!(format_elapsed(4320), "1h 12m");
/// ```
pub fn format_elapsed(secs: i64) -> String {
    let secs = secs.max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Format an amount in the smallest currency unit with a thousands separator
///
/// # Examples
///
/// ```
/// use shared::util::format_amount;
///
/// assert_eq!(format_amount(190000), "190.000");
/// assert_eq!(format_amount(500), "500");
/// ```
pub fn format_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}
