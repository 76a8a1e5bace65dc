use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

// 第一段 ASCII 數字，之後第一個出現的 hour / minute（不分大小寫）
static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+).*?(hour|minute)").expect("duration pattern is a valid regex")
});

/// Extracts a timeout such as `30 * time.Minute` or `Default `2 hours`` from one line.
///
/// Best effort: a line without a recognizable duration, or one whose value
/// exceeds what a signed 64-bit nanosecond count can hold, yields [`Duration::ZERO`].
pub fn extract_duration(line: &str) -> Duration {
    let Some(caps) = DURATION_PATTERN.captures(line) else {
        return Duration::ZERO;
    };

    let unit = caps[2].to_ascii_lowercase();
    let token = format!("{}{}", &caps[1], &unit[..1]);

    match parse_token(&token) {
        Some(duration) => duration,
        None => {
            tracing::debug!("Unable to parse duration expression '{}'", token);
            Duration::ZERO
        }
    }
}

/// Parses a compact `<digits>h` / `<digits>m` token.
fn parse_token(token: &str) -> Option<Duration> {
    let (digits, unit) = token.split_at(token.len().checked_sub(1)?);
    let value: u64 = digits.parse().ok()?;
    let seconds_per_unit = match unit {
        "h" => 3600,
        "m" => 60,
        _ => return None,
    };
    let duration = Duration::from_secs(value.checked_mul(seconds_per_unit)?);
    (duration.as_nanos() <= MAX_NANOS).then_some(duration)
}

// 與 Go time.Duration 相同的上限
const MAX_NANOS: u128 = i64::MAX as u128;
