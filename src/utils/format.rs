//! Deterministic display formatting for money, dates, durations and addresses

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_MONTH: i64 = 2_592_000; // 30 days
const SECONDS_PER_YEAR: i64 = 31_536_000;

/// USD amount with 2 fixed decimals and thousands grouping, rounded half
/// away from zero: `"$1,234.56"`, negatives as `"-$1,234.56"`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let cents = format!("{:.2}", rounded.abs());
    let (units, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(units), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `"Mar 5, 2026, 2:30 PM"` — abbreviated month, unpadded day and 12-hour
/// clock, in UTC.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Sub-second durations as whole milliseconds (`"180ms"`), everything else
/// as 2-decimal seconds (`"4.50s"`).
pub fn format_time(seconds: Decimal) -> String {
    if seconds < Decimal::ONE {
        let millis = (seconds * dec!(1000))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}ms", millis)
    } else {
        let rounded = seconds.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}s", rounded)
    }
}

/// Shortens an opaque identifier to `"{head}...{tail}"`. Inputs no longer
/// than `start_chars + end_chars` come back unchanged, the empty string
/// included. Dashboard call sites use `(6, 4)`.
pub fn format_address(address: &str, start_chars: usize, end_chars: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= start_chars + end_chars {
        return address.to_string();
    }
    let head: String = address.chars().take(start_chars).collect();
    let tail: String = address.chars().skip(char_count - end_chars).collect();
    format!("{}...{}", head, tail)
}

/// Elapsed time in the largest whole unit: `"5 minutes ago"`, `"1 day ago"`,
/// `"Just now"` under a minute. Takes `now` explicitly so callers control
/// the clock.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    for (unit_seconds, unit) in [
        (SECONDS_PER_YEAR, "year"),
        (SECONDS_PER_MONTH, "month"),
        (SECONDS_PER_DAY, "day"),
        (SECONDS_PER_HOUR, "hour"),
        (SECONDS_PER_MINUTE, "minute"),
    ] {
        let interval = seconds / unit_seconds;
        if interval >= 1 {
            let plural = if interval == 1 { "" } else { "s" };
            return format!("{} {}{} ago", interval, unit, plural);
        }
    }

    "Just now".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn currency_groups_thousands_with_two_decimals() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.9)), "$999.90");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(0.005)), "$0.01");
        assert_eq!(format_currency(dec!(2.675)), "$2.68");
    }

    #[test]
    fn negative_currency_carries_a_leading_sign() {
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format_currency(dec!(-0.004)), "$0.00");
    }

    #[test]
    fn dates_render_unpadded_twelve_hour_clock() {
        let afternoon: DateTime<Utc> = "2026-03-05T14:30:00Z".parse().unwrap();
        assert_eq!(format_date(afternoon), "Mar 5, 2026, 2:30 PM");

        let past_midnight: DateTime<Utc> = "2026-01-09T00:05:00Z".parse().unwrap();
        assert_eq!(format_date(past_midnight), "Jan 9, 2026, 12:05 AM");
    }

    #[test]
    fn sub_second_durations_render_as_milliseconds() {
        assert_eq!(format_time(dec!(0.18)), "180ms");
        assert_eq!(format_time(dec!(0.999)), "999ms");
        assert_eq!(format_time(dec!(0.0004)), "0ms");
    }

    #[test]
    fn durations_of_a_second_or_more_render_as_seconds() {
        assert_eq!(format_time(dec!(1)), "1.00s");
        assert_eq!(format_time(dec!(4.5)), "4.50s");
        assert_eq!(format_time(dec!(2.345)), "2.35s");
    }

    #[test]
    fn addresses_shorten_to_head_and_tail() {
        assert_eq!(format_address("0x1234567890abcdef", 6, 4), "0x1234...cdef");
    }

    #[test]
    fn short_addresses_pass_through_unchanged() {
        assert_eq!(format_address("", 6, 4), "");
        assert_eq!(format_address("0x1234", 6, 4), "0x1234");
        assert_eq!(format_address("0x12345678", 6, 4), "0x12345678");
    }

    #[test]
    fn time_ago_picks_the_largest_whole_unit() {
        let now: DateTime<Utc> = "2026-03-05T12:00:00Z".parse().unwrap();
        assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(format_time_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(format_time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(format_time_ago(now - Duration::days(45), now), "1 month ago");
        assert_eq!(format_time_ago(now - Duration::days(400), now), "1 year ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now: DateTime<Utc> = "2026-03-05T12:00:00Z".parse().unwrap();
        assert_eq!(format_time_ago(now + Duration::minutes(10), now), "Just now");
    }
}
