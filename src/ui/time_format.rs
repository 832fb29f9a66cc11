use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};
use chrono_humanize::HumanTime;

/// Format a post or comment date for list display.
/// - with relative timestamps on: humanized ("3 weeks ago")
/// - otherwise: "7/28/25"
pub fn format_feed_date(date: NaiveDate, now: DateTime<Local>, relative: bool) -> String {
    if !relative {
        return date.format("%-m/%-d/%y").to_string();
    }
    if date == now.date_naive() {
        return "today".to_string();
    }
    date.and_hms_opt(12, 0, 0)
        .and_then(|ndt| Local.from_local_datetime(&ndt).single())
        .map(|dt| HumanTime::from(dt).to_string())
        .unwrap_or_else(|| date.format("%-m/%-d/%y").to_string())
}

/// Format a date in full for the post detail header (e.g. "July 28th, 2025")
pub fn format_date_long(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

/// Format a chat timestamp, messenger-style.
/// - <5min: humanized ("just now", "2 minutes ago")
/// - Today: "9:39 PM"
/// - Yesterday: "Yesterday, 9:39 PM"
/// - Older: "6/16/25, 8:30 AM"
pub fn format_message_timestamp(ts: i64, now: DateTime<Local>) -> String {
    let dt = Local.timestamp_opt(ts, 0).single();
    if let Some(dt) = dt {
        let duration = now.signed_duration_since(dt);
        if duration < Duration::minutes(5) {
            HumanTime::from(dt).to_string()
        } else if dt.date_naive() == now.date_naive() {
            dt.format("%-I:%M %p").to_string()
        } else if dt.date_naive() == (now - Duration::days(1)).date_naive() {
            format!("Yesterday, {}", dt.format("%-I:%M %p"))
        } else {
            dt.format("%-m/%-d/%y, %-I:%M %p").to_string()
        }
    } else {
        "?".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_dates_carry_ordinal_suffixes() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 7, day).unwrap();
        assert_eq!(format_date_long(d(1)), "July 1st, 2025");
        assert_eq!(format_date_long(d(22)), "July 22nd, 2025");
        assert_eq!(format_date_long(d(23)), "July 23rd, 2025");
        assert_eq!(format_date_long(d(28)), "July 28th, 2025");
    }

    #[test]
    fn feed_date_honors_the_relative_preference() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        let now = Local.with_ymd_and_hms(2025, 7, 10, 9, 0, 0).single().unwrap();
        assert_eq!(format_feed_date(date, now, false), "7/4/25");
        assert!(format_feed_date(date, now, true).contains("ago"));
    }

    #[test]
    fn todays_posts_read_as_today() {
        let now = Local.with_ymd_and_hms(2025, 7, 10, 9, 0, 0).single().unwrap();
        assert_eq!(format_feed_date(now.date_naive(), now, true), "today");
    }
}
