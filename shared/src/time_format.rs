//! Date labels for cards and the detail header.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Placeholder reading time shown in the detail header.
pub const READING_TIME_LABEL: &str = "5 min read";

const SHORT_DATE: &str = "%b %-d, %Y";
const LONG_DATE: &str = "%B %-d, %Y";

fn parse(date: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Card label for an article stored with `date`, as seen at `now`.
///
/// Whole elapsed days decide the bucket: `Today`, `1 day ago`, `N days ago`
/// up to six, `N weeks ago` (floored) below thirty, otherwise the short
/// absolute date in `now`'s zone. Future dates read as `Today`; unparseable
/// strings are returned verbatim.
pub fn relative_label<Tz>(date: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(published) = parse(date) else {
        return date.to_string();
    };

    let elapsed_days = now.clone().signed_duration_since(published).num_days();
    match elapsed_days {
        days if days <= 0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        days @ 2..=6 => format!("{days} days ago"),
        days @ 7..=29 => format!("{} weeks ago", days / 7),
        _ => published
            .with_timezone(&now.timezone())
            .format(SHORT_DATE)
            .to_string(),
    }
}

/// Long absolute date (`October 18, 2026`) rendered in `tz`.
pub fn long_date<Tz>(date: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse(date) {
        Some(published) => published.with_timezone(tz).format(LONG_DATE).to_string(),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 15, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        (now() - duration).to_rfc3339()
    }

    #[test]
    fn same_day_is_today() {
        assert_eq!(relative_label(&ago(Duration::hours(3)), &now()), "Today");
        assert_eq!(relative_label(&ago(Duration::hours(23)), &now()), "Today");
    }

    #[test]
    fn exactly_one_day() {
        assert_eq!(relative_label(&ago(Duration::hours(24)), &now()), "1 day ago");
    }

    #[test]
    fn days_then_weeks() {
        assert_eq!(relative_label(&ago(Duration::days(2)), &now()), "2 days ago");
        assert_eq!(relative_label(&ago(Duration::days(6)), &now()), "6 days ago");
        assert_eq!(relative_label(&ago(Duration::days(7)), &now()), "1 weeks ago");
        assert_eq!(relative_label(&ago(Duration::days(9)), &now()), "1 weeks ago");
        assert_eq!(relative_label(&ago(Duration::days(14)), &now()), "2 weeks ago");
        assert_eq!(relative_label(&ago(Duration::days(29)), &now()), "4 weeks ago");
    }

    #[test]
    fn thirty_days_and_beyond_is_absolute() {
        assert_eq!(relative_label(&ago(Duration::days(30)), &now()), "Sep 18, 2026");
        assert_eq!(relative_label(&ago(Duration::days(31)), &now()), "Sep 17, 2026");
        assert_eq!(relative_label("2024-01-05T08:00:00Z", &now()), "Jan 5, 2024");
    }

    #[test]
    fn future_dates_read_as_today() {
        assert_eq!(relative_label(&(now() + Duration::hours(30)).to_rfc3339(), &now()), "Today");
    }

    #[test]
    fn garbage_dates_are_shown_verbatim() {
        assert_eq!(relative_label("last week", &now()), "last week");
        assert_eq!(long_date("n/a", &Utc), "n/a");
    }

    #[test]
    fn absolute_dates_follow_the_viewer_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let tokyo_now = now().with_timezone(&tokyo);
        assert_eq!(relative_label("2026-08-01T20:00:00Z", &tokyo_now), "Aug 2, 2026");
        assert_eq!(long_date("2026-08-01T20:00:00Z", &tokyo), "August 2, 2026");
    }

    #[test]
    fn long_date_spells_out_month() {
        assert_eq!(long_date("2026-10-18T09:30:00.000Z", &Utc), "October 18, 2026");
    }
}
