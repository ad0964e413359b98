use chrono::{DateTime, Utc};
use invox_types::Timestamp;

pub(crate) const TIME_PLACEHOLDER: &str = "N/A";

/// Wall-clock time of day in 12-hour format ("10:30 AM"), or the placeholder
/// when the value is absent or unparseable.
pub(crate) fn format_time_of_day(ts: Option<&Timestamp>) -> String {
    match ts.and_then(|t| t.to_datetime()) {
        Some(dt) => dt.format("%-I:%M %p").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

/// Calendar date ("1/31/2024"), or the placeholder.
pub(crate) fn format_date(ts: &Timestamp) -> String {
    match ts.to_datetime() {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => TIME_PLACEHOLDER.to_string(),
    }
}

/// Relative time ("2 min ago", "yesterday") for console listings.
pub(crate) fn format_relative_time(dt: Option<DateTime<Utc>>) -> String {
    let Some(parsed) = dt else {
        return TIME_PLACEHOLDER.to_string();
    };

    let now = Utc::now();
    let duration = now.signed_duration_since(parsed);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} weeks ago", weeks)
    } else if days < 365 {
        let months = days / 30;
        format!("{} months ago", months)
    } else {
        let years = days / 365;
        format!("{} years ago", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_is_twelve_hour() {
        let ts = Timestamp::Text("2024-01-01T10:30:00Z".to_string());
        assert_eq!(format_time_of_day(Some(&ts)), "10:30 AM");

        let evening = Timestamp::Text("2024-01-01T22:05:00Z".to_string());
        assert_eq!(format_time_of_day(Some(&evening)), "10:05 PM");
    }

    #[test]
    fn absent_or_unparseable_time_uses_placeholder() {
        assert_eq!(format_time_of_day(None), "N/A");

        let garbage = Timestamp::Text("not a date".to_string());
        assert_eq!(format_time_of_day(Some(&garbage)), "N/A");
    }

    #[test]
    fn date_renders_month_day_year() {
        let ts = Timestamp::Text("2024-01-31T10:30:00Z".to_string());
        assert_eq!(format_date(&ts), "1/31/2024");
    }

    #[test]
    fn relative_time_recent() {
        assert_eq!(format_relative_time(Some(Utc::now())), "just now");
        assert_eq!(format_relative_time(None), "N/A");
    }
}
