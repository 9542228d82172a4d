use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&config::current_time_zone())
}

/// "Today" as the dispatchers see it; date selection limits and the
/// payroll clamp are all evaluated against this, never the local clock.
pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Date format the backend expects in query strings and JSON bodies.
pub fn api_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_date_is_iso_day_precision() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(api_date(date), "2025-03-09");
    }
}
