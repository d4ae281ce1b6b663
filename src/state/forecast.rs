// Static forecast tables.
// Hour and weekday labels shown by the forecast lists. There is no real forecast data.

/// Number of rows in the hourly forecast.
pub const HOURS_IN_DAY: usize = 24;

/// Number of rows in the weekly forecast.
pub const DAYS_IN_WEEK: usize = 7;

/// Weekday names, week starting on Sunday.
pub const WEEKDAYS: [&str; DAYS_IN_WEEK] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Entries on the main menu: (title, subtitle).
pub const MAIN_MENU_ITEMS: [(&str, &str); 2] = [
    ("Today's Forecast", "Hourly"),
    ("7 Day Forecast", "Starts Sunday"),
];

/// Placeholder fields on the hour detail screen.
pub const HOUR_DETAIL_FIELDS: [&str; 4] = ["Temperature", "Conditions", "Precipitation", "Wind"];

/// Placeholder fields on the day detail screen.
pub const DAY_DETAIL_FIELDS: [&str; 4] = ["High", "Low", "Conditions", "Precipitation"];

/// Subtitle for placeholder fields.
pub const NO_DATA: &str = "No data";

/// 12-hour clock label for an hourly row, e.g. row 0 is "12:00 AM", row 13 is "1:00 PM".
pub fn hour_label(row: usize) -> String {
    let hour = match row % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if row < 12 { "AM" } else { "PM" };
    format!("{}:00 {}", hour, suffix)
}

/// Weekday name for a weekly row.
pub fn weekday_name(row: usize) -> Option<&'static str> {
    WEEKDAYS.get(row).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0), "12:00 AM");
        assert_eq!(hour_label(1), "1:00 AM");
        assert_eq!(hour_label(11), "11:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(13), "1:00 PM");
        assert_eq!(hour_label(23), "11:00 PM");
    }

    #[test]
    fn test_hour_label_wraparound() {
        for row in 0..HOURS_IN_DAY {
            let expected_hour = if row % 12 == 0 { 12 } else { row % 12 };
            let expected_suffix = if row < 12 { "AM" } else { "PM" };
            assert_eq!(
                hour_label(row),
                format!("{}:00 {}", expected_hour, expected_suffix)
            );
        }
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(0), Some("Sunday"));
        assert_eq!(weekday_name(6), Some("Saturday"));
        assert_eq!(weekday_name(7), None);
        for (row, name) in WEEKDAYS.iter().enumerate() {
            assert_eq!(weekday_name(row), Some(*name));
        }
    }
}
