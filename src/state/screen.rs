// Screen definitions.
// Each screen is one window on the stack; its variant decides what list it shows.

use super::forecast::{MAIN_MENU_ITEMS, hour_label, weekday_name};

/// A screen that can be pushed onto the window stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Root menu: today's forecast / 7 day forecast
    MainMenu,
    /// 24 hourly rows
    DailyForecastList,
    /// 7 weekday rows
    WeeklyForecastList,
    /// Placeholder detail for one hourly row
    HourDetail { hour: usize },
    /// Placeholder detail for one weekday row
    DayDetail { day: usize },
}

/// Data-less discriminant of [`Screen`], used as the source of navigation edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    MainMenu,
    DailyForecastList,
    WeeklyForecastList,
    HourDetail,
    DayDetail,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::MainMenu => ScreenKind::MainMenu,
            Screen::DailyForecastList => ScreenKind::DailyForecastList,
            Screen::WeeklyForecastList => ScreenKind::WeeklyForecastList,
            Screen::HourDetail { .. } => ScreenKind::HourDetail,
            Screen::DayDetail { .. } => ScreenKind::DayDetail,
        }
    }

    /// Get the display title for this screen.
    pub fn title(&self) -> String {
        match self {
            Screen::MainMenu => "Forecast".to_string(),
            Screen::DailyForecastList => MAIN_MENU_ITEMS[0].0.to_string(),
            Screen::WeeklyForecastList => MAIN_MENU_ITEMS[1].0.to_string(),
            Screen::HourDetail { hour } => hour_label(*hour),
            Screen::DayDetail { day } => weekday_name(*day).unwrap_or("Unknown").to_string(),
        }
    }

    /// Short label for the breadcrumb trail.
    pub fn breadcrumb_label(&self) -> String {
        match self {
            Screen::MainMenu => "Menu".to_string(),
            Screen::DailyForecastList => "Today".to_string(),
            Screen::WeeklyForecastList => "7 Day".to_string(),
            Screen::HourDetail { .. } | Screen::DayDetail { .. } => self.title(),
        }
    }

    /// Detail screens have nothing further to drill into.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind(), ScreenKind::HourDetail | ScreenKind::DayDetail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(Screen::MainMenu.title(), "Forecast");
        assert_eq!(Screen::DailyForecastList.title(), "Today's Forecast");
        assert_eq!(Screen::WeeklyForecastList.title(), "7 Day Forecast");
        assert_eq!(Screen::HourDetail { hour: 13 }.title(), "1:00 PM");
        assert_eq!(Screen::DayDetail { day: 0 }.title(), "Sunday");
    }

    #[test]
    fn test_terminal_screens() {
        assert!(!Screen::MainMenu.is_terminal());
        assert!(!Screen::DailyForecastList.is_terminal());
        assert!(Screen::HourDetail { hour: 0 }.is_terminal());
        assert!(Screen::DayDetail { day: 3 }.is_terminal());
    }
}
