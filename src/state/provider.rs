// List providers.
// Supply section/row counts and row labels to the menu list widget, one provider per screen.

use super::forecast::{
    DAY_DETAIL_FIELDS, DAYS_IN_WEEK, HOUR_DETAIL_FIELDS, HOURS_IN_DAY, MAIN_MENU_ITEMS, NO_DATA,
    hour_label, weekday_name,
};
use super::screen::Screen;

/// Address of a row in a sectioned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MenuIndex {
    pub section: usize,
    pub row: usize,
}

impl MenuIndex {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// One rendered row. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub label: String,
    pub subtitle: Option<String>,
}

impl Row {
    fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            subtitle: None,
        }
    }

    fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Content contract polled by the menu list widget.
///
/// The widget only asks for rows inside the bounds reported by
/// [`ListProvider::row_count`], so `row` returning `None` means a caller bug.
pub trait ListProvider {
    fn section_count(&self) -> usize {
        1
    }

    fn row_count(&self, section: usize) -> usize;

    fn row(&self, index: MenuIndex) -> Option<Row>;

    fn header(&self, _section: usize) -> Option<String> {
        None
    }
}

/// Root menu with the location header.
#[derive(Debug, Clone)]
pub struct MainMenuList {
    location_label: String,
}

impl MainMenuList {
    pub fn new(location_label: impl Into<String>) -> Self {
        Self {
            location_label: location_label.into(),
        }
    }
}

impl ListProvider for MainMenuList {
    fn row_count(&self, section: usize) -> usize {
        match section {
            0 => MAIN_MENU_ITEMS.len(),
            _ => 0,
        }
    }

    fn row(&self, index: MenuIndex) -> Option<Row> {
        if index.section != 0 {
            return None;
        }
        let (title, subtitle) = MAIN_MENU_ITEMS.get(index.row)?;
        Some(Row::new(index.row, *title).with_subtitle(*subtitle))
    }

    fn header(&self, section: usize) -> Option<String> {
        (section == 0).then(|| self.location_label.clone())
    }
}

/// 24 rows of 12-hour clock labels.
#[derive(Debug, Clone, Default)]
pub struct HourlyForecastList;

impl ListProvider for HourlyForecastList {
    fn row_count(&self, section: usize) -> usize {
        match section {
            0 => HOURS_IN_DAY,
            _ => 0,
        }
    }

    fn row(&self, index: MenuIndex) -> Option<Row> {
        if index.section != 0 || index.row >= HOURS_IN_DAY {
            return None;
        }
        Some(Row::new(index.row, hour_label(index.row)))
    }
}

/// 7 rows of weekday names, Sunday first.
#[derive(Debug, Clone, Default)]
pub struct WeeklyForecastList;

impl ListProvider for WeeklyForecastList {
    fn row_count(&self, section: usize) -> usize {
        match section {
            0 => DAYS_IN_WEEK,
            _ => 0,
        }
    }

    fn row(&self, index: MenuIndex) -> Option<Row> {
        if index.section != 0 {
            return None;
        }
        weekday_name(index.row).map(|name| Row::new(index.row, name))
    }
}

/// Placeholder fields under a heading. Used by both detail screens.
#[derive(Debug, Clone)]
pub struct DetailList {
    heading: String,
    fields: &'static [&'static str],
}

impl DetailList {
    pub fn hour(hour: usize) -> Self {
        Self {
            heading: hour_label(hour),
            fields: &HOUR_DETAIL_FIELDS,
        }
    }

    pub fn day(day: usize) -> Self {
        Self {
            heading: weekday_name(day).unwrap_or("Unknown").to_string(),
            fields: &DAY_DETAIL_FIELDS,
        }
    }
}

impl ListProvider for DetailList {
    fn row_count(&self, section: usize) -> usize {
        match section {
            0 => self.fields.len(),
            _ => 0,
        }
    }

    fn row(&self, index: MenuIndex) -> Option<Row> {
        if index.section != 0 {
            return None;
        }
        let field = self.fields.get(index.row)?;
        Some(Row::new(index.row, *field).with_subtitle(NO_DATA))
    }

    fn header(&self, section: usize) -> Option<String> {
        (section == 0).then(|| self.heading.clone())
    }
}

/// Build a fresh provider for a screen.
pub fn provider_for(screen: &Screen, location_label: &str) -> Box<dyn ListProvider> {
    match screen {
        Screen::MainMenu => Box::new(MainMenuList::new(location_label)),
        Screen::DailyForecastList => Box::new(HourlyForecastList),
        Screen::WeeklyForecastList => Box::new(WeeklyForecastList),
        Screen::HourDetail { hour } => Box::new(DetailList::hour(*hour)),
        Screen::DayDetail { day } => Box::new(DetailList::day(*day)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu() {
        let menu = MainMenuList::new("Current Location");
        assert_eq!(menu.section_count(), 1);
        assert_eq!(menu.row_count(0), 2);
        assert_eq!(menu.row_count(1), 0);
        assert_eq!(menu.header(0), Some("Current Location".to_string()));

        let first = menu.row(MenuIndex::new(0, 0)).unwrap();
        assert_eq!(first.label, "Today's Forecast");
        assert_eq!(first.subtitle.as_deref(), Some("Hourly"));

        let second = menu.row(MenuIndex::new(0, 1)).unwrap();
        assert_eq!(second.label, "7 Day Forecast");
        assert_eq!(second.subtitle.as_deref(), Some("Starts Sunday"));

        assert!(menu.row(MenuIndex::new(0, 2)).is_none());
    }

    #[test]
    fn test_hourly_list() {
        let list = HourlyForecastList;
        assert_eq!(list.row_count(0), 24);
        assert!(list.header(0).is_none());

        let midnight = list.row(MenuIndex::new(0, 0)).unwrap();
        assert_eq!(midnight.label, "12:00 AM");
        assert!(midnight.subtitle.is_none());
        assert_eq!(list.row(MenuIndex::new(0, 13)).unwrap().label, "1:00 PM");
        assert!(list.row(MenuIndex::new(0, 24)).is_none());
    }

    #[test]
    fn test_weekly_list() {
        let list = WeeklyForecastList;
        assert_eq!(list.row_count(0), 7);
        assert_eq!(list.row(MenuIndex::new(0, 0)).unwrap().label, "Sunday");
        assert_eq!(list.row(MenuIndex::new(0, 6)).unwrap().label, "Saturday");
        assert!(list.row(MenuIndex::new(0, 7)).is_none());
    }

    #[test]
    fn test_detail_lists() {
        let hour = DetailList::hour(12);
        assert_eq!(hour.header(0), Some("12:00 PM".to_string()));
        assert_eq!(hour.row_count(0), HOUR_DETAIL_FIELDS.len());
        let row = hour.row(MenuIndex::new(0, 0)).unwrap();
        assert_eq!(row.label, "Temperature");
        assert_eq!(row.subtitle.as_deref(), Some("No data"));

        let day = DetailList::day(2);
        assert_eq!(day.header(0), Some("Tuesday".to_string()));
        assert_eq!(day.row(MenuIndex::new(0, 0)).unwrap().label, "High");
    }

    #[test]
    fn test_provider_for_screen() {
        assert_eq!(provider_for(&Screen::MainMenu, "Here").row_count(0), 2);
        assert_eq!(provider_for(&Screen::DailyForecastList, "Here").row_count(0), 24);
        assert_eq!(provider_for(&Screen::WeeklyForecastList, "Here").row_count(0), 7);
        assert_eq!(
            provider_for(&Screen::DayDetail { day: 5 }, "Here").header(0),
            Some("Friday".to_string())
        );
    }
}
