// Selection routing.
// Maps a selected row on the current screen to the next screen to push.

use super::provider::MenuIndex;
use super::screen::{Screen, ScreenKind};

/// Which rows of the source screen an edge applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMatch {
    Exact(usize),
    Any,
}

impl RowMatch {
    fn matches(&self, row: usize) -> bool {
        match self {
            RowMatch::Exact(expected) => *expected == row,
            RowMatch::Any => true,
        }
    }
}

/// A static (source screen, row) to target screen transition.
#[derive(Debug, Clone, Copy)]
pub struct NavigationEdge {
    pub source: ScreenKind,
    pub row: RowMatch,
    /// Builds the target from the selected row. A new screen per traversal.
    pub target: fn(usize) -> Screen,
}

/// All transitions. Detail screens have no outgoing edges.
pub const NAVIGATION_EDGES: [NavigationEdge; 4] = [
    NavigationEdge {
        source: ScreenKind::MainMenu,
        row: RowMatch::Exact(0),
        target: |_| Screen::DailyForecastList,
    },
    NavigationEdge {
        source: ScreenKind::MainMenu,
        row: RowMatch::Exact(1),
        target: |_| Screen::WeeklyForecastList,
    },
    NavigationEdge {
        source: ScreenKind::DailyForecastList,
        row: RowMatch::Any,
        target: |hour| Screen::HourDetail { hour },
    },
    NavigationEdge {
        source: ScreenKind::WeeklyForecastList,
        row: RowMatch::Any,
        target: |day| Screen::DayDetail { day },
    },
];

/// Find the screen to open for a selection, or `None` if the selection is a no-op.
///
/// Every list has a single section, so selections outside section 0 never route.
pub fn route(current: &Screen, index: MenuIndex) -> Option<Screen> {
    if index.section != 0 {
        return None;
    }
    let kind = current.kind();
    NAVIGATION_EDGES
        .iter()
        .find(|edge| edge.source == kind && edge.row.matches(index.row))
        .map(|edge| (edge.target)(index.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_routes() {
        assert_eq!(
            route(&Screen::MainMenu, MenuIndex::new(0, 0)),
            Some(Screen::DailyForecastList)
        );
        assert_eq!(
            route(&Screen::MainMenu, MenuIndex::new(0, 1)),
            Some(Screen::WeeklyForecastList)
        );
        assert_eq!(route(&Screen::MainMenu, MenuIndex::new(0, 2)), None);
        assert_eq!(route(&Screen::MainMenu, MenuIndex::new(1, 0)), None);
    }

    #[test]
    fn test_list_routes_carry_row() {
        assert_eq!(
            route(&Screen::DailyForecastList, MenuIndex::new(0, 13)),
            Some(Screen::HourDetail { hour: 13 })
        );
        assert_eq!(
            route(&Screen::WeeklyForecastList, MenuIndex::new(0, 4)),
            Some(Screen::DayDetail { day: 4 })
        );
    }

    #[test]
    fn test_detail_screens_are_terminal() {
        for row in 0..4 {
            assert_eq!(route(&Screen::HourDetail { hour: 1 }, MenuIndex::new(0, row)), None);
            assert_eq!(route(&Screen::DayDetail { day: 1 }, MenuIndex::new(0, row)), None);
        }
    }
}
