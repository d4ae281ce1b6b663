// Title bar rendering.
// App name on the left and the local time on the right, like a watch status bar.

use chrono::{DateTime, Local};
use ratatui::{prelude::*, widgets::*};

/// Format the clock shown in the title bar.
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

/// Draw the title bar at the top of the screen.
pub fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " forecast ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(title, area);

    let clock = Paragraph::new(Line::from(Span::styled(
        format!("{} ", format_clock(&Local::now())),
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(clock, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clock() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&now), "09:05");
    }
}
