// UI module for rendering the TUI.
// Contains widgets for the title bar, breadcrumbs, and the menu list.

mod breadcrumb;
mod menu;
mod title_bar;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(1),    // Visible window
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    title_bar::draw_title_bar(frame, chunks[0]);

    let breadcrumbs = app.windows.breadcrumbs();
    breadcrumb::draw_breadcrumb(frame, &breadcrumbs, chunks[1]);

    match app.windows.current() {
        Some(window) => menu::render_window(frame, window, chunks[2]),
        None => menu::render_empty(frame, chunks[2], "No windows"),
    }

    draw_status_bar(frame, app, chunks[3]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let at_detail = app
        .windows
        .current()
        .is_some_and(|w| w.screen().is_terminal());

    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
    ];
    if !at_detail {
        hints.push(Span::raw("  ↵ "));
        hints.push(Span::styled("Select", Style::default().fg(Color::DarkGray)));
    }
    let back_label = if app.windows.can_go_back() {
        "Back"
    } else {
        "Exit"
    };
    hints.extend([
        Span::raw("  Esc "),
        Span::styled(back_label, Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 44.min(area.width);
    let popup_height = 12.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑/↓ or k/j     ", key_style),
            Span::raw("Move selection"),
        ]),
        Line::from(vec![
            Span::styled("  Enter, →, l    ", key_style),
            Span::raw("Open selected row"),
        ]),
        Line::from(vec![
            Span::styled("  Esc, ←, h, ⌫   ", key_style),
            Span::raw("Back / exit"),
        ]),
        Line::from(vec![
            Span::styled("  ?              ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("  q              ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_main_menu_render() {
        let app = App::new(&Config::default());
        let screen = render(&app);
        assert!(screen.contains("Current Location"));
        assert!(screen.contains("Today's Forecast"));
        assert!(screen.contains("Hourly"));
        assert!(screen.contains("7 Day Forecast"));
        assert!(screen.contains("Starts Sunday"));
        assert!(screen.contains("Exit"));
    }

    #[test]
    fn test_hourly_render() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("12:00 AM"));
        assert!(screen.contains("Menu > Today"));
        assert!(screen.contains("Back"));
    }

    #[test]
    fn test_help_render() {
        let mut app = App::new(&Config::default());
        app.handle_key(KeyCode::Char('?'));
        let screen = render(&app);
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
