// Menu layer rendering.
// Polls a window's list provider for sections, headers and rows and draws them as a list.

use ratatui::{prelude::*, widgets::*};

use crate::state::{MenuIndex, MenuLayer, Row, Window};

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn header_item(label: String) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
}

fn row_item(row: Row) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        row.label,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = row.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }
    ListItem::new(lines)
}

/// Flatten a layer into list items. Returns the items and the position of the selected row.
pub fn layer_items(layer: &MenuLayer) -> (Vec<ListItem<'static>>, Option<usize>) {
    let mut items = Vec::new();
    let mut selected = None;

    for section in 0..layer.section_count() {
        if let Some(header) = layer.header(section) {
            items.push(header_item(header));
        }
        for row in 0..layer.row_count(section) {
            let index = MenuIndex::new(section, row);
            let Some(data) = layer.row(index) else {
                continue;
            };
            if index == layer.selected() {
                selected = Some(items.len());
            }
            items.push(row_item(data));
        }
    }

    (items, selected)
}

/// Render the visible window's menu layer.
pub fn render_window(frame: &mut Frame, window: &Window, area: Rect) {
    let Some(layer) = window.layer() else {
        render_empty(frame, area, "Window not loaded");
        return;
    };

    let (items, selected) = layer_items(layer);
    if items.is_empty() {
        render_empty(frame, area, "Nothing to show");
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(selected);

    let title = format!(" {} ", window.screen().title());
    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list_state);
}
