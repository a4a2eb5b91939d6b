use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use super::components::{render_held_time, render_help_popup, render_hotkeys, render_wheel_column};
use super::theme::*;

/// Width of one wheel column including borders
const COLUMN_WIDTH: u16 = 12;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Rows the wheels need: visible rows plus the two border lines
    let wheel_height = app.config.wheel.visible_rows() as u16 + 2;

    // Main vertical layout: logo, held time, wheels, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),            // Logo + spacing
        Constraint::Length(2),            // Held time + spacing
        Constraint::Length(wheel_height), // Wheels
        Constraint::Min(0),               // Spacer
        Constraint::Length(1),            // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_held_time(frame, main_layout[1], app);

    let column_areas = Layout::horizontal(
        app.columns
            .iter()
            .map(|_| Constraint::Length(COLUMN_WIDTH)),
    )
    .flex(Flex::Center)
    .spacing(2)
    .split(main_layout[2]);

    for (index, column_area) in column_areas.iter().enumerate() {
        if let Some(column) = app.columns.get(index) {
            render_wheel_column(
                frame,
                *column_area,
                column,
                index,
                index == app.focused,
                &mut app.interactions,
            );
        }
    }

    render_hotkeys(frame, main_layout[4]);

    if app.show_help {
        render_help_popup(frame, area, &app.config.wheel, &mut app.interactions);
    }
}

/// Render the colorful "wheelpick" logo centered in the area.
fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [ACCENT_CORAL, ACCENT_GOLD, ACCENT_LIGHT_BLUE, ACCENT_MINT];
    let spans: Vec<Span> = "wheelpick"
        .chars()
        .zip(colors.iter().cycle())
        .map(|(c, color)| Span::styled(c.to_string(), Style::new().fg(*color).bold()))
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}
