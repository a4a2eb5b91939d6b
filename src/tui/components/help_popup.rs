//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use wheelpick::WheelConfig;

use crate::events::Action;
use crate::tui::interaction::{InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

const SHORTCUTS: &[(&str, &str)] = &[
    ("  ↑/↓ j/k    ", "Drag one row (slow release)"),
    ("  PgUp/PgDn  ", "Fling (release with momentum)"),
    ("  ←/→ Tab    ", "Switch column"),
    ("  1-9        ", "Focus column by number"),
    ("  L          ", "Toggle looping"),
    ("  n          ", "Set held time to now"),
    ("  q / Esc    ", "Quit"),
];

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(
    frame: &mut Frame,
    area: Rect,
    wheel: &WheelConfig,
    interactions: &mut InteractionRegistry,
) {
    // Calculate centered popup area
    let popup_width = 50u16;
    let popup_height = 16u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    // Clicking anywhere closes the popup before the wheels see it
    interactions.register(
        InteractiveRegion::clickable("help_popup", area.into(), Action::CloseHelp).with_priority(10),
    );

    let mut lines: Vec<Line> = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::new().fg(TEXT_WHITE).bold(),
        )]),
        Line::raw(""),
    ];

    for (keys, description) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(*keys, Style::new().fg(TEXT_WHITE)),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Wheel", Style::new().fg(ACCENT_LIGHT_BLUE).bold()));
    lines.push(Line::from(vec![
        Span::styled("  looping ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            if wheel.enable_looping { "on" } else { "off" },
            Style::new().fg(ACCENT_GOLD),
        ),
        Span::styled("  grace ", Style::new().fg(TEXT_DIM)),
        Span::styled(format!("{}ms", wheel.grace_period_ms), Style::new().fg(ACCENT_GOLD)),
        Span::styled("  arming ", Style::new().fg(TEXT_DIM)),
        Span::styled(format!("{}ms", wheel.arming_delay_ms), Style::new().fg(ACCENT_GOLD)),
    ]));
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_CORAL))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
