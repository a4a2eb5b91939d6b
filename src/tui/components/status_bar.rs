//! Status bar - held time, last report, and hotkeys.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the held time centered, with the last report beside it.
pub fn render_held_time(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Selected ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.held_time_label(), Style::new().fg(ACCENT_GOLD).bold()),
    ];

    if let Some((kind, value)) = app.last_report {
        spans.push(Span::styled(
            format!("  ({} → {})", kind.title().to_lowercase(), value),
            Style::new().fg(TEXT_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

/// Render the hotkey line at the bottom of the screen.
pub fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" drag · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[PgUp/PgDn]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" fling · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" column · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" help · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(line.centered()), area);
}
