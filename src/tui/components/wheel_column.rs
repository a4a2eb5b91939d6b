//! Wheel column component - one scrolling selector with its indicator band.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use wheelpick::wheel::{ItemStyle, VisibleRow};

use crate::app::WheelColumn;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render one wheel column and register its mouse region.
pub fn render_wheel_column(
    frame: &mut Frame,
    area: Rect,
    column: &WheelColumn,
    index: usize,
    is_focused: bool,
    interactions: &mut InteractionRegistry,
) {
    let engine = &column.engine;
    let looping = engine.sequence().is_looping();

    let accent = if is_focused { ACCENT_MINT } else { TEXT_DIM };
    let title = if looping {
        format!(" {} ⟳ ", column.kind.title())
    } else {
        format!(" {} ", column.kind.title())
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(accent).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    interactions.register_wheel_column(index, area.into());

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let center = inner.height / 2;
    let mut lines: Vec<Line> = (0..inner.height).map(|_| Line::raw("")).collect();

    for row in engine.visible_rows() {
        // floor(d + 0.5) keeps two half-scrolled rows on separate lines
        let y = i32::from(center) + (row.distance + 0.5).floor() as i32;
        if y < 0 || y >= i32::from(inner.height) {
            continue;
        }
        lines[y as usize] = row_line(&row);
    }

    if engine.has_selection() {
        let band = std::mem::take(&mut lines[center as usize]);
        let mut spans = vec![Span::styled("›", Style::new().fg(accent))];
        spans.extend(band.spans);
        lines[center as usize] = Line::from(spans)
            .centered()
            .style(Style::new().bg(INDICATOR_BG));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

fn row_line<'a>(row: &VisibleRow<'a>) -> Line<'a> {
    let Some(option) = row.option else {
        return Line::raw("");
    };

    let ItemStyle {
        scale,
        rotation,
        opacity,
    } = row.style;

    let mut style = Style::new().fg(fade(opacity));
    if scale >= 1.0 && row.distance.abs() < 0.5 {
        style = style.bold();
    }

    // Rotation skews rows sideways the further they are from the band
    let skew = " ".repeat((rotation.clamp(0.0, 1.0) * 4.0).round() as usize);

    Line::from(vec![Span::raw(skew), Span::styled(option.label.as_str(), style)]).centered()
}

/// Grey level for an opacity in 0..=1, never fully invisible.
fn fade(opacity: f64) -> Color {
    let level = (FAINTEST + (255.0 - FAINTEST) * opacity.clamp(0.0, 1.0)) as u8;
    Color::Rgb(level, level, level)
}

const FAINTEST: f64 = 72.0;
