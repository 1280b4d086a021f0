//! Bar chart pane: the array as vertical bars
//!
//! Pure function of the array snapshot and the highlight pair — no knowledge
//! of which algorithm produced them. Each value maps to a bar whose height is
//! proportional to value / 510 of the pane height; bar width is the pane
//! width divided by the array length, with a minimum of one column. The pair
//! under the algorithm's cursor is drawn in the accent color.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::engine::constants::VALUE_LIMIT;
use crate::ui::theme::DEFAULT_THEME;

/// Bottom-up eighth blocks for sub-cell bar tops
const EIGHTHS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];

pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u32],
    highlight: Option<(usize, usize)>,
) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if values.is_empty() || inner.width == 0 || inner.height == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "(empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let rows = inner.height as usize;
    let cols = inner.width as usize;
    let bar_width = (cols / values.len()).max(1);
    // Bars that don't fit the pane width are simply not drawn
    let visible = values.len().min(cols / bar_width);

    // Bar heights in eighths of a terminal row
    let heights: Vec<usize> = values[..visible]
        .iter()
        .map(|&v| ((v as usize * rows * 8) / VALUE_LIMIT as usize).min(rows * 8))
        .collect();

    let is_highlighted = |i: usize| match highlight {
        Some((a, b)) => i == a || i == b,
        None => false,
    };

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let from_bottom = rows - 1 - row;
        let mut spans = Vec::with_capacity(visible);
        for (i, &eighths) in heights.iter().enumerate() {
            let glyph = if eighths >= (from_bottom + 1) * 8 {
                '█'
            } else if eighths > from_bottom * 8 {
                EIGHTHS[eighths - from_bottom * 8]
            } else {
                ' '
            };

            let color = if is_highlighted(i) {
                DEFAULT_THEME.bar_active
            } else {
                DEFAULT_THEME.bar
            };

            // Leave a one-column gap between bars when there is room
            let filled = if bar_width > 1 { bar_width - 1 } else { 1 };
            let mut text: String = std::iter::repeat(glyph).take(filled).collect();
            if bar_width > 1 {
                text.push(' ');
            }
            spans.push(Span::styled(text, Style::default().fg(color)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
