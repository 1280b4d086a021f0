//! Controls pane: algorithm selector plus speed and size readouts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::engine::Algorithm;
use crate::ui::theme::DEFAULT_THEME;

pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    speed: u32,
    size: usize,
    locked: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(area);

    // Selection is frozen while a run is active
    let highlight = if locked {
        Style::default().fg(DEFAULT_THEME.comment).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    };

    let titles: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .highlight_style(highlight)
        .block(
            Block::default()
                .title(" Algorithm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        );
    frame.render_widget(tabs, chunks[0]);

    let settings = Paragraph::new(Line::from(vec![
        Span::styled("Speed ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{:>3}", speed),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!(" ({:>3}ms)", 101 - speed),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("  Size ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{:>3}", size),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
    ]))
    .block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(settings, chunks[1]);
}
