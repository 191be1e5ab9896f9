//! Help overlay listing every key binding.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::view::theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        let overlay_area = Self::centered_rect(60, 70, area);
        frame.render_widget(Clear, overlay_area);

        let bindings: &[(&str, &str)] = &[
            ("1", "apply the primary label"),
            ("2", "apply the secondary label"),
            ("3", "apply the free-text label"),
            ("i", "edit the free-text label"),
            ("Backspace", "clear the current label"),
            ("\u{2192} / Enter", "next row"),
            ("\u{2190}", "previous row"),
            ("u", "jump to the next unlabeled row"),
            ("t", "toggle the header row"),
            ("[ / ]", "previous / next query column"),
            ("o", "open a CSV file"),
            ("e", "export the annotated CSV"),
            ("?", "toggle this help"),
            ("q / Ctrl-C", "quit"),
        ];

        let key_style = Style::default()
            .fg(theme::CYAN)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = bindings
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<12}"), key_style),
                    Span::styled(*description, Style::default().fg(theme::FOREGROUND)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Esc to close",
            Style::default().fg(theme::COMMENT),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(theme::CYAN))
                .style(Style::default().bg(theme::BACKGROUND)),
        );

        frame.render_widget(paragraph, overlay_area);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
