//! src/view/components/query_panel.rs
//!
//! The item currently being labeled, plus the label control strip with the
//! active control highlighted.

use annotr::{LabelKind, SessionSnapshot};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct QueryPanel;

impl QueryPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        app: &AppState,
        snap: &SessionSnapshot,
        area: Rect,
    ) {
        let title = snap
            .column_titles
            .get(snap.query_column)
            .map_or("Item", String::as_str);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .title_style(Style::default().fg(theme::CYAN).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(theme::COMMENT))
            .style(Style::default().bg(theme::BACKGROUND));

        let lines = if app.session.raw_rows().is_empty() {
            vec![
                Line::from(Span::styled(
                    "Load a CSV file to get started.",
                    Style::default().fg(theme::FOREGROUND),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Press o to open a file, ? for help.",
                    Style::default().fg(theme::COMMENT),
                )),
            ]
        } else {
            vec![
                Line::from(Span::styled(
                    snap.query_value.clone(),
                    Style::default()
                        .fg(theme::FOREGROUND)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                self.control_strip(app, snap),
            ]
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }

    /// `[1] natural  [2] conventional  [3] <custom>  [⌫] clear`, with the
    /// control matching the current label highlighted.
    fn control_strip(&self, app: &AppState, snap: &SessionSnapshot) -> Line<'static> {
        let labels = &app.config.labels;
        let custom = if app.ui.custom_label.is_empty() {
            "custom\u{2026}".to_owned()
        } else {
            app.ui.custom_label.to_string()
        };

        let dim = Style::default().fg(theme::COMMENT);
        let active = Modifier::BOLD | Modifier::UNDERLINED;

        let mut primary = Style::default().fg(theme::GREEN);
        let mut secondary = Style::default().fg(theme::YELLOW);
        let mut custom_style = Style::default().fg(theme::PURPLE);
        match snap.label_kind {
            LabelKind::Primary => primary = primary.add_modifier(active),
            LabelKind::Secondary => secondary = secondary.add_modifier(active),
            LabelKind::Custom => custom_style = custom_style.add_modifier(active),
            LabelKind::Unset => {}
        }

        Line::from(vec![
            Span::styled(format!("[1] {}", labels.primary), primary),
            Span::styled("  ", dim),
            Span::styled(format!("[2] {}", labels.secondary), secondary),
            Span::styled("  ", dim),
            Span::styled(format!("[3] {custom}"), custom_style),
            Span::styled("  [\u{232b}] clear", dim),
        ])
    }
}

impl Default for QueryPanel {
    fn default() -> Self {
        Self::new()
    }
}
