//! src/view/components/row_preview.rs

use annotr::{LabelKind, PLACEHOLDER, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::model::app_state::AppState;
use crate::view::theme;

/// All fields of the current row, titled, with the query column highlighted
/// and the label shown as a trailing entry.
pub struct RowPreview;

impl RowPreview {
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
        let header = Row::new(vec!["Field", "Value"])
            .style(
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1);

        let mut rows: Vec<Row> = snap
            .column_titles
            .iter()
            .enumerate()
            .map(|(idx, title)| {
                let value = match snap.fields.get(idx) {
                    Some(value) if !value.is_empty() => value.clone(),
                    _ => PLACEHOLDER.to_owned(),
                };

                let style = if idx == snap.query_column {
                    Style::default()
                        .fg(theme::CYAN)
                        .bg(theme::CURRENT_LINE)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::FOREGROUND)
                };

                Row::new(vec![Cell::from(title.clone()), Cell::from(value)]).style(style)
            })
            .collect();

        if snap.total > 0 {
            let label_style = match snap.label_kind {
                LabelKind::Primary => Style::default().fg(theme::GREEN),
                LabelKind::Secondary => Style::default().fg(theme::YELLOW),
                LabelKind::Custom => Style::default().fg(theme::PURPLE),
                LabelKind::Unset => Style::default().fg(theme::COMMENT),
            };
            rows.push(
                Row::new(vec![
                    Cell::from(app.config.labels.column_title.to_string()),
                    Cell::from(snap.label.clone()),
                ])
                .style(label_style.add_modifier(Modifier::ITALIC)),
            );
        }

        let widths = [Constraint::Length(20), Constraint::Fill(1)];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Current row ")
                .title_style(
                    Style::default()
                        .fg(theme::PURPLE)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(theme::COMMENT))
                .style(Style::default().bg(theme::BACKGROUND)),
        );

        frame.render_widget(table, area);
    }
}

impl Default for RowPreview {
    fn default() -> Self {
        Self::new()
    }
}
