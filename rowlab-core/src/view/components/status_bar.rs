//! src/view/components/status_bar.rs
//!
//! Three-line footer: completion gauge, session summary with the position
//! counter, and the key hint strip.

use annotr::SessionSnapshot;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Gauge, Paragraph, Widget},
};

use crate::model::app_state::AppState;
use crate::view::theme;

pub struct StatusBar;

impl StatusBar {
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
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_gauge(frame, snap, lines[0]);
        self.render_summary(frame, app, snap, lines[1]);
        self.render_hints(frame, lines[2]);
    }

    fn render_gauge(&self, frame: &mut Frame<'_>, snap: &SessionSnapshot, area: Rect) {
        let ratio = if snap.total == 0 {
            0.0
        } else {
            snap.labeled as f64 / snap.total as f64
        };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme::GREEN).bg(theme::CURRENT_LINE))
            .label(format!("{}%", snap.percent))
            .ratio(ratio);

        gauge.render(area, frame.buffer_mut());
    }

    fn render_summary(
        &self,
        frame: &mut Frame<'_>,
        app: &AppState,
        snap: &SessionSnapshot,
        area: Rect,
    ) {
        let file = app
            .source_path
            .as_deref()
            .and_then(|path| path.file_name())
            .map_or_else(|| "no file".to_owned(), |name| name.to_string_lossy().into_owned());

        let header = if app.session.raw_rows().is_empty() {
            String::new()
        } else if app.session.has_header() {
            " | header: on".to_owned()
        } else {
            " | header: off".to_owned()
        };

        let left_text = format!(
            "{file}{header} | {} of {} rows labeled",
            snap.labeled, snap.total
        );
        let right_text = format!("{} / {}", snap.position, snap.total);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Paragraph::new(left_text)
            .style(Style::default().fg(theme::FOREGROUND).bg(theme::BACKGROUND))
            .alignment(Alignment::Left)
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(
                Style::default()
                    .fg(theme::FOREGROUND)
                    .bg(theme::BACKGROUND)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }

    fn render_hints(&self, frame: &mut Frame<'_>, area: Rect) {
        let hints = "1/2/3 label  \u{232b} clear  \u{2190}/\u{2192} move  u unlabeled  t header  [/] column  o open  e export  ? help";

        Paragraph::new(hints)
            .style(Style::default().fg(theme::COMMENT).bg(theme::BACKGROUND))
            .alignment(Alignment::Left)
            .render(area, frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
