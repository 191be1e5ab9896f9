//! src/view/components/notification_overlay.rs

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::debug;

use crate::model::ui_state::{Notification, NotificationLevel};
use crate::view::theme;

pub struct NotificationOverlay;

impl NotificationOverlay {
    /// Draw the notification as a small box anchored to the bottom-right
    /// corner, above the status bar.
    pub fn render(frame: &mut Frame<'_>, notification: &Notification, area: Rect) {
        let Some(overlay_area) = Self::anchored_rect(notification, area) else {
            return;
        };

        debug!(
            "Rendering {:?} notification ({} chars)",
            notification.level,
            notification.message.len()
        );

        frame.render_widget(Clear, overlay_area);

        let (border_style, title, icon) = match notification.level {
            NotificationLevel::Info => (Style::default().fg(theme::CYAN), "Info", "\u{2139}"),
            NotificationLevel::Success => (Style::default().fg(theme::GREEN), "Success", "\u{2713}"),
            NotificationLevel::Warning => (Style::default().fg(theme::YELLOW), "Warning", "\u{26a0}"),
            NotificationLevel::Error => (Style::default().fg(theme::RED), "Error", "\u{2715}"),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {icon} {title} "))
            .title_style(border_style.bold())
            .border_style(border_style)
            .style(Style::default().bg(theme::BACKGROUND));

        let paragraph = Paragraph::new(notification.message.as_str())
            .block(block)
            .style(Style::default().fg(theme::FOREGROUND))
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, overlay_area);
    }

    fn anchored_rect(notification: &Notification, area: Rect) -> Option<Rect> {
        let height = 3;
        let max_width = area.width.saturating_sub(2);
        if max_width < 24 || area.height < height + 4 {
            return None;
        }

        let width = (notification.message.chars().count() as u16 + 4).clamp(24, max_width);
        Some(Rect {
            x: area.width - width - 1,
            y: area.height - height - 4,
            width,
            height,
        })
    }
}
