//! src/view/ui.rs
//! ============================================================
//! Frame renderer that draws the entire TUI from the owned
//! `AppState` via an immutable `SessionSnapshot`.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::app_state::AppState;
use crate::model::ui_state::UIOverlay;
use crate::view::components::{
    help_overlay::HelpOverlay, notification_overlay::NotificationOverlay,
    prompt_overlay::PromptOverlay, query_panel::QueryPanel, row_preview::RowPreview,
    status_bar::StatusBar,
};

pub struct UIRenderer {
    query_panel: QueryPanel,
    row_preview: RowPreview,
    status_bar: StatusBar,
}

impl UIRenderer {
    pub fn new() -> Self {
        Self {
            query_panel: QueryPanel::new(),
            row_preview: RowPreview::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, app: &AppState) {
        let snap = app.session.snapshot(&app.config.labels);

        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // query panel
                Constraint::Min(0),    // row preview
                Constraint::Length(3), // status bar
            ])
            .split(area);

        self.query_panel.render(frame, app, &snap, chunks[0]);
        self.row_preview.render(frame, app, &snap, chunks[1]);
        self.status_bar.render(frame, app, &snap, chunks[2]);

        match app.ui.overlay {
            UIOverlay::Help => HelpOverlay::render(frame, area),
            UIOverlay::Prompt => PromptOverlay::render(frame, app, area),
            UIOverlay::None => {}
        }

        if let Some(notification) = &app.ui.notification {
            NotificationOverlay::render(frame, notification, area);
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
