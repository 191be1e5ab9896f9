//! src/model/app_state.rs
//! ============================================================================
//! # AppState: The Single Owner of All Mutable State
//!
//! One session, one UI state, one config — owned here and mutated only by
//! the dispatcher running inside the event loop. Command methods pair a
//! session mutation with its presentation effects (redraw, notification,
//! log line); no other code touches the session.

use std::path::PathBuf;

use annotr::Session;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;
use crate::model::ui_state::UIState;

pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub source_path: Option<PathBuf>,
    pub ui: UIState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ui = UIState::new(config.notification_ttl);
        Self {
            config,
            session: Session::new(),
            source_path: None,
            ui,
        }
    }

    /// Load a CSV file into a fresh session.
    ///
    /// The session is reset before decoding, so a failed load leaves the
    /// guarded empty state rather than a stale dataset.
    pub async fn open_file(&mut self, path: PathBuf) -> Result<(), AppError> {
        info!("Loading dataset from {}", path.display());
        self.session = Session::new();
        self.source_path = None;
        self.ui.request_redraw();

        let bytes = tokio::fs::read(&path).await?;
        let rows = annotr::codec::decode(&bytes)?;
        if rows.is_empty() {
            self.ui.show_warning("The file contains no rows.");
            return Ok(());
        }

        self.session.load(rows, self.config.assume_header);
        self.source_path = Some(path);

        let total = self.session.data_len();
        if self.session.is_empty() {
            self.ui.show_warning("No labelable rows: the file only has a header.");
        } else {
            self.ui
                .show_info(format!("Loaded {total} rows. Use 1/2/3 to label, Enter to move on."));
        }
        Ok(())
    }

    /// Write the annotated dataset next to the source file.
    pub async fn export(&mut self) -> Result<(), AppError> {
        if self.session.is_empty() {
            self.ui.show_warning("Nothing to export: no dataset loaded.");
            return Ok(());
        }

        let rows = self
            .session
            .annotated_rows(&self.config.labels.column_title);
        let bytes = annotr::codec::encode(&rows)?;
        let path = self.export_path();
        tokio::fs::write(&path, &bytes).await?;

        info!("Exported {} rows to {}", rows.len(), path.display());
        self.ui
            .show_success(format!("Exported to {}", path.display()));
        Ok(())
    }

    /// `<stem>.annotated.csv` next to the source file.
    pub fn export_path(&self) -> PathBuf {
        match &self.source_path {
            Some(source) => {
                let stem = source
                    .file_stem()
                    .map_or_else(|| "rows".to_owned(), |s| s.to_string_lossy().into_owned());
                source.with_file_name(format!("{stem}.annotated.csv"))
            }
            None => PathBuf::from("annotated.csv"),
        }
    }

    pub fn apply_primary(&mut self) {
        let label = self.config.labels.primary.clone();
        self.apply_label(label.as_str());
    }

    pub fn apply_secondary(&mut self) {
        let label = self.config.labels.secondary.clone();
        self.apply_label(label.as_str());
    }

    /// Apply the saved free-text label; silent no-op while it is empty.
    pub fn apply_custom(&mut self) {
        let label = self.ui.custom_label.trim().to_owned();
        if label.is_empty() {
            return;
        }
        self.apply_label(&label);
    }

    fn apply_label(&mut self, label: &str) {
        if self.session.is_empty() {
            return;
        }
        debug!("Labeling row {} as {label:?}", self.session.cursor());
        self.session.set_label(label);
        self.ui.request_redraw();
    }

    pub fn clear_label(&mut self) {
        self.session.clear_label();
        self.ui.request_redraw();
    }

    pub fn move_next(&mut self) {
        self.session.move_next();
        self.ui.request_redraw();
    }

    pub fn move_prev(&mut self) {
        self.session.move_prev();
        self.ui.request_redraw();
    }

    pub fn jump_to_unlabeled(&mut self) {
        self.session.jump_to_next_unset();
        self.ui.request_redraw();
    }

    /// Flip the header flag of the loaded dataset. Discards all labels, so
    /// the reset is surfaced as a notification.
    pub fn toggle_header(&mut self) {
        if self.session.raw_rows().is_empty() {
            return;
        }
        let has_header = !self.session.has_header();
        self.session.set_header_flag(has_header);

        let message = if has_header {
            "First row is now a header. Labels were reset."
        } else {
            "First row is now data. Labels were reset."
        };
        self.ui.show_info(message);
        debug!(
            "Header flag set to {has_header}, {} labelable rows",
            self.session.data_len()
        );
    }

    pub fn next_column(&mut self) {
        let count = self.session.column_count();
        if count == 0 {
            return;
        }
        let next = (self.session.query_column() + 1).min(count - 1);
        self.session.set_query_column(next);
        self.ui.request_redraw();
    }

    pub fn prev_column(&mut self) {
        let current = self.session.query_column();
        self.session.set_query_column(current.saturating_sub(1));
        self.ui.request_redraw();
    }
}
