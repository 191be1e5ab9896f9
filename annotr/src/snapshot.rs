//! Pure read-model projection of a [`Session`].
//!
//! The renderer consumes an immutable snapshot instead of poking at session
//! internals; everything a frame needs is computed here in one pass.

use crate::labels::{LabelKind, LabelSet};
use crate::session::Session;

/// Display placeholder for absent or empty values.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Fields of the row under the cursor; empty when no data is loaded.
    pub fields: Vec<String>,

    /// Resolved display titles, one per column.
    pub column_titles: Vec<String>,

    /// The currently selected query column.
    pub query_column: usize,

    /// Display value of the query field, [`PLACEHOLDER`] when absent or
    /// empty.
    pub query_value: String,

    /// Display value of the current label slot, [`PLACEHOLDER`] when unset.
    pub label: String,

    /// Classification of the current label against the canonical tokens.
    pub label_kind: LabelKind,

    /// 1-based cursor position; 0 when no data is loaded.
    pub position: usize,

    /// Total number of labelable rows.
    pub total: usize,

    /// Number of rows with a set label.
    pub labeled: usize,

    /// `round(100 * labeled / total)`, 0 when total is 0.
    pub percent: u8,
}

impl Session {
    /// Project the current state into an immutable snapshot.
    pub fn snapshot(&self, label_set: &LabelSet) -> SessionSnapshot {
        let total = self.data_len();
        let fields = self
            .data_rows()
            .get(self.cursor())
            .cloned()
            .unwrap_or_default();

        let query_value = match fields.get(self.query_column()) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => PLACEHOLDER.to_owned(),
        };

        let raw_label = self.current_label();
        let label = if raw_label.is_empty() {
            PLACEHOLDER.to_owned()
        } else {
            raw_label.to_owned()
        };

        let labeled = self.labeled_count();
        let percent = if total == 0 {
            0
        } else {
            (labeled as f64 / total as f64 * 100.0).round() as u8
        };

        SessionSnapshot {
            fields,
            column_titles: self.column_titles(),
            query_column: self.query_column(),
            query_value,
            label,
            label_kind: label_set.classify(raw_label),
            position: if total == 0 { 0 } else { self.cursor() + 1 },
            total,
            labeled,
            percent,
        }
    }
}
