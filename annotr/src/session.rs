//! Annotation session state machine.
//!
//! A [`Session`] owns the parsed dataset, the header flag, the query column,
//! the per-row label array and the cursor, and is mutated exclusively through
//! the command methods below. Two invariants hold after every operation:
//!
//! - `labels.len() == data_rows().len()`
//! - `cursor < labels.len()` whenever the data set is non-empty
//!
//! Operations never panic on an empty session; they no-op instead.

use compact_str::CompactString;

use crate::export;

/// In-memory state of one labeling session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// All decoded rows, including the header row when present.
    raw_rows: Vec<Vec<String>>,

    /// When set, raw row 0 supplies column titles and is not labelable.
    has_header: bool,

    /// Field index whose value is presented as the item to label.
    query_column: usize,

    /// Index-aligned with the data rows; empty string means unset.
    labels: Vec<CompactString>,

    /// Index of the data row currently presented for labeling.
    cursor: usize,
}

impl Session {
    /// An empty session: the state before any file has been loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset wholesale.
    ///
    /// Resets the labels to all-unset at the new data-row length, the cursor
    /// to 0 and the query column to 0. An empty dataset is accepted and
    /// leaves the session in the guarded empty state.
    pub fn load(&mut self, rows: Vec<Vec<String>>, has_header: bool) {
        self.raw_rows = rows;
        self.has_header = has_header;
        self.query_column = 0;
        self.cursor = 0;
        self.labels = vec![CompactString::default(); self.data_len()];
    }

    /// Re-derive the data rows under a new header flag.
    ///
    /// Changing which rows are labelable invalidates any index-aligned
    /// labels, so the label array is reset to all-unset at the new length
    /// and the cursor returns to 0. Setting the current value is a no-op.
    pub fn set_header_flag(&mut self, has_header: bool) {
        if self.has_header == has_header {
            return;
        }
        self.has_header = has_header;
        self.cursor = 0;
        self.labels = vec![CompactString::default(); self.data_len()];
    }

    /// Select which field is presented as the item to label.
    ///
    /// Out-of-range indices are ignored, keeping the previous valid
    /// selection. Touches neither labels nor cursor.
    pub fn set_query_column(&mut self, index: usize) {
        if index < self.column_count() {
            self.query_column = index;
        }
    }

    /// Label the current row and advance the cursor by one, clamped.
    ///
    /// No-op when no data is loaded or when the label text is empty (the
    /// unset sentinel is only ever written by [`Session::clear_label`]).
    pub fn set_label(&mut self, label: &str) {
        if self.labels.is_empty() || label.is_empty() {
            return;
        }
        self.labels[self.cursor] = CompactString::from(label);
        self.move_next();
    }

    /// Reset the current row's label to unset. The cursor stays put:
    /// clearing is a correction, not a step forward.
    pub fn clear_label(&mut self) {
        if self.labels.is_empty() {
            return;
        }
        self.labels[self.cursor] = CompactString::default();
    }

    /// Advance the cursor by one; silent no-op at the last row.
    pub fn move_next(&mut self) {
        if self.cursor + 1 < self.labels.len() {
            self.cursor += 1;
        }
    }

    /// Step the cursor back by one; silent no-op at row 0.
    pub fn move_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Jump to the next unset label slot.
    ///
    /// Scans forward from `cursor + 1`; when the tail is fully labeled,
    /// wraps and scans from 0 for the first unset slot anywhere. Leaves the
    /// cursor unchanged when every row is labeled.
    pub fn jump_to_next_unset(&mut self) {
        let start = self.cursor + 1;
        if let Some(found) = self
            .labels
            .iter()
            .skip(start)
            .position(|label| label.is_empty())
        {
            self.cursor = start + found;
        } else if let Some(first) = self.labels.iter().position(|label| label.is_empty()) {
            self.cursor = first;
        }
    }

    /// Build the export row set: every raw row with the label column
    /// inserted after the query column. See [`export::build_annotated_rows`].
    pub fn annotated_rows(&self, column_title: &str) -> Vec<Vec<String>> {
        export::build_annotated_rows(
            &self.raw_rows,
            self.has_header,
            self.query_column,
            &self.labels,
            column_title,
        )
    }

    /// The labelable rows: the dataset minus the header row when present.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.raw_rows
            .get(self.header_offset()..)
            .unwrap_or_default()
    }

    /// Number of labelable rows.
    pub fn data_len(&self) -> usize {
        if self.has_header {
            self.raw_rows.len().saturating_sub(1)
        } else {
            self.raw_rows.len()
        }
    }

    /// True when no labelable rows exist (nothing loaded, or a header-only
    /// file).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of fields per row, taken from the first raw row.
    pub fn column_count(&self) -> usize {
        self.raw_rows.first().map_or(0, Vec::len)
    }

    /// Display titles for every column.
    ///
    /// With a header row, non-empty header cells are used verbatim; missing
    /// or empty cells (and every column of a header-less dataset) fall back
    /// to `Column N`.
    pub fn column_titles(&self) -> Vec<String> {
        let header = self.raw_rows.first();
        (0..self.column_count())
            .map(|idx| {
                let cell = header.and_then(|row| row.get(idx)).map(String::as_str);
                match cell {
                    Some(title) if self.has_header && !title.is_empty() => title.to_owned(),
                    _ => format!("Column {}", idx + 1),
                }
            })
            .collect()
    }

    /// Count of set label slots.
    pub fn labeled_count(&self) -> usize {
        self.labels.iter().filter(|label| !label.is_empty()).count()
    }

    /// The label of the current row; empty string when unset or when no data
    /// is loaded.
    pub fn current_label(&self) -> &str {
        self.labels.get(self.cursor).map_or("", CompactString::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn query_column(&self) -> usize {
        self.query_column
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn raw_rows(&self) -> &[Vec<String>] {
        &self.raw_rows
    }

    pub fn labels(&self) -> &[CompactString] {
        &self.labels
    }

    fn header_offset(&self) -> usize {
        usize::from(self.has_header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> Vec<Vec<String>> {
        vec![
            vec!["a".to_owned(), "1".to_owned()],
            vec!["b".to_owned(), "2".to_owned()],
            vec!["c".to_owned(), "3".to_owned()],
        ]
    }

    fn invariants_hold(session: &Session) {
        assert_eq!(session.labels().len(), session.data_rows().len());
        if !session.is_empty() {
            assert!(session.cursor() < session.labels().len());
        }
    }

    #[test]
    fn test_load_resets_everything() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_query_column(1);
        session.set_label("x");

        session.load(three_rows(), false);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.query_column(), 0);
        assert_eq!(session.labeled_count(), 0);
        invariants_hold(&session);
    }

    #[test]
    fn test_empty_dataset_is_a_guarded_state() {
        let mut session = Session::new();
        session.load(Vec::new(), true);

        assert!(session.is_empty());
        assert_eq!(session.column_count(), 0);

        // every operation stays a silent no-op
        session.set_label("x");
        session.clear_label();
        session.move_next();
        session.move_prev();
        session.jump_to_next_unset();
        session.set_query_column(3);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.query_column(), 0);
        invariants_hold(&session);
    }

    #[test]
    fn test_header_only_file_has_no_data_rows() {
        let mut session = Session::new();
        session.load(vec![vec!["title".to_owned()]], true);
        assert!(session.is_empty());
        assert_eq!(session.column_count(), 1);
        invariants_hold(&session);
    }

    #[test]
    fn test_label_and_jump_scenario() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_query_column(0);

        session.set_label("A");
        assert_eq!(session.cursor(), 1);
        let labels: Vec<&str> = session.labels().iter().map(|l| l.as_str()).collect();
        assert_eq!(labels, ["A", "", ""]);

        // forward scan from cursor + 1 = 2 finds index 2 directly
        session.jump_to_next_unset();
        assert_eq!(session.cursor(), 2);
        invariants_hold(&session);
    }

    #[test]
    fn test_jump_wraps_to_first_unset() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_label("A"); // cursor 1
        session.move_next(); // cursor 2
        session.set_label("C"); // clamps at 2

        session.jump_to_next_unset();
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_jump_on_fully_labeled_dataset_keeps_cursor() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_label("A");
        session.set_label("B");
        session.set_label("C");

        let before = session.cursor();
        session.jump_to_next_unset();
        assert_eq!(session.cursor(), before);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut session = Session::new();
        session.load(three_rows(), false);

        session.move_prev();
        assert_eq!(session.cursor(), 0);

        session.move_next();
        session.move_next();
        session.move_next();
        assert_eq!(session.cursor(), 2);
        invariants_hold(&session);
    }

    #[test]
    fn test_set_label_advances_but_clamps_at_last_row() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.move_next();
        session.move_next();

        session.set_label("C");
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.current_label(), "C");
    }

    #[test]
    fn test_clear_label_is_idempotent_and_keeps_cursor() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_label("A");
        session.move_prev();

        session.clear_label();
        let once = session.clone();
        session.clear_label();

        assert_eq!(session, once);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.labeled_count(), 0);
    }

    #[test]
    fn test_empty_label_text_is_rejected() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_label("");
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.labeled_count(), 0);
    }

    #[test]
    fn test_header_toggle_discards_labels_at_new_length() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_label("A");
        session.set_label("B");
        assert_eq!(session.labeled_count(), 2);

        session.set_header_flag(true);
        assert_eq!(session.data_len(), 2);
        assert_eq!(session.labels().len(), 2);
        assert_eq!(session.labeled_count(), 0);
        assert_eq!(session.cursor(), 0);
        invariants_hold(&session);
    }

    #[test]
    fn test_header_toggle_to_same_value_is_noop() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        session.set_label("A");

        session.set_header_flag(false);
        assert_eq!(session.labeled_count(), 1);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_query_column_ignores_out_of_range() {
        let mut session = Session::new();
        session.load(three_rows(), false);

        session.set_query_column(1);
        assert_eq!(session.query_column(), 1);

        session.set_query_column(7);
        assert_eq!(session.query_column(), 1);
    }

    #[test]
    fn test_column_titles_fall_back_without_header() {
        let mut session = Session::new();
        session.load(three_rows(), false);
        assert_eq!(session.column_titles(), vec!["Column 1", "Column 2"]);
    }

    #[test]
    fn test_column_titles_use_header_cells_with_fallback_for_empty() {
        let mut session = Session::new();
        session.load(
            vec![
                vec!["query".to_owned(), String::new()],
                vec!["a".to_owned(), "1".to_owned()],
            ],
            true,
        );
        assert_eq!(session.column_titles(), vec!["query", "Column 2"]);
    }
}
