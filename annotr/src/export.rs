//! Export builder: the original rows with the label column inserted.

use compact_str::CompactString;

/// Build the annotated row set.
///
/// Every original row is copied with one new field inserted immediately
/// after `query_column`. The header row (when `has_header`) receives
/// `column_title`; data row *i* of the original maps to
/// `labels[i - header_offset]`, unset slots exporting as the empty string.
/// The insertion index clamps to the row's own length so ragged short rows
/// stay valid.
///
/// Deterministic and side-effect-free: the output row count equals the
/// input row count and every output row has exactly one more field than its
/// input row.
pub fn build_annotated_rows(
    rows: &[Vec<String>],
    has_header: bool,
    query_column: usize,
    labels: &[CompactString],
    column_title: &str,
) -> Vec<Vec<String>> {
    let offset = usize::from(has_header);
    let insert_at = query_column + 1;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let value = if has_header && i == 0 {
                column_title.to_owned()
            } else {
                labels
                    .get(i - offset)
                    .map_or_else(String::new, |label| label.to_string())
            };

            let mut out = row.clone();
            out.insert(insert_at.min(out.len()), value);
            out
        })
        .collect()
}
