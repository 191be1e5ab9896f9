//! CSV decode/encode with UTF-8 BOM handling.
//!
//! Decoding skips rows whose fields are all empty and tolerates ragged
//! records. Encoding prefixes the output with a UTF-8 byte-order mark so
//! non-ASCII label text survives round-trips through common spreadsheet
//! tools.

use crate::error::{SessionError, SessionResult};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Decode raw file bytes into an ordered sequence of field-string rows.
///
/// A leading UTF-8 BOM is stripped. Rows consisting solely of empty fields
/// (blank or delimiter-only lines) are dropped.
pub fn decode(bytes: &[u8]) -> SessionResult<Vec<Vec<String>>> {
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SessionError::decode(&e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(str::to_owned).collect());
    }

    Ok(rows)
}

/// Encode a row sequence back into CSV bytes, prefixed with the UTF-8 BOM.
pub fn encode(rows: &[Vec<String>]) -> SessionResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| SessionError::encode(e.to_string()))?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| SessionError::encode(e.to_string()))?;

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_rows() {
        let rows = decode(b"query,count\nhello,1\nworld,2\n").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["query".to_owned(), "count".to_owned()],
                vec!["hello".to_owned(), "1".to_owned()],
                vec!["world".to_owned(), "2".to_owned()],
            ]
        );
    }

    #[test]
    fn test_decode_skips_empty_lines() {
        let rows = decode(b"a,1\n\n,,\nb,2\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "a");
        assert_eq!(rows[1][0], "b");
    }

    #[test]
    fn test_decode_strips_bom() {
        let rows = decode(b"\xef\xbb\xbfa,1\n").unwrap();
        assert_eq!(rows[0][0], "a");
    }

    #[test]
    fn test_decode_tolerates_ragged_rows() {
        let rows = decode(b"a,1,x\nb\nc,3\n").unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 2);
    }

    #[test]
    fn test_encode_emits_bom() {
        let rows = vec![vec!["a".to_owned(), "1".to_owned()]];
        let bytes = encode(&rows).unwrap();
        assert!(bytes.starts_with(b"\xef\xbb\xbf"));
    }

    #[test]
    fn test_round_trip_preserves_rows() {
        let rows = vec![
            vec!["query".to_owned(), "annotation".to_owned()],
            vec!["nat\u{00fc}rlich?".to_owned(), "with,comma".to_owned()],
            vec!["line\nbreak".to_owned(), String::new()],
        ];
        let decoded = decode(&encode(&rows).unwrap()).unwrap();
        assert_eq!(decoded, rows);
    }
}
