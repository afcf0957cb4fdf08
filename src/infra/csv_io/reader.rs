use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

use crate::domain::entities::dataset::{Dataset, RowRecord};
use crate::usecase::ports::files::DatasetSource;

pub struct CsvFileSource;

impl DatasetSource for CsvFileSource {
    fn read_dataset(&self, path: &Path) -> Result<Dataset> {
        let file =
            File::open(path).with_context(|| format!("failed to open csv: {}", path.display()))?;
        read_dataset_from(file).with_context(|| format!("failed to parse csv: {}", path.display()))
    }
}

/// Parses comma-delimited text whose first record is the header. Values stay
/// raw strings; short records are padded with empty cells.
pub fn read_dataset_from<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader
        .headers()
        .context("failed to read headers from csv")?
        .clone();

    if headers.is_empty() {
        return Ok(Dataset::new());
    }
    warn_duplicate_headers(&headers);

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("failed to parse csv record at row {row_idx}"))?;
        if record.len() > headers.len() {
            tracing::warn!(
                row_idx,
                extra = record.len() - headers.len(),
                "dropping fields beyond header"
            );
        }
        rows.push(to_row_record(&headers, &record));
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "parsed csv");
    Ok(Dataset::from(rows))
}

fn to_row_record(headers: &StringRecord, record: &StringRecord) -> RowRecord {
    headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let value = record.get(col_idx).unwrap_or("");
            (header.to_string(), value.to_string())
        })
        .collect()
}

fn warn_duplicate_headers(headers: &StringRecord) {
    for (col_idx, header) in headers.iter().enumerate() {
        if headers.iter().take(col_idx).any(|earlier| earlier == header) {
            tracing::warn!(col_idx, header, "duplicate header, later column wins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::csv_io::writer::write_dataset_string;

    #[test]
    fn short_records_are_padded() {
        let dataset = read_dataset_from("a,b,c\n1,2\n".as_bytes()).expect("csv should parse");

        let row = dataset.row(0).expect("row should exist");
        assert_eq!(row.get("c").map(String::as_str), Some(""));
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn extra_fields_are_dropped() {
        let dataset = read_dataset_from("a,b\n1,2,3\n".as_bytes()).expect("csv should parse");

        let row = dataset.row(0).expect("row should exist");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn empty_input_is_empty_dataset() {
        let dataset = read_dataset_from("".as_bytes()).expect("empty csv should parse");

        assert!(dataset.is_empty());
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let dataset = read_dataset_from("note,n\n\"a, b\nc\",1\n".as_bytes())
            .expect("csv should parse");

        let row = dataset.row(0).expect("row should exist");
        assert_eq!(row.get("note").map(String::as_str), Some("a, b\nc"));
    }

    #[test]
    fn unbalanced_quote_absorbs_rest_of_file() {
        let dataset = read_dataset_from("name,age\n\"Alice,30\nBob,25\n".as_bytes())
            .expect("unbalanced quote should still parse");

        assert_eq!(dataset.len(), 1);
        let row = dataset.row(0).expect("row should exist");
        assert_eq!(
            row.get("name").map(String::as_str),
            Some("Alice,30\nBob,25\n")
        );
        assert_eq!(row.get("age").map(String::as_str), Some(""));
    }

    #[test]
    fn leading_bom_is_not_part_of_first_header() {
        let dataset = read_dataset_from("\u{feff}name,age\nAlice,30\n".as_bytes())
            .expect("csv with bom should parse");

        assert_eq!(dataset.columns(), vec!["name".to_string(), "age".to_string()]);
        let row = dataset.row(0).expect("row should exist");
        assert_eq!(row.get("name").map(String::as_str), Some("Alice"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dataset = read_dataset_from("x\n\n\n1\n\n".as_bytes()).expect("csv should parse");

        assert_eq!(dataset.len(), 1);
        let row = dataset.row(0).expect("row should exist");
        assert_eq!(row.get("x").map(String::as_str), Some("1"));
    }

    #[test]
    fn duplicate_header_keeps_later_value() {
        let dataset = read_dataset_from("a,a,b\n1,2,3".as_bytes()).expect("csv should parse");

        let row = dataset.row(0).expect("row should exist");
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("a").map(String::as_str), Some("2"));
        assert_eq!(row.get("b").map(String::as_str), Some("3"));
        let text = write_dataset_string(&dataset).expect("write should succeed");
        assert_eq!(text, "a,b\n2,3");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"name\n\xff\xfe\n";

        assert!(read_dataset_from(bytes).is_err());
    }
}
