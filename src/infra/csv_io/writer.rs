use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use crate::domain::entities::dataset::Dataset;

/// Serializes rows under the columns of the first row. Keys a later row has
/// beyond those columns are not written; missing ones become empty cells.
pub fn write_dataset(dataset: &Dataset) -> Result<Vec<u8>> {
    let columns = dataset.columns();
    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(&columns)
        .context("failed to write csv header")?;
    for (row_idx, row) in dataset.rows().iter().enumerate() {
        let values = columns
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""));
        writer
            .write_record(values)
            .with_context(|| format!("failed to write csv row {row_idx}"))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!(err.to_string()))
        .context("failed to flush csv writer")?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

pub fn write_dataset_string(dataset: &Dataset) -> Result<String> {
    let bytes = write_dataset(dataset)?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dataset::RowRecord;

    fn record(pairs: &[(&str, &str)]) -> RowRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_dataset_writes_nothing() {
        let text = write_dataset_string(&Dataset::new()).expect("write should succeed");

        assert_eq!(text, "");
    }

    #[test]
    fn fields_needing_quotes_are_quoted() {
        let dataset = Dataset::from(vec![record(&[("note", "a, \"b\""), ("n", "1")])]);

        let text = write_dataset_string(&dataset).expect("write should succeed");

        assert_eq!(text, "note,n\n\"a, \"\"b\"\"\",1");
    }

    #[test]
    fn later_rows_follow_first_row_columns() {
        let dataset = Dataset::from(vec![
            record(&[("name", "Alice"), ("age", "30")]),
            record(&[("city", "Oslo"), ("name", "Bob")]),
            RowRecord::new(),
        ]);

        let text = write_dataset_string(&dataset).expect("write should succeed");

        assert_eq!(text, "name,age\nAlice,30\nBob,\n,");
    }
}
