use indexmap::IndexMap;

/// One data row: column name to raw cell text, in header order.
pub type RowRecord = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<RowRecord>,
}

impl From<Vec<RowRecord>> for Dataset {
    fn from(rows: Vec<RowRecord>) -> Self {
        Dataset { rows }
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn row(&self, row_idx: usize) -> Option<&RowRecord> {
        self.rows.get(row_idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names shown as headers. Always taken from the first row, so
    /// keys that only later rows carry never become columns.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Copy of this dataset with `column` of row `row_idx` set to `value`.
    /// A key the row does not have yet is appended to that row only.
    pub fn with_cell(&self, row_idx: usize, column: &str, value: String) -> Option<Dataset> {
        if row_idx >= self.rows.len() {
            return None;
        }
        let mut rows = self.rows.clone();
        rows[row_idx].insert(column.to_string(), value);
        Some(Dataset { rows })
    }

    pub fn without_row(&self, row_idx: usize) -> Option<Dataset> {
        if row_idx >= self.rows.len() {
            return None;
        }
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != row_idx)
            .map(|(_, row)| row.clone())
            .collect();
        Some(Dataset { rows })
    }

    pub fn with_empty_row(&self) -> Dataset {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend(self.rows.iter().cloned());
        rows.push(RowRecord::new());
        Dataset { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RowRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn columns_come_from_first_row_only() {
        let dataset = Dataset::from(vec![
            record(&[("name", "Alice"), ("age", "30")]),
            record(&[("name", "Bob"), ("age", "25"), ("city", "Oslo")]),
        ]);

        assert_eq!(dataset.columns(), vec!["name".to_string(), "age".to_string()]);
    }

    #[test]
    fn empty_dataset_has_no_columns() {
        assert!(Dataset::new().columns().is_empty());
    }

    #[test]
    fn with_cell_on_missing_row_is_none() {
        let dataset = Dataset::from(vec![record(&[("a", "1")])]);

        assert_eq!(dataset.with_cell(3, "a", "2".to_string()), None);
        assert_eq!(dataset.without_row(1), None);
    }
}
