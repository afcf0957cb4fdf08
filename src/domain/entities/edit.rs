use crate::domain::entities::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_idx: usize,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEdit {
    EditCell { key: CellKey, value: String },
    DeleteRow { row_idx: usize },
    AddRow,
}

impl GridEdit {
    /// Returns the edited copy, or `None` when the edit addresses a row
    /// that does not exist.
    pub fn apply_to(&self, dataset: &Dataset) -> Option<Dataset> {
        match self {
            GridEdit::EditCell { key, value } => {
                dataset.with_cell(key.row_idx, &key.column, value.clone())
            }
            GridEdit::DeleteRow { row_idx } => dataset.without_row(*row_idx),
            GridEdit::AddRow => Some(dataset.with_empty_row()),
        }
    }
}
