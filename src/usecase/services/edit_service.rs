use crate::domain::entities::dataset::Dataset;
use crate::domain::entities::edit::{CellKey, GridEdit};

/// Row and cell mutations. Every call returns a new dataset; an index past
/// the end leaves the rows as they were.
pub struct EditService;

impl EditService {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, dataset: &Dataset, edit: GridEdit) -> Dataset {
        match edit.apply_to(dataset) {
            Some(next) => next,
            None => {
                tracing::debug!(?edit, rows = dataset.len(), "edit ignored, row out of range");
                dataset.clone()
            }
        }
    }

    pub fn edit_cell(
        &self,
        dataset: &Dataset,
        row_idx: usize,
        column: &str,
        value: String,
    ) -> Dataset {
        let key = CellKey {
            row_idx,
            column: column.to_string(),
        };
        self.apply(dataset, GridEdit::EditCell { key, value })
    }

    pub fn delete_row(&self, dataset: &Dataset, row_idx: usize) -> Dataset {
        self.apply(dataset, GridEdit::DeleteRow { row_idx })
    }

    pub fn add_row(&self, dataset: &Dataset) -> Dataset {
        self.apply(dataset, GridEdit::AddRow)
    }
}

impl Default for EditService {
    fn default() -> Self {
        Self::new()
    }
}
