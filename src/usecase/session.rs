use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::files::ImportError;
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::ImportService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn for_import(result: &Result<usize, ImportError>) -> Self {
        match result {
            Ok(_) => Notice {
                level: NoticeLevel::Success,
                message: "File uploaded successfully.".to_string(),
            },
            Err(ImportError::NoFileSelected) => Notice {
                level: NoticeLevel::Warning,
                message: "Please select a file to upload.".to_string(),
            },
            Err(ImportError::Parse(_)) => Notice {
                level: NoticeLevel::Error,
                message: "Error parsing CSV file.".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub result: Result<usize, ImportError>,
    pub notice: Notice,
}

/// Owns the rows being edited and the file picked for the next upload.
pub struct CsvSession {
    dataset: Dataset,
    selected_file: Option<PathBuf>,
    import_service: Arc<ImportService>,
    edit_service: Arc<EditService>,
    export_service: Arc<ExportService>,
}

impl CsvSession {
    pub fn new(
        import_service: Arc<ImportService>,
        edit_service: Arc<EditService>,
        export_service: Arc<ExportService>,
    ) -> Self {
        Self {
            dataset: Dataset::new(),
            selected_file: None,
            import_service,
            edit_service,
            export_service,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn columns(&self) -> Vec<String> {
        self.dataset.columns()
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn select_file(&mut self, path: PathBuf) {
        tracing::debug!(path = %path.display(), "file selected");
        self.selected_file = Some(path);
    }

    /// Replaces the rows with the selected file's contents. On any error the
    /// current rows stay untouched. The selection is kept either way.
    pub fn upload(&mut self) -> UploadOutcome {
        let result = self
            .import_service
            .import(self.selected_file.as_deref())
            .map(|dataset| {
                let row_count = dataset.len();
                self.dataset = dataset;
                row_count
            });
        let notice = Notice::for_import(&result);
        UploadOutcome { result, notice }
    }

    pub fn edit_cell(&mut self, row_idx: usize, column: &str, value: String) {
        self.dataset = self
            .edit_service
            .edit_cell(&self.dataset, row_idx, column, value);
    }

    pub fn delete_row(&mut self, row_idx: usize) {
        self.dataset = self.edit_service.delete_row(&self.dataset, row_idx);
    }

    pub fn add_row(&mut self) {
        self.dataset = self.edit_service.add_row(&self.dataset);
    }

    pub fn download(&self) -> Result<PathBuf> {
        self.export_service.export(&self.dataset)
    }
}
