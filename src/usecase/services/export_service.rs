use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::config::EXPORT_FILE_NAME;
use crate::domain::entities::dataset::Dataset;
use crate::infra::csv_io::writer::write_dataset;
use crate::usecase::ports::files::DownloadSink;

pub struct ExportService {
    sink: Arc<dyn DownloadSink>,
}

impl ExportService {
    pub fn new(sink: Arc<dyn DownloadSink>) -> Self {
        Self { sink }
    }

    pub fn export(&self, dataset: &Dataset) -> Result<PathBuf> {
        let bytes = write_dataset(dataset)?;
        self.sink.deliver(EXPORT_FILE_NAME, &bytes)
    }
}
