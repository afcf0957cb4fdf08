use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::dataset::Dataset;
use crate::usecase::ports::files::{DatasetSource, ImportError};

pub struct ImportService {
    source: Arc<dyn DatasetSource>,
}

impl ImportService {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// All-or-nothing: either every data line becomes a row or an error is
    /// returned and nothing is produced.
    pub fn import(&self, path: Option<&Path>) -> Result<Dataset, ImportError> {
        let Some(path) = path else {
            tracing::warn!("upload requested without a selected file");
            return Err(ImportError::NoFileSelected);
        };

        match self.source.read_dataset(path) {
            Ok(dataset) => {
                tracing::info!(path = %path.display(), rows = dataset.len(), "csv imported");
                Ok(dataset)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = ?err, "csv import failed");
                Err(ImportError::Parse(format!("{err:#}")))
            }
        }
    }
}
