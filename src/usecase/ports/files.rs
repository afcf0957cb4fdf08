use std::path::{Path, PathBuf};

use crate::domain::entities::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    NoFileSelected,
    Parse(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::NoFileSelected => write!(f, "no file selected"),
            ImportError::Parse(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Turns a local file into rows keyed by its header line.
pub trait DatasetSource: Send + Sync {
    fn read_dataset(&self, path: &Path) -> anyhow::Result<Dataset>;
}

/// Delivers finished bytes to the user under `file_name` and reports where
/// they ended up.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf>;
}
