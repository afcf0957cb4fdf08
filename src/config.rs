use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::{ProjectDirs, UserDirs};

pub const EXPORT_FILE_NAME: &str = "edited_data.csv";
pub const CSV_FILTER_EXTENSIONS: &[&str] = &["csv"];
pub const LOG_FILE_NAME: &str = "csv-manager.log";

/// Directories the app reads from or writes to, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub webview_data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub download_dir: PathBuf,
}

impl AppPaths {
    pub fn resolve() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "hellhbbd", "csv-manager")
            .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
        let data_dir = project_dirs.data_local_dir().to_path_buf();
        let download_dir = UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| data_dir.join("downloads"));
        Ok(Self::under(data_dir, download_dir))
    }

    pub fn under(data_dir: PathBuf, download_dir: PathBuf) -> Self {
        Self {
            webview_data_dir: data_dir.join("webview2"),
            log_dir: data_dir.join("logs"),
            data_dir,
            download_dir,
        }
    }

    pub fn ensure_webview_data_dir(&self) -> Result<&Path> {
        ensure_dir(&self.webview_data_dir)?;
        Ok(&self.webview_data_dir)
    }

    pub fn ensure_log_dir(&self) -> Result<&Path> {
        ensure_dir(&self.log_dir)?;
        Ok(&self.log_dir)
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create dir: {}", dir.display()))
}
