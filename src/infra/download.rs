use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::usecase::ports::files::DownloadSink;

/// Saves downloads into one directory, never overwriting an existing file.
pub struct DirectoryDownloadSink {
    pub dir: PathBuf,
}

impl DownloadSink for DirectoryDownloadSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create download dir: {}", self.dir.display()))?;

        let mut staged = StagedDownload::acquire(&self.dir, file_name)?;
        staged.write_all(bytes)?;
        let target = next_free_path(&self.dir, file_name);
        staged.commit(&target)?;

        tracing::info!(path = %target.display(), bytes = bytes.len(), "download saved");
        Ok(target)
    }
}

/// Hidden staging file that is removed on drop unless committed.
pub struct StagedDownload {
    path: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl StagedDownload {
    pub fn acquire(dir: &Path, file_name: &str) -> Result<Self> {
        let path = dir.join(format!(".{file_name}.part"));
        let file = File::create(&path)
            .with_context(|| format!("failed to create staging file: {}", path.display()))?;
        Ok(Self {
            path,
            file: Some(file),
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .context("staging file already closed")?;
        file.write_all(bytes)
            .with_context(|| format!("failed to write staging file: {}", self.path.display()))?;
        file.sync_all()
            .with_context(|| format!("failed to sync staging file: {}", self.path.display()))
    }

    pub fn commit(mut self, target: &Path) -> Result<()> {
        self.file.take();
        fs::rename(&self.path, target).with_context(|| {
            format!(
                "failed to move {} to {}",
                self.path.display(),
                target.display()
            )
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedDownload {
    fn drop(&mut self) {
        self.file.take();
        if !self.committed {
            if let Err(err) = fs::remove_file(&self.path) {
                tracing::warn!(path = %self.path.display(), %err, "failed to remove staging file");
            }
        }
    }
}

/// `name.csv`, then `name (1).csv`, `name (2).csv`, ... like a browser does.
pub fn next_free_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let as_path = Path::new(file_name);
    let stem = as_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let ext = as_path.extension().and_then(|e| e.to_str());

    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
