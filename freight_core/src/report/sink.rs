//! Document delivery.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::errors::FreightResult;

/// Receives a finished document and hands it to the user.
///
/// The report generator calls `deliver` exactly once per successful render.
pub trait DocumentSink<D> {
    fn deliver(&mut self, document: D, filename: &str) -> FreightResult<()>;
}

/// Keeps delivered documents in memory.
#[derive(Debug, Clone)]
pub struct MemorySink<D> {
    pub delivered: Vec<(String, D)>,
}

impl<D> MemorySink<D> {
    pub fn new() -> Self {
        MemorySink { delivered: Vec::new() }
    }

    pub fn last(&self) -> Option<&(String, D)> {
        self.delivered.last()
    }
}

impl<D> Default for MemorySink<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> DocumentSink<D> for MemorySink<D> {
    fn deliver(&mut self, document: D, filename: &str) -> FreightResult<()> {
        self.delivered.push((filename.to_string(), document));
        Ok(())
    }
}

/// Writes PDF bytes into a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, oldest first
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentSink<Vec<u8>> for FileSink {
    fn deliver(&mut self, document: Vec<u8>, filename: &str) -> FreightResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            crate::errors::FreightError::file_error(
                "create directory",
                self.dir.display().to_string(),
                e.to_string(),
            )
        })?;

        let path = self.dir.join(filename);
        crate::file_io::write_atomic(&path, &document)?;
        tracing::info!(path = %path.display(), bytes = document.len(), "report written");
        self.written.push(path);
        Ok(())
    }
}
