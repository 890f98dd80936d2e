use crate::checklist::{Decoded, Item, ListStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File access for checklist documents
///
/// The core only produces and consumes text; reading and writing files
/// happens here.
pub struct Storage {
    file_path: PathBuf,
    store: ListStore,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>, store: ListStore) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            store,
        }
    }

    /// Default document path
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the default document, treating a missing file as an empty list
    pub fn load(&self) -> Result<Decoded> {
        if !self.file_path.exists() {
            return Ok(Decoded {
                items: Vec::new(),
                skipped: 0,
            });
        }
        self.read_from(&self.file_path)
    }

    /// Read and decode the document at `path`
    pub fn read_from(&self, path: &Path) -> Result<Decoded> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let decoded = self
            .store
            .decode(&content)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        log::info!(
            "event=list_open status=ok path={} items={} skipped={}",
            path.display(),
            decoded.items.len(),
            decoded.skipped
        );
        Ok(decoded)
    }

    /// Encode `items` and write them to the document at `path`
    pub fn write_to(&self, path: &Path, items: &[Item]) -> Result<()> {
        let content = self.store.serialize(items)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!(
            "event=list_save status=ok path={} items={}",
            path.display(),
            items.len()
        );
        Ok(())
    }

    /// Write `items` to the default document
    pub fn save(&self, items: &[Item]) -> Result<()> {
        self.write_to(&self.file_path, items)
    }
}
