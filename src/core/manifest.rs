use crate::utils::error::{RelocateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the list of names to relocate comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Names given directly, used in the given order.
    Explicit(Vec<String>),
    /// Every entry name found in this directory.
    ListDir(PathBuf),
}

impl FileSource {
    pub fn resolve(&self) -> Result<Vec<String>> {
        match self {
            FileSource::Explicit(names) => Ok(names.clone()),
            FileSource::ListDir(dir) => list_dir_names(dir),
        }
    }
}

impl Default for FileSource {
    fn default() -> Self {
        FileSource::Explicit(Vec::new())
    }
}

/// Lists the entry names of `dir`, subdirectories included, sorted.
pub fn list_dir_names(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| RelocateError::from_io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RelocateError::from_io(dir, e))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|raw| RelocateError::ValidationError {
                message: format!(
                    "Entry {:?} in {} is not valid UTF-8",
                    raw,
                    dir.display()
                ),
            })?;
        names.push(name);
    }

    // read_dir 順序由平台決定，排序後每次執行結果一致
    names.sort();
    tracing::debug!("Listed {} entries from {}", names.len(), dir.display());
    Ok(names)
}
