use crate::utils::error::Result;
use std::path::Path;

/// Filesystem operations the relocator needs.
pub trait FileMover {
    /// Creates `dir` and any missing parents. Existing directories are fine.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;

    /// Moves one entry. Fails with `NotFound` when `from` is missing and with
    /// `DestinationCollision` when `to` already exists.
    fn move_file(&self, from: &Path, to: &Path) -> Result<()>;
}

impl<M: FileMover + ?Sized> FileMover for &M {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        (**self).ensure_dir(dir)
    }

    fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        (**self).move_file(from, to)
    }
}
