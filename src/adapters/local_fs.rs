use crate::domain::ports::FileMover;
use crate::utils::error::{RelocateError, Result};
use std::fs::{self, Metadata};
use std::io::{self, ErrorKind};
use std::path::Path;

/// `FileMover` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileMover for LocalFs {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| RelocateError::from_io(dir, e))
    }

    fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        move_with(from, to, |from, to| fs::rename(from, to))
    }
}

/// `move_file` with the rename step injected, so the cross-device branch can be
/// driven without a second filesystem.
pub(crate) fn move_with<R>(from: &Path, to: &Path, rename: R) -> Result<()>
where
    R: FnOnce(&Path, &Path) -> io::Result<()>,
{
    // symlink_metadata 才不會跟著斷掉的連結走
    let meta = fs::symlink_metadata(from).map_err(|e| RelocateError::from_move_io(from, e))?;

    if fs::symlink_metadata(to).is_ok() {
        return Err(RelocateError::DestinationCollision {
            path: to.to_path_buf(),
        });
    }

    match rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::CrossesDevices => {
            tracing::debug!(
                "rename crosses devices, copying {} -> {}",
                from.display(),
                to.display()
            );
            copy_then_remove(from, to, &meta)
        }
        // source was just stat'ed, so a missing path here is the destination's parent
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Err(RelocateError::from_move_io(to, err))
        }
        Err(err) => Err(RelocateError::from_move_io(from, err)),
    }
}

/// Fallback for moves between filesystems: copy everything, then delete the source.
pub(crate) fn copy_then_remove(from: &Path, to: &Path, meta: &Metadata) -> Result<()> {
    copy_path(from, to)?;

    if meta.is_dir() {
        fs::remove_dir_all(from).map_err(|e| RelocateError::from_move_io(from, e))
    } else {
        fs::remove_file(from).map_err(|e| RelocateError::from_move_io(from, e))
    }
}

fn copy_path(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(src).map_err(|e| RelocateError::from_move_io(src, e))?;

    if meta.file_type().is_dir() {
        fs::create_dir(dst).map_err(|e| RelocateError::from_move_io(dst, e))?;
        for entry in fs::read_dir(src).map_err(|e| RelocateError::from_move_io(src, e))? {
            let entry = entry.map_err(|e| RelocateError::from_move_io(src, e))?;
            copy_path(&entry.path(), &dst.join(entry.file_name()))?;
        }
        fs::set_permissions(dst, meta.permissions()).map_err(|e| RelocateError::from_move_io(dst, e))?;
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        let file_type = meta.file_type();
        if file_type.is_symlink() {
            let target = fs::read_link(src).map_err(|e| RelocateError::from_move_io(src, e))?;
            std::os::unix::fs::symlink(target, dst).map_err(|e| RelocateError::from_move_io(dst, e))?;
            return Ok(());
        }
        if file_type.is_block_device()
            || file_type.is_char_device()
            || file_type.is_fifo()
            || file_type.is_socket()
        {
            return Err(RelocateError::MoveFailed {
                path: src.to_path_buf(),
                source: io::Error::new(
                    ErrorKind::Unsupported,
                    "special files cannot be copied across filesystems",
                ),
            });
        }
    }

    // fs::copy 會一併複製權限位元
    fs::copy(src, dst).map_err(|e| RelocateError::from_move_io(dst, e))?;
    Ok(())
}
