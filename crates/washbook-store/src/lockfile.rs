use std::path::{Path, PathBuf};

/// Exclusive marker held while the blob is being replaced. A second writer
/// sees the marker and backs off instead of racing the rename.
pub struct LockFile {
    path: PathBuf,
    _handle: std::fs::File,
}

impl LockFile {
    /// Returns `Ok(None)` when another writer holds the lock.
    pub fn acquire(target: &Path) -> std::io::Result<Option<Self>> {
        let lock_path = target.with_extension("lock");
        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(handle) => Ok(Some(Self {
                path: lock_path,
                _handle: handle,
            })),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
