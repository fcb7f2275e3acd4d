use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::lockfile::LockFile;
use crate::PersistenceError;

/// Local key-value storage holding named blobs.
///
/// `write` replaces the whole value for a key or fails without touching it.
/// Callers that read, change and write a key hold `lock` for the whole span.
pub trait BlobBackend: Send {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;
    fn write(&self, key: &str, data: &[u8]) -> Result<(), PersistenceError>;
    fn lock(&self, key: &str) -> Result<BlobLock, PersistenceError>;
}

/// Held while a key is being rewritten. Released on drop.
pub struct BlobLock {
    _file: Option<LockFile>,
}

impl BlobLock {
    /// A lock with nothing behind it, for backends that only live in one process.
    pub fn in_process() -> Self {
        Self { _file: None }
    }
}

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read(&path)?))
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        // Atomic write: temp file + rename
        let temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        std::fs::write(temp.path(), data)?;
        temp.persist(&path).map_err(|e| PersistenceError::Io(e.error))?;
        tracing::debug!(key, bytes = data.len(), "blob written");
        Ok(())
    }

    fn lock(&self, key: &str) -> Result<BlobLock, PersistenceError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let file = LockFile::acquire(&path)?.ok_or(PersistenceError::Locked(path))?;
        Ok(BlobLock { _file: Some(file) })
    }
}

/// In-process backend. `fail_writes` makes every write return an io error,
/// which is how the store's failure paths are exercised.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(key: &str, data: &[u8]) -> Self {
        let backend = Self::new();
        backend.insert(key, data);
        backend
    }

    pub fn insert(&self, key: &str, data: &[u8]) {
        self.blobs().insert(key.to_string(), data.to_vec());
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs().get(key).cloned()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn blobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Io(std::io::Error::other(
                "write refused by memory backend",
            )));
        }
        self.insert(key, data);
        Ok(())
    }

    fn lock(&self, _key: &str) -> Result<BlobLock, PersistenceError> {
        Ok(BlobLock::in_process())
    }
}

impl<B: BlobBackend + Sync> BlobBackend for std::sync::Arc<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, data: &[u8]) -> Result<(), PersistenceError> {
        (**self).write(key, data)
    }

    fn lock(&self, key: &str) -> Result<BlobLock, PersistenceError> {
        (**self).lock(key)
    }
}
