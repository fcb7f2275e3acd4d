use std::path::{Path, PathBuf};

use crate::StoreError;

#[derive(Debug, Clone)]
pub struct StoreLayout {
    root: PathBuf,
}

impl StoreLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store_dir(&self) -> PathBuf {
        self.root.join(".washbook")
    }

    pub fn config_file(&self) -> PathBuf {
        self.store_dir().join("store.toml")
    }

    pub fn kv_dir(&self) -> PathBuf {
        self.store_dir().join("kv")
    }

    pub fn create_dirs(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(self.kv_dir())?;
        Ok(())
    }
}
