use std::path::{Path, PathBuf};

const STORE_DIR: &str = ".washbook";

/// Find the store root by walking up from `start`.
pub fn find_store_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(STORE_DIR).is_dir() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Per-user fallback location when no store is found above the current directory.
pub fn default_store_root() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("could not find a local data directory"))?;
    Ok(base.join("washbook"))
}
