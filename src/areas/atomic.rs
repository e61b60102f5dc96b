//! Crash-safe file writes shared by the persisted collections

use crate::errors::RepositoryResult;
use fake::rand;
use file_guard::Lock;
use std::io::Write;
use std::path::{Path, PathBuf};

fn generate_temp_name(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    target.with_file_name(format!(".{file_name}.tmp-{}", rand::random::<u32>()))
}

/// Replace `path` with `content` by writing a sibling temp file and renaming it into place
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> RepositoryResult<()> {
    let temp_path = generate_temp_name(path);

    let result = (|| -> RepositoryResult<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)?;
        file.write_all(content)?;
        file.sync_all()?;

        std::fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }

    result
}

/// Run `f` while holding an exclusive advisory lock on `lock_path`
pub(crate) fn with_exclusive_lock<T>(
    lock_path: &Path,
    f: impl FnOnce() -> RepositoryResult<T>,
) -> RepositoryResult<T> {
    let mut lock_file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;
    let _lock = file_guard::lock(&mut lock_file, Lock::Exclusive, 0, 1)?;

    f()
}

pub(crate) fn lock_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    path.with_file_name(format!("{file_name}.lock"))
}
