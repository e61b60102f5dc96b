//! Working tree access
//!
//! Paths handed to the rest of the crate are relative to the working-tree root and
//! use `/` as separator, which is also how they appear in manifests and staging lines.

use crate::config::METADATA_DIR;
use crate::errors::{ObjectKind, RepositoryError, RepositoryResult};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [METADATA_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user supplied path into a working-tree relative one.
    ///
    /// The path must exist and lie inside the working tree, outside the metadata directory.
    pub fn relative_path(&self, path: &Path) -> RepositoryResult<String> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        let canonical = match absolute.canonicalize() {
            Ok(canonical) => canonical,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::not_found(
                    ObjectKind::Path,
                    path.display(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let relative = canonical.strip_prefix(&self.path).map_err(|_| {
            RepositoryError::InvalidName(format!(
                "{} is outside the working tree",
                path.display()
            ))
        })?;

        Self::to_tree_path(relative)
    }

    fn to_tree_path(relative: &Path) -> RepositoryResult<String> {
        let components = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => Ok(name.to_string_lossy().to_string()),
                _ => Err(RepositoryError::InvalidName(format!(
                    "unsupported path {}",
                    relative.display()
                ))),
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        if Self::is_ignored(relative) {
            return Err(RepositoryError::InvalidName(format!(
                "{} is inside the repository metadata",
                relative.display()
            )));
        }

        let tree_path = components.join("/");
        if tree_path.contains('\n') {
            return Err(RepositoryError::InvalidName(format!(
                "path {tree_path:?} contains a newline"
            )));
        }

        Ok(tree_path)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                IGNORED_PATHS.contains(&&*name.to_string_lossy())
            } else {
                false
            }
        })
    }

    fn absolute(&self, tree_path: &str) -> PathBuf {
        self.path.join(tree_path)
    }

    pub fn is_dir(&self, tree_path: &str) -> bool {
        self.absolute(tree_path).is_dir()
    }

    /// Every file below `tree_path` (the whole tree when empty), sorted, metadata excluded
    pub fn list_files(&self, tree_path: &str) -> RepositoryResult<Vec<String>> {
        let root = self.absolute(tree_path);
        if !root.exists() {
            return Err(RepositoryError::not_found(ObjectKind::Path, tree_path));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root).into_iter().filter_entry(|entry| {
            let relative = entry.path().strip_prefix(&self.path).unwrap_or(entry.path());
            !Self::is_ignored(relative)
        });

        for entry in walker {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .map(RepositoryError::from)
                    .unwrap_or_else(|| RepositoryError::InvalidName("filesystem loop".to_string()))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.path) {
                files.push(Self::to_tree_path(relative)?);
            }
        }
        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, tree_path: &str) -> RepositoryResult<Bytes> {
        match std::fs::read(self.absolute(tree_path)) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::not_found(ObjectKind::Path, tree_path))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fail if writing `tree_path` would have to replace a directory, or if one of its
    /// parents is an existing file
    pub fn check_writable(&self, tree_path: &str) -> RepositoryResult<()> {
        if self.is_dir(tree_path) {
            return Err(RepositoryError::already_exists(ObjectKind::Path, tree_path));
        }

        let mut parent = String::new();
        let mut components = tree_path.split('/').peekable();
        while let Some(component) = components.next() {
            if components.peek().is_none() {
                break;
            }
            if !parent.is_empty() {
                parent.push('/');
            }
            parent.push_str(component);

            let absolute = self.absolute(&parent);
            if absolute.exists() && !absolute.is_dir() {
                return Err(RepositoryError::already_exists(ObjectKind::Path, &parent));
            }
        }

        Ok(())
    }

    /// Overwrite `tree_path` with `content`, creating parent directories as needed
    pub fn write_file(&self, tree_path: &str, content: &[u8]) -> RepositoryResult<()> {
        self.check_writable(tree_path)?;
        let path = self.absolute(tree_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;

        Ok(())
    }
}
