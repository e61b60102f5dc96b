use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use std::path::PathBuf;
use tracing::warn;

impl Repository {
    pub fn add(&mut self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let mut index = self.index();

        // Load the staging file from the disk
        index.rehydrate()?;

        for path in paths {
            let tree_path = self.workspace().relative_path(path)?;

            if self.workspace().is_dir(&tree_path) {
                for file in self.workspace().list_files(&tree_path)? {
                    let content = self.workspace().read_file(&file)?;
                    if content.is_empty() {
                        warn!(path = %file, "skipping empty file");
                        continue;
                    }

                    self.stage_content(&mut index, &file, content)?;
                    writeln!(self.writer(), "added {file}")?;
                }
            } else {
                let content = self.workspace().read_file(&tree_path)?;
                self.stage_content(&mut index, &tree_path, content)?;
                writeln!(self.writer(), "added {tree_path}")?;
            }
        }

        index.write_updates()?;

        Ok(())
    }

    /// Store `content` and stage it under `tree_path`, empty content is rejected
    pub fn stage_content(
        &self,
        index: &mut Index,
        tree_path: &str,
        content: Bytes,
    ) -> RepositoryResult<ObjectId> {
        let blob = Blob::new(content);
        if blob.is_empty() {
            return Err(RepositoryError::EmptyInput(format!("{tree_path} is empty")));
        }

        let blob_id = self.database().store(&blob)?;
        index.add(tree_path, blob_id.clone());

        Ok(blob_id)
    }
}
