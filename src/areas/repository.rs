use crate::areas::commit_log::CommitLog;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::config::RepositoryConfig;
use crate::errors::{ObjectKind, RepositoryError};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub const OBJECTS_DIR: &str = "objects";
pub const COMMITS_FILE: &str = "commits.txt";
pub const STAGING_FILE: &str = "staging.txt";

/// Explicit context value owning every persisted collection of one repository
pub struct Repository {
    config: RepositoryConfig,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    commit_log: CommitLog,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Build the context for the working tree at `config.root`, creating the root if needed.
    ///
    /// Nothing inside the metadata directory is touched, see [`Repository::open`] for a
    /// repository that must already be initialized.
    pub fn new(
        mut config: RepositoryConfig,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if !config.root.exists() {
            std::fs::create_dir_all(&config.root).with_context(|| {
                format!("failed to create directory {}", config.root.display())
            })?;
        }
        config.root = config
            .root
            .canonicalize()
            .with_context(|| format!("failed to resolve {}", config.root.display()))?;

        let metadata_path = config.metadata_path();
        let index = Index::new(metadata_path.join(STAGING_FILE).into_boxed_path());
        let database = Database::new(metadata_path.join(OBJECTS_DIR).into_boxed_path());
        let commit_log = CommitLog::new(metadata_path.join(COMMITS_FILE).into_boxed_path());
        let refs = Refs::new(metadata_path.into_boxed_path());
        let workspace = Workspace::new(config.root.clone().into_boxed_path());

        Ok(Repository {
            config,
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            commit_log,
            workspace,
            refs,
        })
    }

    /// Build the context for an initialized repository
    pub fn open(config: RepositoryConfig, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let repository = Self::new(config, writer)?;

        if !repository.is_initialized() {
            return Err(RepositoryError::not_found(
                ObjectKind::Repository,
                repository.path().display(),
            )
            .into());
        }

        Ok(repository)
    }

    pub fn is_initialized(&self) -> bool {
        self.config.metadata_path().is_dir()
    }

    pub fn path(&self) -> &Path {
        self.config.root()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn commit_log(&self) -> &CommitLog {
        &self.commit_log
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
