//! Repository configuration
//!
//! Settings come from the environment first and can be overridden by command-line
//! flags. Nothing here is persisted inside the repository.

use crate::artifacts::diff::diff_algorithm::DiffAlgorithmKind;
use crate::observability::{LogConfig, LogFormat};
use anyhow::Context;
use chrono::{DateTime, FixedOffset, Timelike};
use std::path::{Path, PathBuf};

pub const METADATA_DIR: &str = ".minigit";
pub const DEFAULT_BRANCH: &str = "main";

pub const DEFAULT_BRANCH_ENV: &str = "MINIGIT_DEFAULT_BRANCH";
pub const DIFF_ALGORITHM_ENV: &str = "MINIGIT_DIFF_ALGORITHM";
pub const COMMIT_DATE_ENV: &str = "MINIGIT_COMMIT_DATE";
pub const LOG_LEVEL_ENV: &str = "MINIGIT_LOG";
pub const LOG_FORMAT_ENV: &str = "MINIGIT_LOG_FORMAT";

#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Root of the working tree
    pub root: PathBuf,
    /// Branch created by `init` and selected as current
    pub default_branch: String,
    /// Line diff used for changed files
    pub diff_algorithm: DiffAlgorithmKind,
    /// Fixed timestamp for new commits, current time when absent
    pub commit_date: Option<DateTime<FixedOffset>>,
    pub log: LogConfig,
}

impl RepositoryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        RepositoryConfig {
            root: root.into(),
            default_branch: DEFAULT_BRANCH.to_string(),
            diff_algorithm: DiffAlgorithmKind::default(),
            commit_date: None,
            log: LogConfig::default(),
        }
    }

    /// Build a configuration for `root` from the `MINIGIT_*` environment variables
    pub fn load_from_env(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let mut config = Self::new(root);

        if let Ok(branch) = std::env::var(DEFAULT_BRANCH_ENV) {
            config.default_branch = branch.trim().to_string();
        }

        if let Ok(algorithm) = std::env::var(DIFF_ALGORITHM_ENV) {
            config.diff_algorithm = DiffAlgorithmKind::try_parse(&algorithm)?;
        }

        if let Ok(date) = std::env::var(COMMIT_DATE_ENV) {
            config.commit_date = Some(
                parse_commit_date(&date)
                    .with_context(|| format!("{COMMIT_DATE_ENV} is not a valid date"))?,
            );
        }

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            config.log.level = level.trim().to_string();
        }

        if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
            config.log.format = LogFormat::try_parse(&format)?;
        }

        Ok(config)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Timestamp for a commit created now, truncated to whole seconds
    pub fn now(&self) -> DateTime<FixedOffset> {
        let timestamp = self
            .commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset());

        timestamp.with_nanosecond(0).unwrap_or(timestamp)
    }
}

/// Accepts RFC 3339 or `%Y-%m-%d %H:%M:%S %z`
pub fn parse_commit_date(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let raw = raw.trim();

    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))
        .with_context(|| format!("unrecognized date format: {raw}"))
}
