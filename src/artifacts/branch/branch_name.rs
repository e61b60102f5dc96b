use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> RepositoryResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(RepositoryError::InvalidName(
                "branch name cannot be empty".to_string(),
            ));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX).map_err(|e| {
            RepositoryError::InvalidName(format!("invalid branch name regex: {e}"))
        })?;

        if re.is_match(&name) {
            Err(RepositoryError::InvalidName(format!(
                "invalid branch name: {name}"
            )))
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
