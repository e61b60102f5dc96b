use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;

impl Repository {
    /// Create `branch_name` when given, list the branches otherwise
    pub fn branch(&mut self, branch_name: Option<&str>) -> anyhow::Result<()> {
        match branch_name {
            Some(branch_name) => {
                self.create_branch(branch_name)?;
            }
            None => self.list_branches()?,
        }

        Ok(())
    }

    /// Add a branch pointing at the current branch's tip
    pub fn create_branch(&self, branch_name: &str) -> anyhow::Result<BranchName> {
        let branch_name = BranchName::try_parse(branch_name)?;
        let (_, source_oid) = self.refs().current_tip()?;

        self.refs()
            .create_branch(&branch_name, source_oid.clone())?;

        match source_oid {
            Some(oid) => writeln!(
                self.writer(),
                "Created branch '{}' at {}",
                branch_name,
                oid.to_short_oid().yellow()
            )?,
            None => writeln!(
                self.writer(),
                "Created branch '{}' with no commits",
                branch_name
            )?,
        }

        Ok(branch_name)
    }

    pub fn list_branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current()?;

        for (branch_name, _) in self.refs().list_branches()? {
            if branch_name == current {
                writeln!(self.writer(), "* {}", branch_name.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch_name)?;
            }
        }

        Ok(())
    }
}
