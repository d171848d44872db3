//! Action inputs and their validation.

use crate::batch::CommandBatch;
use crate::error::{ActionError, Result};
use std::path::PathBuf;

/// npm package that provides the CLI.
pub const CLI_PACKAGE: &str = "shard-cloud-cli";

/// Executable installed by [`CLI_PACKAGE`].
pub const CLI_BINARY: &str = "shardcloud";

/// Package manager used for the global install.
pub const INSTALLER: &str = "npm";

/// Working directory used when `workdir` is not supplied.
pub const DEFAULT_WORKDIR: &str = ".";

/// Validated inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    token: String,
    pub commands: CommandBatch,
    pub workdir: PathBuf,
}

impl ActionConfig {
    /// Build a config from raw input values.
    ///
    /// Values are trimmed, and a value that is empty after trimming counts as
    /// not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] if no token is supplied.
    pub fn from_inputs(
        token: Option<&str>,
        commands: Option<&str>,
        workdir: Option<&str>,
    ) -> Result<Self> {
        let token = supplied(token).ok_or(ActionError::MissingInput("token"))?;
        let commands = supplied(commands)
            .map(CommandBatch::parse)
            .unwrap_or_default();
        let workdir = PathBuf::from(supplied(workdir).unwrap_or(DEFAULT_WORKDIR));

        Ok(Self {
            token: token.to_string(),
            commands,
            workdir,
        })
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_token_is_rejected() {
        let err = ActionConfig::from_inputs(None, Some("status"), None).unwrap_err();
        assert!(matches!(err, ActionError::MissingInput("token")));
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let err = ActionConfig::from_inputs(Some("   "), None, None).unwrap_err();
        assert!(matches!(err, ActionError::MissingInput("token")));
    }

    #[test]
    fn test_defaults() {
        let config = ActionConfig::from_inputs(Some("tok"), None, None).unwrap();
        assert_eq!(config.token(), "tok");
        assert!(config.commands.is_empty());
        assert_eq!(config.workdir, PathBuf::from("."));
    }

    #[test]
    fn test_values_are_trimmed() {
        let config =
            ActionConfig::from_inputs(Some(" tok \n"), Some("\n status \n"), Some("  app/ "))
                .unwrap();
        assert_eq!(config.token(), "tok");
        assert_eq!(config.commands.lines(), &["status"]);
        assert_eq!(config.workdir, PathBuf::from("app/"));
    }

    #[test]
    fn test_blank_workdir_falls_back_to_default() {
        let config = ActionConfig::from_inputs(Some("tok"), None, Some("")).unwrap();
        assert_eq!(config.workdir, PathBuf::from(DEFAULT_WORKDIR));
    }
}
