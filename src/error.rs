//! Error types for the install, login and command stages.

use std::io;

/// Failure of a single external process.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Unable to locate executable file: {program}. Please verify the file path exists or the file can be found within a directory specified by the PATH environment variable.")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("The process '{program}' failed with exit code {code}")]
    Failed { program: String, code: i32 },

    #[error("The process '{program}' was terminated without an exit code")]
    Terminated { program: String },
}

/// Any failure that aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("Installation failed: {0}")]
    Install(#[source] ExecError),

    #[error("Login failed: {0}")]
    Login(#[source] ExecError),

    #[error("Command {index}/{total} failed ({command}): {source}")]
    Command {
        index: usize,
        total: usize,
        command: String,
        #[source]
        source: ExecError,
    },

    #[error("Failed to write to the runner: {0}")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;
