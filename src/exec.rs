//! Spawning external processes.

use crate::error::ExecError;
use std::path::Path;
use std::process::Command;

/// Runs one external program to completion.
///
/// Implementations block until the process exits and report a non-zero exit
/// status as an error.
pub trait Executor {
    /// Run `program` with `args` in `cwd` and wait for it to exit.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the program cannot be found or spawned, or exits
    /// with anything but status 0.
    fn exec(&mut self, program: &str, args: &[String], cwd: &Path) -> Result<(), ExecError>;
}

/// Executes programs found on `PATH`, with stdio inherited from this process.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn exec(&mut self, program: &str, args: &[String], cwd: &Path) -> Result<(), ExecError> {
        let resolved = which::which(program).map_err(|source| ExecError::NotFound {
            program: program.to_string(),
            source,
        })?;
        let program_display = resolved.display().to_string();
        tracing::debug!(program = %program_display, cwd = %cwd.display(), argc = args.len(), "spawning");

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| ExecError::Spawn {
                program: program_display.clone(),
                source,
            })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => {
                tracing::debug!(program = %program_display, code, "process failed");
                Err(ExecError::Failed {
                    program: program_display,
                    code,
                })
            }
            None => Err(ExecError::Terminated { program: program_display }),
        }
    }
}

/// Render a command line for the log, the way the runner echoes it.
#[must_use]
pub fn command_line(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        format!("[command]{program}")
    } else {
        format!("[command]{program} {}", args.join(" "))
    }
}
