//! Sequential, fail-fast execution of a command batch.

use crate::batch::CommandBatch;
use crate::error::{ActionError, Result};
use crate::exec::{self, Executor};
use crate::report::Reporter;
use std::io::Write;
use std::path::Path;

/// Runs every invocation of a batch against one tool, in order.
pub struct CommandRunner<'a, E: Executor, W: Write> {
    tool: &'a str,
    workdir: &'a Path,
    executor: &'a mut E,
    reporter: &'a mut Reporter<W>,
}

impl<'a, E: Executor, W: Write> CommandRunner<'a, E, W> {
    #[must_use]
    pub fn new(
        tool: &'a str,
        workdir: &'a Path,
        executor: &'a mut E,
        reporter: &'a mut Reporter<W>,
    ) -> Self {
        Self {
            tool,
            workdir,
            executor,
            reporter,
        }
    }

    /// Execute the batch, stopping at the first invocation that fails.
    ///
    /// Invocations that already completed are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Command`] for the first invocation that fails,
    /// or [`ActionError::Report`] if the log cannot be written.
    pub fn run(&mut self, batch: &CommandBatch) -> Result<()> {
        if batch.is_empty() {
            self.reporter
                .info("ℹ️ No commands specified, skipping execution")?;
            return Ok(());
        }

        self.reporter.info("🚀 Executing commands...")?;
        let total = batch.len();

        for (index, invocation) in batch.invocations() {
            let command = self.reporter.redact(invocation.line);
            self.reporter
                .info(&format!("Executing command {index}/{total}: {command}"))?;

            let argv = invocation.argv();
            let echo = self.reporter.redact(&exec::command_line(self.tool, &argv));
            self.reporter.info(&echo)?;

            tracing::debug!(index, total, head = invocation.head, "running command");
            if let Err(source) = self.executor.exec(self.tool, &argv, self.workdir) {
                return Err(ActionError::Command {
                    index,
                    total,
                    command,
                    source,
                });
            }

            self.reporter.info(&format!("✓ Command {index} completed"))?;
        }

        self.reporter.info("✓ All commands executed successfully")?;
        Ok(())
    }
}
