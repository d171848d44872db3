//! The install, login and command stages of one run.

use crate::config::{ActionConfig, CLI_BINARY, CLI_PACKAGE, INSTALLER};
use crate::error::{ActionError, Result};
use crate::exec::{self, Executor};
use crate::report::Reporter;
use crate::runner::CommandRunner;
use std::io::Write;
use std::path::Path;

/// Install the CLI, log in, then run the configured batch.
///
/// Each stage only starts once the previous one succeeded. The caller is
/// responsible for reporting the outcome.
///
/// # Errors
///
/// Returns the error of the first stage that fails: installation, login, or
/// one of the commands.
pub fn run<E: Executor, W: Write>(
    config: &ActionConfig,
    executor: &mut E,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    reporter.add_mask(config.token())?;

    install(executor, reporter)?;
    login(config, executor, reporter)?;

    CommandRunner::new(CLI_BINARY, &config.workdir, executor, reporter).run(&config.commands)
}

fn install<E: Executor, W: Write>(executor: &mut E, reporter: &mut Reporter<W>) -> Result<()> {
    reporter.info(&format!("📦 Installing {CLI_PACKAGE}..."))?;
    let args = vec![
        "install".to_string(),
        "-g".to_string(),
        CLI_PACKAGE.to_string(),
    ];
    reporter.info(&exec::command_line(INSTALLER, &args))?;

    tracing::debug!(package = CLI_PACKAGE, "installing");
    executor
        .exec(INSTALLER, &args, Path::new("."))
        .map_err(ActionError::Install)?;

    reporter.info("✓ Installation complete")?;
    Ok(())
}

fn login<E: Executor, W: Write>(
    config: &ActionConfig,
    executor: &mut E,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    reporter.info("🔐 Logging in to ShardCloud...")?;
    let args = vec!["login".to_string(), format!("--token={}", config.token())];
    let echo = reporter.redact(&exec::command_line(CLI_BINARY, &args));
    reporter.info(&echo)?;

    tracing::debug!(workdir = %config.workdir.display(), "logging in");
    executor
        .exec(CLI_BINARY, &args, &config.workdir)
        .map_err(ActionError::Login)?;

    reporter.info("✓ Login successful")?;
    Ok(())
}
