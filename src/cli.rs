//! CLI entry point and the single place where a run's outcome is reported.

use crate::config::ActionConfig;
use crate::error::Result;
use crate::exec::SystemExecutor;
use crate::report::Reporter;
use crate::{action, logging};
use clap::Parser as ClapParser;
use std::io::Write;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Action inputs, read from flags or from the runner's `INPUT_*` variables.
#[derive(ClapParser, Debug)]
#[command(name = "shardcloud-action")]
#[command(version = PKG_VERSION)]
#[command(about = "Install the ShardCloud CLI, log in and run shardcloud commands", long_about = None)]
pub struct Cli {
    /// ShardCloud API token
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Newline-separated shardcloud subcommands to run in order
    #[arg(long, env = "INPUT_COMMANDS")]
    pub commands: Option<String>,

    /// Working directory for login and commands (default: .)
    #[arg(long, env = "INPUT_WORKDIR")]
    pub workdir: Option<String>,
}

impl Cli {
    /// Validate the parsed inputs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ActionError::MissingInput`] if no token is supplied.
    pub fn config(&self) -> Result<ActionConfig> {
        ActionConfig::from_inputs(
            self.token.as_deref(),
            self.commands.as_deref(),
            self.workdir.as_deref(),
        )
    }
}

/// Run the whole action and report its outcome.
///
/// Returns the process exit code: 0 when every stage succeeded, 1 otherwise.
pub fn execute<W: Write>(cli: &Cli, reporter: &mut Reporter<W>) -> i32 {
    let outcome = cli.config().and_then(|config| {
        action::run(&config, &mut SystemExecutor, reporter)?;
        reporter.set_output("success", "true")?;
        Ok(())
    });

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            if let Err(io_err) = reporter.error(&format!("Action failed: {e}")) {
                eprintln!("Action failed: {e} ({io_err})");
            }
            1
        }
    }
}

/// Main CLI logic, shared by the binary.
pub fn run_cli() {
    logging::init();
    let cli = Cli::parse();
    let mut reporter = Reporter::stdout();
    let code = execute(&cli, &mut reporter);
    if code != 0 {
        std::process::exit(code);
    }
}
