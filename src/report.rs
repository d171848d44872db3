//! Log sink and outcome reporting for the GitHub Actions runner.
//!
//! Everything here is written as workflow commands on stdout, except step
//! outputs which go to the file named by `GITHUB_OUTPUT` when the runner
//! provides one.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Environment variable naming the step output file.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Writes notices, errors and outputs to the runner.
pub struct Reporter<W: Write> {
    out: W,
    output_file: Option<PathBuf>,
    secrets: Vec<String>,
}

impl Reporter<io::Stdout> {
    /// Reporter bound to stdout, picking up `GITHUB_OUTPUT` from the environment.
    #[must_use]
    pub fn stdout() -> Self {
        let output_file = std::env::var_os(OUTPUT_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self {
            out,
            output_file,
            secrets: Vec::new(),
        }
    }

    /// Write a plain log line.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the writer fails.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    /// Emit an error annotation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the writer fails.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "::error::{}", escape_data(message))?;
        self.out.flush()
    }

    /// Ask the runner to redact `secret` from the log, and remember it so the
    /// command echo never prints it either.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the writer fails.
    pub fn add_mask(&mut self, secret: &str) -> io::Result<()> {
        if secret.is_empty() {
            return Ok(());
        }
        self.secrets.push(secret.to_string());
        writeln!(self.out, "::add-mask::{}", escape_data(secret))?;
        self.out.flush()
    }

    /// Replace every registered secret in `text` with `***`.
    #[must_use]
    pub fn redact(&self, text: &str) -> String {
        self.secrets
            .iter()
            .fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), "***"))
    }

    /// Publish a single-line step output.
    ///
    /// # Errors
    ///
    /// Returns `Err` with [`io::ErrorKind::InvalidInput`] if `value` spans
    /// several lines, or if the output file or writer cannot be written.
    pub fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        if value.contains(['\n', '\r']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output '{name}' must be a single line"),
            ));
        }

        let Some(path) = &self.output_file else {
            writeln!(self.out)?;
            writeln!(self.out, "::set-output name={name}::{}", escape_data(value))?;
            return self.out.flush();
        };

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{name}={value}")
    }

    /// Consume the reporter and hand back its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
