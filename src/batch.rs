//! Normalization of the `commands` input into an ordered batch of invocations.

/// Ordered, trimmed, non-empty command lines taken from the `commands` input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBatch {
    lines: Vec<String>,
}

impl CommandBatch {
    /// Split `raw` on newlines, trim each line and drop the empty ones.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lines = raw
            .split('\n')
            .map(|line| line.trim_matches(is_separator))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The normalized lines, in input order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over `(index, invocation)` pairs, with indices starting at 1.
    pub fn invocations(&self) -> impl Iterator<Item = (usize, Invocation<'_>)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, Invocation::parse(line)))
    }
}

/// Whitespace for trimming and splitting. Includes the byte-order mark, which
/// `char::is_whitespace` does not.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// One command line split into a subcommand and its arguments.
///
/// Splitting is on whitespace runs only. Quotes and escapes are kept as
/// literal characters, so an argument can never contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub line: &'a str,
    pub head: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Split an already-trimmed, non-empty line.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());
        let head = tokens.next().unwrap_or_default();
        Self {
            line,
            head,
            args: tokens.collect(),
        }
    }

    /// Full argv passed after the tool name: the head followed by its args.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.head)
            .chain(self.args.iter().copied())
            .map(str::to_string)
            .collect()
    }
}
