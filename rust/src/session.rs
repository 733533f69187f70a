//! Applies a command stream to a tree and writes the results.
//!
//! Output is every not-found notice in command order, followed by the full
//! shape report of the final tree.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::command::{decode_line, parse_line, Command};
use crate::config::RunOptions;
use crate::error::TreeResult;
use crate::report::{not_found_notice, Reporter};
use crate::types::{BstMap, InsertOutcome, RemoveOutcome};

/// Counters collected while processing a command stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub added: usize,
    pub duplicates: usize,
    pub removed: usize,
    pub not_found: usize,
    pub skipped: usize,
    pub report_lines: usize,
}

/// A tree plus the bookkeeping for one run over a command file.
#[derive(Debug, Default)]
pub struct Session {
    tree: BstMap,
    options: RunOptions,
    summary: RunSummary,
}

impl Session {
    pub fn new(options: RunOptions) -> Self {
        Self {
            tree: BstMap::new(),
            options,
            summary: RunSummary::default(),
        }
    }

    pub fn tree(&self) -> &BstMap {
        &self.tree
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Apply one command. Returns the notice to emit, if any.
    ///
    /// Fails only when invariant checking is enabled and finds a violation.
    pub fn apply(&mut self, command: Command) -> TreeResult<Option<String>> {
        match command {
            Command::Add { key, value } => {
                let outcome = if self.options.validate {
                    self.tree.checked_insert(key, value)?
                } else {
                    self.tree.insert(key, value)
                };
                match outcome {
                    InsertOutcome::Inserted => self.summary.added += 1,
                    InsertOutcome::DuplicateIgnored => self.summary.duplicates += 1,
                }
                Ok(None)
            }
            Command::Delete { key } => {
                let outcome = if self.options.validate {
                    self.tree.checked_remove(&key)?
                } else {
                    self.tree.remove(&key)
                };
                match outcome {
                    RemoveOutcome::Removed => {
                        self.summary.removed += 1;
                        Ok(None)
                    }
                    RemoveOutcome::NotFound => {
                        self.summary.not_found += 1;
                        Ok(Some(not_found_notice(&key)))
                    }
                }
            }
        }
    }

    /// Process every line of `input`, then write the report to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<RunSummary> {
        let mut raw = Vec::new();
        let mut line_no = 0;
        loop {
            raw.clear();
            let read = input
                .read_until(b'\n', &mut raw)
                .with_context(|| format!("failed to read line {}", line_no + 1))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let parsed = decode_line(line_no, &raw).and_then(|line| parse_line(line_no, line));
            let command = match parsed {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) if self.options.strict => return Err(err.into()),
                Err(err) => {
                    warn!("skipping malformed command: {}", err);
                    self.summary.skipped += 1;
                    continue;
                }
            };

            debug!("line {}: {:?}", line_no, command);
            if let Some(notice) = self
                .apply(command)
                .with_context(|| format!("invariant check failed after line {}", line_no))?
            {
                writeln!(output, "{}", notice).context("failed to write notice")?;
            }
        }

        self.tree.debug_dump();
        self.summary.report_lines = Reporter::new(&self.tree)
            .write_to(output)
            .context("failed to write report")?;
        output.flush().context("failed to flush output")?;

        debug!("run finished: {:?}", self.summary);
        Ok(self.summary)
    }
}

/// Run a fresh session over `input`, writing to `output`.
pub fn process<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: RunOptions,
) -> Result<RunSummary> {
    Session::new(options).run(input, output)
}
