// src/console.rs
// The interactive read-print loop that fronts the install action

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::debug;

use crate::config::InstallerConfig;
use crate::errors::{InstallerError, InstallerResult};
use crate::install::Installer;
use crate::logger::InstallLog;
use crate::terminal::Terminal;

/// How long the controller blocks after rejecting an input line
const INVALID_INPUT_PAUSE: Duration = Duration::from_secs(5);

/// Terminal state of a prompt session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user confirmed and the install action ran
    Installed,
    /// The user declined; no filesystem side effects
    Cancelled,
}

/// One parsed answer to the install question
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Invalid { raw: String, normalized: String },
}

/// Strip one trailing line terminator, then uppercase the whole string.
///
/// Only the exact single-character token matches, case-insensitively:
/// `"yes"` normalizes to `"YES"` and is rejected, as is `"y "` with its
/// trailing space intact.
fn parse_answer(line: &str) -> Answer {
    let raw = line.strip_suffix('\n').unwrap_or(line);
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    let normalized = raw.to_uppercase();

    match normalized.as_str() {
        "Y" => Answer::Yes,
        "N" => Answer::No,
        _ => Answer::Invalid {
            raw: raw.to_string(),
            normalized,
        },
    }
}

/// Owns the prompt loop: banner, one-line read, normalization, dispatch.
pub struct ConsoleController<'a, R, W, T> {
    config: InstallerConfig,
    input: R,
    output: W,
    terminal: T,
    log: &'a InstallLog,
}

impl<'a, R: BufRead, W: Write, T: Terminal> ConsoleController<'a, R, W, T> {
    pub fn new(
        config: InstallerConfig,
        input: R,
        output: W,
        terminal: T,
        log: &'a InstallLog,
    ) -> Self {
        Self {
            config,
            input,
            output,
            terminal,
            log,
        }
    }

    /// Run the prompt loop until the user answers Y or N.
    ///
    /// Invalid lines print the error, block for the fixed pause, clear the
    /// screen, and restart the loop; the loop is iterative and unbounded.
    /// The only error that escapes is the input or output stream failing —
    /// install failures are reported inline and never propagate.
    pub fn run(&mut self) -> InstallerResult<Outcome> {
        loop {
            self.show_prompt()?;
            let line = self.read_line()?;

            match parse_answer(&line) {
                Answer::Yes => {
                    debug!("answer accepted: install");
                    self.log.info("answer: Y - installing");

                    let installer = Installer::new(&self.config, self.log);
                    installer.install(&mut self.output)?;
                    return Ok(Outcome::Installed);
                }
                Answer::No => {
                    debug!("answer accepted: cancel");
                    self.log.info("answer: N - cancelled");

                    self.terminal.clear_screen();
                    writeln!(self.output, "Thank you for using the installer.")?;
                    return Ok(Outcome::Cancelled);
                }
                Answer::Invalid { raw, normalized } => {
                    debug!(%raw, %normalized, "invalid answer, reprompting");
                    self.log
                        .warn(&format!("invalid answer: ({} / {})", raw, normalized));

                    writeln!(
                        self.output,
                        "INVALID INPUT ({} / {}) - ERROR 00.1",
                        raw, normalized
                    )?;
                    self.output.flush()?;
                    self.terminal.pause(INVALID_INPUT_PAUSE);
                    self.terminal.clear_screen();
                }
            }
        }
    }

    /// The fixed banner plus the install question, reprinted every iteration
    /// (an invalid answer restarts the prompt loop from the top).
    fn show_prompt(&mut self) -> InstallerResult<()> {
        writeln!(self.output, "VERSION {} - ZEPHINST", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.output, "Zephyr Installer Utility for Windows.")?;
        writeln!(
            self.output,
            "Do you want to install Zephyr {}. [Y/N]",
            self.config.product_version
        )?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read exactly one line. A closed or unreadable stream is the one
    /// condition the controller does not handle itself.
    fn read_line(&mut self) -> InstallerResult<String> {
        let mut line = String::new();
        let bytes_read = self
            .input
            .read_line(&mut line)
            .map_err(InstallerError::Input)?;

        if bytes_read == 0 {
            return Err(InstallerError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }

        Ok(line)
    }
}
