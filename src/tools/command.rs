//! External command construction and execution.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, error};

/// Pipeline stage a command belongs to, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Collapsing the abundance table and attaching sample metadata.
    Summarize,
    /// Rewriting a split table into LEfSe's input format.
    Format,
    /// The LEfSe statistical analysis itself.
    Analyze,
    /// Rendering the cladogram image.
    Plot,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summarize => write!(f, "taxa summarization"),
            Self::Format => write!(f, "LEfSe formatting"),
            Self::Analyze => write!(f, "LEfSe analysis"),
            Self::Plot => write!(f, "cladogram plotting"),
        }
    }
}

/// A single external program invocation.
///
/// Arguments are collected as strings so the full command line can be
/// reported verbatim when a stage fails.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    /// Starts a command for the given program.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends a path argument.
    #[must_use]
    pub fn arg_path(self, path: &Path) -> Self {
        self.arg(path.display().to_string())
    }

    /// The command line as it would be typed in a shell.
    pub fn rendered(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push('\'');
                line.push_str(arg);
                line.push('\'');
            } else {
                line.push_str(arg);
            }
        }
        line
    }

    /// Runs the command to completion, capturing its output.
    ///
    /// Stderr of a failing program is logged before the error is returned,
    /// since the LEfSe scripts put their diagnostics there.
    pub fn run(&self, stage: Stage) -> Result<()> {
        debug!("Running {}", self.rendered());
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| Error::ToolLaunch {
                stage,
                command: self.rendered(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                error!("{stage} reported: {}", stderr.trim());
            }
            return Err(Error::ToolFailed {
                stage,
                status: output.status,
                command: self.rendered(),
            });
        }

        Ok(())
    }
}
