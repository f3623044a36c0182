use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::io;
use std::process::{Command as StdCommand, Output};

const SHELL: &str = "sh";

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    /// `sh -c <script>`.
    pub fn shell(script: &str) -> Self {
        Self::new(SHELL).args(["-c", script])
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn capture(mut self) -> Result<Output> {
        self.inner.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::CommandNotFound {
                cmd: self.program.clone(),
            },
            _ => Error::CommandFailed {
                cmd: self.program.clone(),
                source: e,
            },
        })
    }

    /// Runs the command and returns its trimmed standard output.
    ///
    /// A non-zero exit is reported as [`Error::CommandExited`] so callers can
    /// decide which statuses are benign.
    pub fn stdout(self) -> Result<String> {
        let program = self.program.clone();
        let output = self.capture()?;
        if !output.status.success() {
            return Err(Error::CommandExited {
                cmd: program,
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
