use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Output, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// A command invocation with captured stdout/stderr and a closed stdin.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: PathBuf,
}

impl Command {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let mut inner = StdCommand::new(&program);
        inner.stdin(Stdio::null());
        Self { inner, program }
    }

    pub fn program(&self) -> &Path {
        &self.program
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

    /// Run to completion and return the raw output, whatever the exit status.
    pub fn capture(mut self) -> Result<Output> {
        debug!(cmd = %self.display(), "running command");
        self.inner.output().map_err(|e| Error::CommandFailed {
            cmd: self.display(),
            source: e,
        })
    }

    /// Run to completion, treating a non-zero exit status as an error.
    pub fn run(self) -> Result<Output> {
        let cmd = self.display();
        let output = self.capture()?;
        if !output.status.success() {
            return Err(Error::ExitStatus {
                cmd,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }

    fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in self.inner.get_args() {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_new() {
        let cmd = Command::new("unrar");
        assert_eq!(cmd.program(), Path::new("unrar"));
    }

    #[test]
    fn command_args() {
        let cmd = Command::new("unrar").arg("lb").args(["-p-", "--"]);
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn command_display_joins_args() {
        let cmd = Command::new("/usr/bin/unrar").arg("lb").arg("a.rar");
        assert_eq!(cmd.display(), "/usr/bin/unrar lb a.rar");
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let result = Command::new("/nonexistent/directory/unrar").capture();
        assert!(matches!(result, Err(Error::CommandFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let result = Command::new("/bin/sh").args(["-c", "echo broken >&2; exit 3"]).run();
        match result {
            Err(err @ Error::ExitStatus { .. }) => {
                assert_eq!(err.exit_code(), Some(3));
                if let Error::ExitStatus { stderr, .. } = err {
                    assert_eq!(stderr, "broken");
                }
            }
            other => panic!("expected exit status error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn successful_run_captures_stdout() {
        let output = Command::new("/bin/sh").args(["-c", "echo hello"]).run().unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }
}
