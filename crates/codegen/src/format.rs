//! Pretty-printer collaborators
//!
//! Generated code is piped through an external formatter such as `gofmt`.
//! Formatting is optional: callers go through `RunContext::format`, which
//! falls back to the unformatted text when the formatter fails.

use crate::error::FormatError;
use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default time a formatter process may run before it is killed.
pub const DEFAULT_FORMAT_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub trait Formatter {
    /// Short name used in warnings.
    fn name(&self) -> &str;

    /// Reformat `source`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the formatter is unavailable or rejects the input.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        (**self).format(source)
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl Formatter for IdentityFormatter {
    fn name(&self) -> &str {
        "identity"
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }
}

/// Runs an external program with the source on stdin and reads the result
/// from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_FORMAT_TIMEOUT,
        }
    }

    pub fn gofmt() -> Self {
        Self::new("gofmt")
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn spawn(&self) -> Result<Child, FormatError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => FormatError::NotFound(self.program.clone()),
                _ => FormatError::Io(e),
            })
    }

    /// Wait for `child` until the deadline, killing it on expiry.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, FormatError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(FormatError::TimedOut {
                    program: self.program.clone(),
                    timeout: self.timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Formatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.program
    }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = self.spawn()?;

        // stdin, stdout and stderr are drained on their own threads so a
        // large input cannot deadlock against a full output pipe
        let stdin = child.stdin.take().ok_or_else(|| missing_pipe("stdin"))?;
        let stdout = child.stdout.take().ok_or_else(|| missing_pipe("stdout"))?;
        let stderr = child.stderr.take().ok_or_else(|| missing_pipe("stderr"))?;

        let input = source.to_string();
        let writer = thread::spawn(move || {
            let mut stdin = stdin;
            stdin.write_all(input.as_bytes())
        });
        let out_reader = read_to_end(stdout);
        let err_reader = read_to_end(stderr);

        let status = self.wait(&mut child)?;

        // a formatter that exits early closes its stdin; the exit status
        // carries the real outcome
        let _ = join(writer);
        let stdout = join(out_reader)?;
        let stderr = join(err_reader).unwrap_or_default();

        if !status.success() {
            return Err(FormatError::NonZeroExit {
                program: self.program.clone(),
                status: status.code(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        String::from_utf8(stdout)
            .map_err(|e| FormatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

fn read_to_end<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf).map(|_| buf)
    })
}

fn join<T>(handle: JoinHandle<io::Result<T>>) -> io::Result<T> {
    handle
        .join()
        .map_err(|_| io::Error::other("formatter pipe thread panicked"))?
}

fn missing_pipe(name: &str) -> FormatError {
    FormatError::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        format!("formatter {name} was not captured"),
    ))
}
