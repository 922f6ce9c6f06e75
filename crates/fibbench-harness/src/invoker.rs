//! Running a benchmarked executable once and parsing what it prints.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use fibbench_core::cell::Cell;
use fibbench_core::mode::Mode;
use fibbench_core::progress::CancellationToken;

/// Interval between child-status polls while waiting for a run.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Maximum number of `(time, ops)` pairs a run may print.
const MAX_PAIRS: usize = 3;

/// Errors from a single invocation.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The run exceeded its wall-clock bound and was killed.
    #[error("timeout of {limit:?} reached for {command}")]
    RecursionTimeout { limit: Duration, command: String },

    /// The run exited unsuccessfully.
    #[error("error running {command} ({status}): {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The executable could not be started or waited on.
    #[error("failed to run {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The run succeeded but its stdout did not follow the contract.
    #[error("unexpected output from {command}: {source}")]
    MalformedOutput {
        command: String,
        #[source]
        source: OutputError,
    },

    /// The sweep was cancelled while the run was in flight.
    #[error("run cancelled")]
    Cancelled,
}

/// Ways a flat `time,ops,...` line can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputError {
    #[error("expected (time, ops) pairs but got {0} fields")]
    OddFieldCount(usize),

    #[error("field {index} is not a number: {value:?}")]
    InvalidField { index: usize, value: String },

    #[error("expected at most 3 pairs but got {0}")]
    TooManyPairs(usize),
}

/// Parsed stdout of one run: parallel timing and operation-count sequences,
/// in algorithm order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOutput {
    pub timings: Vec<Cell>,
    pub operations: Vec<Cell>,
}

/// Split a flat comma-separated line into alternating time and operation
/// values.
///
/// The placeholder `-` is accepted in any position.
pub fn parse_output(stdout: &str) -> Result<RunOutput, OutputError> {
    let line = stdout.trim();
    if line.is_empty() {
        return Ok(RunOutput::default());
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() % 2 != 0 {
        return Err(OutputError::OddFieldCount(fields.len()));
    }
    if fields.len() / 2 > MAX_PAIRS {
        return Err(OutputError::TooManyPairs(fields.len() / 2));
    }

    let cells = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field.parse::<Cell>().map_err(|_| OutputError::InvalidField {
                index,
                value: (*field).to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut output = RunOutput::default();
    for pair in cells.chunks_exact(2) {
        output.timings.push(pair[0]);
        output.operations.push(pair[1]);
    }
    Ok(output)
}

/// One invocation per `(n, mode)` request.
pub trait Invoker {
    /// Run the executable for series length `n` under `mode`.
    fn run_single(&self, n: u64, mode: Mode) -> Result<RunOutput, InvokeError>;

    /// Human-readable name of what is being invoked.
    fn describe(&self) -> String;
}

/// A program plus the leading arguments it is always called with, e.g.
/// `python3 fib.py`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executable {
    program: String,
    args: Vec<String>,
}

impl Executable {
    /// Split a command string on whitespace into program and arguments.
    /// Returns `None` for a blank string.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Same arguments, different program.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The full command line for a request, as a display string.
    #[must_use]
    pub fn render(&self, n: u64, mode: Mode) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 3);
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts.push(n.to_string());
        parts.push(mode.code().to_string());
        parts.join(" ")
    }

    fn command(&self, n: u64, mode: Mode) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(n.to_string())
            .arg(mode.code().to_string());
        cmd
    }
}

/// Runs the executable as a child process with a wall-clock bound.
pub struct ProcessInvoker {
    executable: Executable,
    timeout: Duration,
    cancel: CancellationToken,
}

impl ProcessInvoker {
    #[must_use]
    pub fn new(executable: Executable, timeout: Duration) -> Self {
        Self {
            executable,
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    /// Kill in-flight children when `cancel` fires.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn wait(
        &self,
        child: &mut Child,
        command: &str,
        deadline: Instant,
    ) -> Result<ExitStatus, InvokeError> {
        loop {
            let polled = child.try_wait().map_err(|source| InvokeError::Io {
                command: command.to_string(),
                source,
            })?;
            if let Some(status) = polled {
                return Ok(status);
            }

            if self.cancel.is_cancelled() {
                reap(child);
                return Err(InvokeError::Cancelled);
            }

            let now = Instant::now();
            if now >= deadline {
                reap(child);
                return Err(self.timed_out(command));
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }

    /// Output of an exited child, read until the pipes close or the
    /// deadline passes. A grandchild holding the pipes open past the
    /// deadline counts as a timeout.
    fn collect(
        &self,
        pipe: &Receiver<String>,
        command: &str,
        deadline: Instant,
    ) -> Result<String, InvokeError> {
        match pipe.recv_deadline(deadline) {
            Ok(text) => Ok(text),
            Err(RecvTimeoutError::Timeout) => Err(self.timed_out(command)),
            Err(RecvTimeoutError::Disconnected) => Ok(String::new()),
        }
    }

    fn timed_out(&self, command: &str) -> InvokeError {
        InvokeError::RecursionTimeout {
            limit: self.timeout,
            command: command.to_string(),
        }
    }
}

impl Invoker for ProcessInvoker {
    fn run_single(&self, n: u64, mode: Mode) -> Result<RunOutput, InvokeError> {
        let command = self.executable.render(n, mode);
        tracing::debug!(%command, timeout = ?self.timeout, "invoking");

        let deadline = Instant::now() + self.timeout;
        let mut child = self
            .executable
            .command(n, mode)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| InvokeError::Io {
                command: command.clone(),
                source,
            })?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        // Drain threads still blocked at the deadline are left detached: a
        // grandchild may hold the pipes open indefinitely.
        let status = self.wait(&mut child, &command, deadline)?;
        let stdout = self.collect(&stdout, &command, deadline)?;
        let stderr = self.collect(&stderr, &command, deadline)?;

        if !status.success() {
            return Err(InvokeError::Failed {
                command,
                status: status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        parse_output(&stdout).map_err(|source| InvokeError::MalformedOutput { command, source })
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.executable.program.clone()];
        parts.extend(self.executable.args.iter().cloned());
        parts.join(" ")
    }
}

fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!(error = %e, "kill failed; child already exited");
    }
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<String> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        // The receiver is gone once the run has timed out.
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_three_pairs() {
        let out = parse_output("0.000001,8,0.000002,8,0.5,88\n").unwrap();
        assert_eq!(
            out.timings,
            [Cell::Value(0.000_001), Cell::Value(0.000_002), Cell::Value(0.5)]
        );
        assert_eq!(out.operations, [Cell::Value(8.0), Cell::Value(8.0), Cell::Value(88.0)]);
    }

    #[test]
    fn parse_two_pairs() {
        let out = parse_output("0.1,3,0.2,3").unwrap();
        assert_eq!(out.timings.len(), 2);
        assert_eq!(out.operations.len(), 2);
    }

    #[test]
    fn parse_placeholder_pairs() {
        let out = parse_output("0.1,3,0.2,3,-,-").unwrap();
        assert_eq!(out.timings[2], Cell::Missing);
        assert_eq!(out.operations[2], Cell::Missing);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse_output("  \n").unwrap(), RunOutput::default());
    }

    #[test]
    fn parse_odd_fields() {
        assert_eq!(parse_output("0.1,3,0.2"), Err(OutputError::OddFieldCount(3)));
    }

    #[test]
    fn parse_non_numeric() {
        assert_eq!(
            parse_output("iterative version,3"),
            Err(OutputError::InvalidField {
                index: 0,
                value: "iterative version".into()
            })
        );
    }

    #[test]
    fn parse_too_many_pairs() {
        assert_eq!(
            parse_output("1,1,1,1,1,1,1,1"),
            Err(OutputError::TooManyPairs(4))
        );
    }

    #[test]
    fn executable_parse_and_render() {
        let exe = Executable::parse("python3  fib.py").unwrap();
        assert_eq!(exe.program(), "python3");
        assert_eq!(exe.render(12, Mode::All), "python3 fib.py 12 3");
        assert!(Executable::parse("   ").is_none());

        let moved = exe.with_program("/usr/bin/python3");
        assert_eq!(moved.render(1, Mode::IterativeAndDp), "/usr/bin/python3 fib.py 1 4");
    }

    #[test]
    fn timeout_error_display() {
        let err = InvokeError::RecursionTimeout {
            limit: Duration::from_secs(60),
            command: "./fib 40 3".into(),
        };
        assert_eq!(err.to_string(), "timeout of 60s reached for ./fib 40 3");
    }

    #[test]
    fn missing_program_is_io_error() {
        let exe = Executable::parse("definitely-not-a-real-program-fibbench").unwrap();
        let invoker = ProcessInvoker::new(exe, Duration::from_secs(5));
        assert!(matches!(
            invoker.run_single(3, Mode::All),
            Err(InvokeError::Io { .. })
        ));
    }
}
