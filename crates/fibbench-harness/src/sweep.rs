//! The benchmark sweep: one invocation per input size, degrading the mode
//! when recursion times out.

use std::fmt;

use fibbench_core::error::BenchError;
use fibbench_core::mode::Mode;
use fibbench_core::progress::CancellationToken;

use crate::interfaces::SweepObserver;
use crate::invoker::{InvokeError, Invoker, RunOutput};
use crate::table::TableRow;

/// Input-size grid and starting mode of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    max_n: u64,
    step: u64,
    initial_mode: Mode,
}

impl SweepConfig {
    /// Survey `1, 1 + step, ...` up to and including `max_n`, starting with
    /// all three algorithms.
    pub fn new(max_n: u64, step: u64) -> Result<Self, BenchError> {
        if step == 0 {
            return Err(BenchError::Config("step must be at least 1".into()));
        }
        Ok(Self {
            max_n,
            step,
            initial_mode: Mode::All,
        })
    }

    #[must_use]
    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    #[must_use]
    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// The surveyed input sizes.
    pub fn grid(&self) -> impl Iterator<Item = u64> {
        let (step, max_n) = (self.step, self.max_n);
        std::iter::successors(Some(1u64), move |n| n.checked_add(step))
            .take_while(move |&n| n <= max_n)
    }

    /// Number of surveyed input sizes.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.max_n == 0 {
            0
        } else {
            (self.max_n - 1) / self.step + 1
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_n == 0
    }
}

/// Why a sweep ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// Every input size was surveyed.
    Completed,
    /// A timeout occurred that degrading the mode could not absorb.
    TimedOut(String),
    /// The executable failed; the sweep stopped early.
    Failed(String),
    /// Cancelled by the user.
    Cancelled,
}

impl StopReason {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completed"),
            Self::TimedOut(msg) => write!(f, "timed out: {msg}"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Rows collected by a sweep and how it ended.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub timings: Vec<TableRow>,
    pub operations: Vec<TableRow>,
    /// Input size at which recursion was dropped, if it was.
    pub downgraded_at: Option<u64>,
    /// Mode in effect when the sweep ended.
    pub final_mode: Mode,
    pub stop: StopReason,
}

impl SweepOutcome {
    fn new(mode: Mode) -> Self {
        Self {
            timings: Vec::new(),
            operations: Vec::new(),
            downgraded_at: None,
            final_mode: mode,
            stop: StopReason::Completed,
        }
    }

    fn push(&mut self, n: u64, output: &RunOutput) {
        self.timings.push(TableRow::from_cells(n, &output.timings));
        self.operations.push(TableRow::from_cells(n, &output.operations));
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.timings.len()
    }
}

/// Survey every input size of `config` through `invoker`.
///
/// A recursion timeout switches the sweep to its degraded mode for the
/// remaining sizes and re-issues the same size once. Any other failure, or
/// a timeout with no mode left to degrade to, ends the sweep; rows collected
/// so far are kept in the outcome.
pub fn run_sweep(
    invoker: &dyn Invoker,
    config: &SweepConfig,
    cancel: &CancellationToken,
    observer: &dyn SweepObserver,
) -> SweepOutcome {
    let mut mode = config.initial_mode;
    let mut outcome = SweepOutcome::new(mode);
    tracing::info!(
        target_exe = %invoker.describe(),
        max_n = config.max_n,
        step = config.step,
        "sweep started"
    );

    for n in config.grid() {
        if cancel.is_cancelled() {
            outcome.stop = StopReason::Cancelled;
            break;
        }

        observer.on_invoke(n, mode);
        let mut result = invoker.run_single(n, mode);

        if matches!(result, Err(InvokeError::RecursionTimeout { .. })) {
            if let Some(next) = mode.degraded() {
                tracing::warn!(n, from = %mode, to = %next, "recursion timed out; dropping it for the rest of the sweep");
                observer.on_downgrade(n, mode, next);
                mode = next;
                outcome.downgraded_at = Some(n);
                observer.on_invoke(n, mode);
                result = invoker.run_single(n, mode);
            }
        }

        match result {
            Ok(output) => {
                outcome.push(n, &output);
                observer.on_row(n);
            }
            Err(InvokeError::Cancelled) => {
                outcome.stop = StopReason::Cancelled;
                break;
            }
            Err(err @ InvokeError::RecursionTimeout { .. }) => {
                tracing::error!(n, error = %err, "timeout with no mode left to degrade to");
                outcome.stop = StopReason::TimedOut(err.to_string());
                break;
            }
            Err(err) => {
                tracing::error!(n, error = %err, "sweep stopped");
                outcome.stop = StopReason::Failed(err.to_string());
                break;
            }
        }
    }

    outcome.final_mode = mode;
    tracing::info!(rows = outcome.rows(), stop = %outcome.stop, "sweep finished");
    observer.on_stop(&outcome.stop);
    outcome
}
