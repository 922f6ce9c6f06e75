//! Sweep observation hooks.

use fibbench_core::mode::Mode;

use crate::sweep::StopReason;

/// Receives sweep milestones, e.g. to drive a progress bar.
pub trait SweepObserver {
    /// An invocation for `n` under `mode` is about to start.
    fn on_invoke(&self, n: u64, mode: Mode);

    /// A row for `n` was recorded.
    fn on_row(&self, n: u64);

    /// Recursion timed out at `n`; the rest of the sweep runs under `to`.
    fn on_downgrade(&self, n: u64, from: Mode, to: Mode);

    /// The sweep ended.
    fn on_stop(&self, reason: &StopReason);
}

/// Observer that ignores everything.
pub struct NoOpObserver;

impl SweepObserver for NoOpObserver {
    fn on_invoke(&self, _n: u64, _mode: Mode) {}
    fn on_row(&self, _n: u64) {}
    fn on_downgrade(&self, _n: u64, _from: Mode, _to: Mode) {}
    fn on_stop(&self, _reason: &StopReason) {}
}
