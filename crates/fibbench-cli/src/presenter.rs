//! Sweep progress and plot report presenters.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use fibbench_core::mode::Mode;
use fibbench_harness::{StopReason, SweepObserver};

use crate::ui::{header_line, warning_line};

const BAR_TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}";

/// Progress bar over the N grid; degradations are printed above the bar.
pub struct CliSweepObserver {
    bar: ProgressBar,
}

impl CliSweepObserver {
    /// A bar over `len` input sizes, or a hidden one when `quiet`.
    #[must_use]
    pub fn new(len: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        };
        Self { bar }
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl SweepObserver for CliSweepObserver {
    fn on_invoke(&self, n: u64, mode: Mode) {
        self.bar.set_message(format!("N={n} mode={mode}"));
    }

    fn on_row(&self, _n: u64) {
        self.bar.inc(1);
    }

    fn on_downgrade(&self, n: u64, from: Mode, to: Mode) {
        self.bar.println(warning_line(&format!(
            "recursion timed out at N={n}; mode {from} -> {to} for the remaining sizes"
        )));
    }

    fn on_stop(&self, reason: &StopReason) {
        if reason.is_completed() {
            self.bar.finish_and_clear();
        } else {
            self.bar.abandon_with_message(reason.to_string());
        }
    }
}

/// Reports the plotter's results.
pub struct FigurePresenter {
    quiet: bool,
}

impl FigurePresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Lines listing absent input files and how to produce them.
    #[must_use]
    pub fn missing_report(&self, missing: &[PathBuf]) -> Vec<String> {
        let mut lines: Vec<String> = missing
            .iter()
            .map(|path| format!("Missing: {}", path.display()))
            .collect();
        lines.push("Missing CSVs. Run fib-runner for both implementations first.".to_string());
        lines
    }

    /// Lines listing the written figures.
    #[must_use]
    pub fn saved_report(&self, written: &[PathBuf]) -> Vec<String> {
        let mut lines = vec!["Figures saved:".to_string()];
        lines.extend(written.iter().map(|path| format!(" - {}", file_name(path))));
        lines
    }

    pub fn present_missing(&self, missing: &[PathBuf]) {
        for line in self.missing_report(missing) {
            println!("{line}");
        }
    }

    pub fn present_skipped_speedup(&self) {
        if !self.quiet {
            println!(
                "{}",
                warning_line("N grids differ between implementations; skipping speedup charts.")
            );
        }
    }

    pub fn present_saved(&self, written: &[PathBuf]) {
        if self.quiet {
            return;
        }
        println!("{}", header_line("fib-plot"));
        for line in self.saved_report(written) {
            println!("{line}");
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
