//! Command-line configuration of the three binaries.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use fibbench_core::constants::{
    DEFAULT_EXECUTABLE, DEFAULT_OUT_FILE, DEFAULT_TIMEOUT, MAX_SERIES_LEN,
};

/// fibseries — compute the Fibonacci series with iterative, recursive and
/// dynamic-programming algorithms and report timings.
#[derive(Parser, Debug)]
#[command(name = "fibseries", version, about)]
pub struct SeriesConfig {
    /// Series length (F(1) = F(2) = 1).
    #[arg(value_parser = clap::value_parser!(u64).range(0..=MAX_SERIES_LEN))]
    pub n: u64,

    /// 0 iterative, 1 recursive, 2 dynamic programming, 3 all, 4 iterative + DP.
    #[arg(default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub mode: u8,

    /// Print the computed series (modes 0-2).
    #[arg(short, long)]
    pub print: bool,

    /// Any third argument also enables printing.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub print_arg: Option<String>,
}

impl SeriesConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    #[must_use]
    pub fn should_print(&self) -> bool {
        self.print || self.print_arg.is_some()
    }
}

/// fib-runner — sweep a Fibonacci executable over N, degrading from all
/// three algorithms to iterative + DP once recursion times out.
#[derive(Parser, Debug)]
#[command(name = "fib-runner", version, about)]
pub struct RunnerConfig {
    /// Largest series length to survey.
    #[arg(required_unless_present = "completion")]
    pub max_n: Option<u64>,

    /// Distance between surveyed sizes.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub step: u64,

    /// Base output name; written as `timings_<out>` and `ops_<out>`.
    #[arg(long, default_value = DEFAULT_OUT_FILE)]
    pub out: String,

    /// Directory for the output files.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Per-invocation timeout (e.g. "60", "30s", "500ms", "5m").
    #[arg(long, default_value = DEFAULT_TIMEOUT, env = "FIBBENCH_TIMEOUT", value_parser = duration_arg)]
    pub timeout: Duration,

    /// Executable under test, with any leading arguments (e.g. "python3 fib.py").
    #[arg(long, default_value = DEFAULT_EXECUTABLE, env = "FIBBENCH_EXEC")]
    pub exec: String,

    /// Write a JSON run summary to this path.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// No progress bar or status lines.
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl RunnerConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    #[must_use]
    pub fn timings_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}{}", fibbench_core::constants::TIMINGS_PREFIX, self.out))
    }

    #[must_use]
    pub fn operations_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}{}", fibbench_core::constants::OPS_PREFIX, self.out))
    }
}

/// fib-plot — comparative charts of the C and Python sweeps.
#[derive(Parser, Debug)]
#[command(name = "fib-plot", version, about)]
pub struct PlotConfig {
    /// Directory holding the four input tables.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Directory for the charts (defaults to the input directory).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Only report errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl PlotConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_else(|| self.dir.clone())
    }
}

fn duration_arg(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration {s:?}; try 60, 30s, 500ms, 5m or 1h"))
}

/// Parse a duration string like "5m", "1h", "30s", "500ms"; a bare number
/// is seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
