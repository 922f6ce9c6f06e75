//! Entry points of the three binaries.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use fibbench_cli::completion::generate_completion;
use fibbench_cli::output::{format_duration, format_number, format_seconds};
use fibbench_cli::presenter::{CliSweepObserver, FigurePresenter};
use fibbench_cli::ui::{print_error, print_header, print_success};
use fibbench_core::constants::{exit_codes, DEFAULT_EXECUTABLE, TIME_PRECISION};
use fibbench_core::measure::{measure, Measurement};
use fibbench_core::mode::Mode;
use fibbench_core::progress::CancellationToken;
use fibbench_core::BenchError;
use fibbench_harness::{
    run_sweep, save_summary, save_table, Executable, Invoker, ProcessInvoker, StopReason,
    SweepConfig, SweepSummary,
};
use fibbench_plot::{load_dataset, missing_inputs, plan_charts, render_all, C, PYTHON};

use crate::config::{PlotConfig, RunnerConfig, SeriesConfig};
use crate::errors::stop_exit_code;

/// `fibseries`: compute, time and report one series length.
pub fn run_series(config: &SeriesConfig) -> Result<i32> {
    let mode = Mode::try_from(config.mode)?;
    let mut out = io::stdout().lock();
    write_series_report(&mut out, config.n, mode, config.should_print())?;
    out.flush()?;
    Ok(exit_codes::SUCCESS)
}

/// Run every algorithm of `mode` for length `n` and write the report.
///
/// CSV modes emit a single `time,ops[,time,ops...]` line in column order;
/// single-algorithm modes emit a labelled, human-readable block.
pub fn write_series_report<W: Write>(out: &mut W, n: u64, mode: Mode, print: bool) -> io::Result<()> {
    let measurements: Vec<Measurement> = mode
        .algorithms()
        .iter()
        .map(|&algorithm| measure(algorithm, n))
        .collect();

    if mode.is_csv() {
        let pairs: Vec<String> = measurements.iter().map(Measurement::csv_pair).collect();
        return writeln!(out, "{}", pairs.join(","));
    }

    for m in &measurements {
        writeln!(out, "{} version", m.algorithm.label())?;
        if print {
            let values: Vec<String> = m.series.iter().map(u64::to_string).collect();
            writeln!(out, "{}", values.join(" "))?;
        }
        writeln!(
            out,
            "time: {:.prec$}({})",
            m.elapsed.as_secs_f64(),
            m.operations,
            prec = TIME_PRECISION
        )?;
    }
    Ok(())
}

/// `fib-runner`: sweep the executable and save both tables.
pub fn run_runner(config: &RunnerConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <RunnerConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let max_n = config
        .max_n
        .ok_or_else(|| BenchError::Config("MAX_N is required".into()))?;
    let sweep = SweepConfig::new(max_n, config.step)?;
    let executable = resolve_executable(&config.exec)?;

    let cancel = CancellationToken::new();
    install_ctrlc_handler(cancel.clone())?;

    let invoker =
        ProcessInvoker::new(executable, config.timeout).with_cancellation(cancel.clone());
    if !config.quiet {
        print_header(&format!(
            "fib-runner: {} (N = 1..={max_n}, step {}, timeout {:?})",
            invoker.describe(),
            config.step,
            config.timeout
        ));
    }

    let observer = CliSweepObserver::new(sweep.len(), config.quiet);
    let started = Instant::now();
    let outcome = run_sweep(&invoker, &sweep, &cancel, &observer);
    let elapsed = started.elapsed();

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;
    let timings_path = config.timings_path();
    let operations_path = config.operations_path();
    save_table(&timings_path, &outcome.timings)
        .with_context(|| format!("writing {}", timings_path.display()))?;
    save_table(&operations_path, &outcome.operations)
        .with_context(|| format!("writing {}", operations_path.display()))?;

    if let Some(path) = &config.summary {
        let summary = SweepSummary::new(
            &invoker.describe(),
            &sweep,
            config.timeout,
            &outcome,
            (&timings_path, &operations_path),
        );
        save_summary(&summary, path).with_context(|| format!("writing {}", path.display()))?;
    }

    match &outcome.stop {
        StopReason::Completed => {
            if !config.quiet {
                if let Some(last) = outcome.timings.last() {
                    println!(
                        "N={}: iterative {} s, dynamic programming {} s, recursive {} s",
                        format_number(last.n),
                        format_seconds(last.iterative),
                        format_seconds(last.dynamic_programming),
                        format_seconds(last.recursive)
                    );
                }
                print_success(&format!(
                    "{} rows in {}, saved to {} and {}",
                    format_number(outcome.rows() as u64),
                    format_duration(elapsed),
                    timings_path.display(),
                    operations_path.display()
                ));
            }
        }
        stop => print_error(&format!(
            "sweep stopped ({stop}); {} rows saved to {} and {}",
            format_number(outcome.rows() as u64),
            timings_path.display(),
            operations_path.display()
        )),
    }

    Ok(stop_exit_code(&outcome.stop))
}

/// Split `--exec`; the default counterpart name prefers a `fibseries`
/// installed next to the running binary over a `PATH` lookup.
fn resolve_executable(command: &str) -> Result<Executable, BenchError> {
    let executable = Executable::parse(command)
        .ok_or_else(|| BenchError::Config("--exec must name a program".into()))?;
    if executable.program() != DEFAULT_EXECUTABLE {
        return Ok(executable);
    }
    Ok(match sibling_binary(DEFAULT_EXECUTABLE) {
        Some(path) => executable.with_program(path.display().to_string()),
        None => executable,
    })
}

fn sibling_binary(name: &str) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe
        .parent()?
        .join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
    candidate.is_file().then_some(candidate)
}

fn install_ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        tracing::warn!("interrupt received; stopping the sweep");
        cancel.cancel();
    })
    .context("installing Ctrl+C handler")
}

/// `fib-plot`: read both implementations' tables and draw the charts.
pub fn run_plot(config: &PlotConfig) -> Result<i32> {
    if let Some(shell) = config.completion {
        let mut cmd = <PlotConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter = FigurePresenter::new(config.quiet);
    let missing = missing_inputs(&config.dir, &[C, PYTHON]);
    if !missing.is_empty() {
        presenter.present_missing(&missing);
        return Ok(exit_codes::SUCCESS);
    }

    let c = load_dataset(&config.dir, &C)?;
    let python = load_dataset(&config.dir, &PYTHON)?;
    let plan = plan_charts((&C, &c), (&PYTHON, &python));
    if plan.speedup_skipped {
        presenter.present_skipped_speedup();
    }

    let written = render_all(&plan, &config.output_dir())?;
    presenter.present_saved(&written);
    Ok(exit_codes::SUCCESS)
}
