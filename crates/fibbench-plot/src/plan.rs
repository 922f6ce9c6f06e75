//! Which charts to draw from the two implementations' tables.

use std::path::{Path, PathBuf};

use fibbench_core::algorithms::Algorithm;
use fibbench_core::constants::{OPS_PREFIX, TIMINGS_PREFIX};
use fibbench_harness::load_table;

use crate::chart::{
    render_svg, Line, LineChart, Marker, Scale, DP_COLOR, ITERATIVE_COLOR, RECURSIVE_COLOR,
    SPEEDUP_COLOR,
};
use crate::error::PlotError;
use crate::ratio::{ratio, same_grid};
use crate::series::Series;

/// A benchmarked implementation and the file names its runs were saved
/// under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Implementation {
    /// Shown in chart titles.
    pub label: &'static str,
    /// Base name of the runner's `--out` file.
    pub stem: &'static str,
    /// Appended to per-implementation chart names.
    pub suffix: &'static str,
}

pub const C: Implementation = Implementation {
    label: "C",
    stem: "fib_c",
    suffix: "c",
};

pub const PYTHON: Implementation = Implementation {
    label: "Python",
    stem: "fib_py",
    suffix: "py",
};

impl Implementation {
    #[must_use]
    pub fn timings_file(&self) -> String {
        format!("{TIMINGS_PREFIX}{}.csv", self.stem)
    }

    #[must_use]
    pub fn operations_file(&self) -> String {
        format!("{OPS_PREFIX}{}.csv", self.stem)
    }
}

/// Both tables of one implementation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub timings: Series,
    pub operations: Series,
}

/// Input files under `dir` that do not exist, in a stable order.
#[must_use]
pub fn missing_inputs(dir: &Path, implementations: &[Implementation]) -> Vec<PathBuf> {
    implementations
        .iter()
        .flat_map(|imp| [imp.timings_file(), imp.operations_file()])
        .map(|name| dir.join(name))
        .filter(|path| !path.is_file())
        .collect()
}

pub fn load_dataset(dir: &Path, implementation: &Implementation) -> Result<Dataset, PlotError> {
    let read = |name: String| {
        let path = dir.join(name);
        load_table(&path)
            .map(|rows| Series::from_rows(&rows))
            .map_err(|source| PlotError::Table { path, source })
    };
    Ok(Dataset {
        timings: read(implementation.timings_file())?,
        operations: read(implementation.operations_file())?,
    })
}

/// Charts to draw, keyed by output file name.
#[derive(Debug, Clone, Default)]
pub struct ChartPlan {
    pub charts: Vec<(String, LineChart)>,
    /// Set when the two implementations were not run over the same sizes.
    pub speedup_skipped: bool,
}

/// Per-implementation charts for `baseline` and `candidate`, plus the
/// `candidate / baseline` speedup charts when their grids match.
#[must_use]
pub fn plan_charts(
    baseline: (&Implementation, &Dataset),
    candidate: (&Implementation, &Dataset),
) -> ChartPlan {
    let mut plan = ChartPlan::default();
    for (imp, data) in [baseline, candidate] {
        plan.charts.extend(implementation_charts(imp, data));
    }

    let (base, base_data) = baseline;
    let (cand, cand_data) = candidate;
    if same_grid(&base_data.timings.n, &cand_data.timings.n) {
        let x = base_data.timings.x();
        let y_label = format!("Speedup ({}/{})", cand.label, base.label);
        for algorithm in Algorithm::ALL {
            let speedup = ratio(
                cand_data.timings.column(algorithm),
                base_data.timings.column(algorithm),
            );
            let chart = LineChart::new(
                format!("{y_label} - {}", algorithm.short_name()),
                y_label.clone(),
            )
            .line(Line::new(
                algorithm.short_name(),
                SPEEDUP_COLOR,
                Marker::Circle,
                &x,
                &speedup,
            ))
            .reference(1.0);
            plan.charts
                .push((format!("speedup_{}.svg", speedup_slug(algorithm)), chart));
        }
    } else {
        tracing::warn!(
            baseline = base.label,
            candidate = cand.label,
            "N grids differ; skipping speedup charts"
        );
        plan.speedup_skipped = true;
    }
    plan
}

fn speedup_slug(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Iterative => "iter",
        Algorithm::DynamicProgramming => "dp",
        Algorithm::Recursive => "rec",
    }
}

fn implementation_charts(imp: &Implementation, data: &Dataset) -> Vec<(String, LineChart)> {
    let t = &data.timings;
    let tx = t.x();
    let iter_vs_dp = LineChart::new(format!("{}: Iterative vs DP Runtime", imp.label), "Time (s)")
        .line(Line::new(
            "Iterative",
            ITERATIVE_COLOR,
            Marker::Circle,
            &tx,
            &t.iterative,
        ))
        .line(Line::new(
            "Dynamic Programming",
            DP_COLOR,
            Marker::Cross,
            &tx,
            &t.dynamic_programming,
        ));

    let recursive = LineChart::new(
        format!("{}: Recursive Runtime (Log-Scale Y)", imp.label),
        "Time (s, log)",
    )
    .scale(Scale::Log10)
    .line(Line::new(
        "Recursive",
        RECURSIVE_COLOR,
        Marker::Triangle,
        &tx,
        &t.recursive,
    ));

    let o = &data.operations;
    let ox = o.x();
    let ops = LineChart::new(format!("{}: Operations vs N", imp.label), "Operations (unitless)")
        .line(Line::new("Iterative Ops", ITERATIVE_COLOR, Marker::Circle, &ox, &o.iterative))
        .line(Line::new("DP Ops", DP_COLOR, Marker::Cross, &ox, &o.dynamic_programming))
        .line(Line::new(
            "Recursive Ops",
            RECURSIVE_COLOR,
            Marker::Triangle,
            &ox,
            &o.recursive,
        ));

    vec![
        (format!("iter_vs_dp_{}.svg", imp.suffix), iter_vs_dp),
        (format!("recursive_{}_log.svg", imp.suffix), recursive),
        (format!("ops_{}.svg", imp.suffix), ops),
    ]
}

/// Render every chart of `plan` into `out_dir`, returning the written paths.
pub fn render_all(plan: &ChartPlan, out_dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(plan.charts.len());
    for (name, chart) in &plan.charts {
        let path = out_dir.join(name);
        render_svg(chart, &path)?;
        written.push(path);
    }
    tracing::info!(count = written.len(), dir = %out_dir.display(), "figures saved");
    Ok(written)
}
