//! Column-oriented view of a result table.

use fibbench_core::algorithms::Algorithm;
use fibbench_harness::TableRow;

/// Parallel sequences of input sizes and per-algorithm values; the
/// placeholder becomes NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub n: Vec<u64>,
    pub iterative: Vec<f64>,
    pub dynamic_programming: Vec<f64>,
    pub recursive: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn from_rows(rows: &[TableRow]) -> Self {
        let mut series = Self::default();
        for row in rows {
            series.n.push(row.n);
            series.iterative.push(row.iterative.to_f64());
            series.dynamic_programming.push(row.dynamic_programming.to_f64());
            series.recursive.push(row.recursive.to_f64());
        }
        series
    }

    #[must_use]
    pub fn column(&self, algorithm: Algorithm) -> &[f64] {
        match algorithm {
            Algorithm::Iterative => &self.iterative,
            Algorithm::DynamicProgramming => &self.dynamic_programming,
            Algorithm::Recursive => &self.recursive,
        }
    }

    /// Input sizes as plot coordinates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x(&self) -> Vec<f64> {
        self.n.iter().map(|&n| n as f64).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.n.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n.is_empty()
    }
}
