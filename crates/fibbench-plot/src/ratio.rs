//! Cross-implementation speedup ratios.

use fibbench_core::cell::Cell;

/// `numerator / denominator`, defined only when both are measured and the
/// denominator is nonzero.
#[must_use]
pub fn speedup(numerator: Cell, denominator: Cell) -> Option<f64> {
    match (numerator, denominator) {
        (Cell::Value(num), Cell::Value(den)) if den != 0.0 => Some(num / den),
        _ => None,
    }
}

/// Element-wise ratio over plot columns; NaN stands for the placeholder on
/// input and for "undefined" on output.
#[must_use]
pub fn ratio(numerators: &[f64], denominators: &[f64]) -> Vec<f64> {
    numerators
        .iter()
        .zip(denominators)
        .map(|(&num, &den)| speedup(as_cell(num), as_cell(den)).unwrap_or(f64::NAN))
        .collect()
}

fn as_cell(v: f64) -> Cell {
    if v.is_nan() {
        Cell::Missing
    } else {
        Cell::Value(v)
    }
}

/// Whether two implementations were surveyed over exactly the same sizes.
/// Partial overlaps do not count.
#[must_use]
pub fn same_grid(a: &[u64], b: &[u64]) -> bool {
    a == b
}
