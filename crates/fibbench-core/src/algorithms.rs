//! The three benchmarked Fibonacci algorithms.
//!
//! Each algorithm produces the 1-indexed series `F(1)..=F(n)` and records
//! the number of additions it performed in an [`OpCounter`]. The counts are
//! what the harness compares across implementations, so the counting rules
//! are part of the contract:
//!
//! - iterative: one operation per term beyond the second,
//! - dynamic programming: one operation per memo fill, the memo being
//!   shared across the whole series,
//! - recursive: one operation per call with `n > 2`, summed over the series.
//!
//! Arithmetic wraps at `u64::MAX`; past `F(93)` values are taken modulo 2^64.

use std::fmt;

/// Counter of elementary operations performed by an algorithm.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCounter(u64);

impl OpCounter {
    #[must_use]
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.0
    }
}

/// A benchmarked algorithm, in the fixed column order of result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Iterative,
    DynamicProgramming,
    Recursive,
}

impl Algorithm {
    /// All algorithms in table column order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Iterative,
        Algorithm::DynamicProgramming,
        Algorithm::Recursive,
    ];

    /// Column header used in result tables.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Iterative => "Iterative",
            Self::DynamicProgramming => "Dynamic Programming",
            Self::Recursive => "Recursive",
        }
    }

    /// Label printed by the counterpart executable in single-algorithm modes.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::DynamicProgramming => "dynamic programming",
            Self::Recursive => "recursive",
        }
    }

    /// Short name used in chart legends and logs.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Iterative => "Iterative",
            Self::DynamicProgramming => "DP",
            Self::Recursive => "Recursive",
        }
    }

    /// Compute `F(1)..=F(n)`, counting operations into `ops`.
    ///
    /// The whole series is held in memory; callers bound `n` (see
    /// [`MAX_SERIES_LEN`](crate::constants::MAX_SERIES_LEN)).
    #[must_use]
    pub fn series(self, n: u64, ops: &mut OpCounter) -> Vec<u64> {
        match self {
            Self::Iterative => iterative_series(n, ops),
            Self::DynamicProgramming => dp_series(n, ops),
            Self::Recursive => recursive_series(n, ops),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn capacity(n: u64) -> usize {
    n as usize
}

/// Bottom-up series: each term is the sum of the two stored before it.
#[must_use]
pub fn iterative_series(n: u64, ops: &mut OpCounter) -> Vec<u64> {
    let mut series: Vec<u64> = Vec::with_capacity(capacity(n));
    for i in 1..=n {
        if i <= 2 {
            series.push(1);
            continue;
        }
        ops.tick();
        let len = series.len();
        series.push(series[len - 1].wrapping_add(series[len - 2]));
    }
    series
}

/// Top-down memoized recursion, evaluated for every index of the series.
#[must_use]
pub fn dp_series(n: u64, ops: &mut OpCounter) -> Vec<u64> {
    let mut memo: Vec<Option<u64>> = vec![None; capacity(n) + 1];
    (1..=n).map(|i| memo_fib(i, &mut memo, ops)).collect()
}

#[allow(clippy::cast_possible_truncation)]
fn memo_fib(n: u64, memo: &mut [Option<u64>], ops: &mut OpCounter) -> u64 {
    if n <= 2 {
        return 1;
    }
    if let Some(value) = memo[n as usize] {
        return value;
    }
    ops.tick();
    let value = memo_fib(n - 1, memo, ops).wrapping_add(memo_fib(n - 2, memo, ops));
    memo[n as usize] = Some(value);
    value
}

/// Naive exponential recursion, evaluated independently for every index.
#[must_use]
pub fn recursive_series(n: u64, ops: &mut OpCounter) -> Vec<u64> {
    (1..=n).map(|i| naive_fib(i, ops)).collect()
}

fn naive_fib(n: u64, ops: &mut OpCounter) -> u64 {
    if n <= 2 {
        return 1;
    }
    ops.tick();
    naive_fib(n - 1, ops).wrapping_add(naive_fib(n - 2, ops))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(algo: Algorithm, n: u64) -> (Vec<u64>, u64) {
        let mut ops = OpCounter::new();
        let series = algo.series(n, &mut ops);
        (series, ops.count())
    }

    #[test]
    fn first_seven_terms() {
        for algo in Algorithm::ALL {
            assert_eq!(run(algo, 7).0, [1, 1, 2, 3, 5, 8, 13], "{algo}");
        }
    }

    #[test]
    fn empty_series() {
        for algo in Algorithm::ALL {
            assert_eq!(run(algo, 0), (vec![], 0), "{algo}");
        }
    }

    #[test]
    fn short_series_have_no_operations() {
        for algo in Algorithm::ALL {
            assert_eq!(run(algo, 1), (vec![1], 0));
            assert_eq!(run(algo, 2), (vec![1, 1], 0));
        }
    }

    #[test]
    fn linear_operation_counts() {
        assert_eq!(run(Algorithm::Iterative, 10).1, 8);
        assert_eq!(run(Algorithm::DynamicProgramming, 10).1, 8);
    }

    #[test]
    fn recursive_operation_count() {
        // Calls with n > 2 for F(i) number F(i) - 1; summed over i = 3..=5
        // that is 1 + 2 + 4.
        assert_eq!(run(Algorithm::Recursive, 5).1, 7);
    }

    #[test]
    fn largest_exact_term() {
        let (series, _) = run(Algorithm::Iterative, 93);
        assert_eq!(series[92], 12_200_160_415_121_876_738);
    }

    #[test]
    fn wraps_past_u64() {
        let (iter, _) = run(Algorithm::Iterative, 100);
        let (dp, _) = run(Algorithm::DynamicProgramming, 100);
        assert_eq!(iter, dp);
        assert_eq!(iter[93], iter[92].wrapping_add(iter[91]));
    }

    #[test]
    fn inferred_u64_terms() {
        let mut ops = OpCounter::new();
        let series = iterative_series(3, &mut ops);
        assert_eq!(series, [1u64, 1, 2]);
        assert_eq!(ops.count(), 1);
    }

    #[test]
    fn counter_counts_ticks() {
        let mut ops = OpCounter::new();
        ops.tick();
        ops.tick();
        assert_eq!(ops.count(), 2);
        assert_eq!(OpCounter::default().count(), 0);
    }

    #[test]
    fn column_order() {
        let columns: Vec<_> = Algorithm::ALL.iter().map(|a| a.column()).collect();
        assert_eq!(columns, ["Iterative", "Dynamic Programming", "Recursive"]);
    }
}
