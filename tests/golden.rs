//! Golden file integration tests.
//!
//! Reads tests/testdata/series_golden.json and verifies all 3 algorithms
//! produce the expected last term and operation count for known lengths.

use serde::Deserialize;

use fibbench_core::algorithms::{Algorithm, OpCounter};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    last: Option<u64>,
    iterative_ops: u64,
    dp_ops: u64,
    /// Absent where naive recursion is too slow to check.
    #[serde(default)]
    recursive_ops: Option<u64>,
    #[serde(default)]
    series: Option<Vec<u64>>,
}

impl GoldenEntry {
    fn expected_ops(&self, algorithm: Algorithm) -> Option<u64> {
        match algorithm {
            Algorithm::Iterative => Some(self.iterative_ops),
            Algorithm::DynamicProgramming => Some(self.dp_ops),
            Algorithm::Recursive => self.recursive_ops,
        }
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/series_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn run(algorithm: Algorithm, n: u64) -> (Vec<u64>, u64) {
    let mut ops = OpCounter::new();
    let series = algorithm.series(n, &mut ops);
    (series, ops.count())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_loads() {
    let data = load_golden_data();
    assert!(!data.values.is_empty());
}

#[test]
fn golden_last_terms_and_ops() {
    for entry in &load_golden_data().values {
        for algorithm in Algorithm::ALL {
            let Some(expected_ops) = entry.expected_ops(algorithm) else {
                continue;
            };
            let (series, ops) = run(algorithm, entry.n);
            assert_eq!(series.len() as u64, entry.n, "{algorithm} length for n={}", entry.n);
            assert_eq!(series.last().copied(), entry.last, "{algorithm} last term for n={}", entry.n);
            assert_eq!(ops, expected_ops, "{algorithm} ops for n={}", entry.n);
        }
    }
}

#[test]
fn golden_full_series() {
    for entry in &load_golden_data().values {
        let Some(expected) = &entry.series else {
            continue;
        };
        for algorithm in Algorithm::ALL {
            assert_eq!(&run(algorithm, entry.n).0, expected, "{algorithm}");
        }
    }
}
