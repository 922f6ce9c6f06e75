#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbench_core::algorithms::{Algorithm, OpCounter};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Iterative and DP are linear; keep n small enough for a fast run.
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 4096;

    let mut iter_ops = OpCounter::new();
    let mut dp_ops = OpCounter::new();
    let iterative = Algorithm::Iterative.series(n, &mut iter_ops);
    let dp = Algorithm::DynamicProgramming.series(n, &mut dp_ops);

    assert_eq!(iterative, dp, "Iterative != DP at n={n}");
    assert_eq!(iter_ops.count(), dp_ops.count(), "op counts differ at n={n}");
});
