#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbench_harness::parse_output;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(output) = parse_output(text) {
        assert_eq!(output.timings.len(), output.operations.len());
        assert!(output.timings.len() <= 3);
    }
});
