#![no_main]

use libfuzzer_sys::fuzz_target;

use fibbench_harness::{read_table, write_table};

fuzz_target!(|data: &[u8]| {
    // Whatever parses must survive a write/read cycle unchanged.
    if let Ok(rows) = read_table(data) {
        let mut buf = Vec::new();
        write_table(&mut buf, &rows).expect("writing to memory");
        let back = read_table(buf.as_slice()).expect("re-reading written table");
        assert_eq!(back, rows);
    }
});
