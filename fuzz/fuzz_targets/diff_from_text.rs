#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    jdp_fuzz::fuzz_diff_from_text(data);
});
