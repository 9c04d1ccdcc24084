#![no_main]

use gridlock::{parse_clue, ResourceLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let limits = ResourceLimits::default();
        for required_true in 0..=2 {
            let _ = parse_clue(s, required_true, &limits);
        }
    }
});
