#![no_main]

use gridlock::{Engine, Puzzle, ResourceLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(puzzle) = Puzzle::from_categories([
            ("n", vec!["1", "2", "3"]),
            ("w", vec!["one", "two", "six"]),
            ("x", vec!["-5", "0.5", "1e3"]),
        ]) else {
            return;
        };

        let limits = ResourceLimits {
            max_search_time_ms: 1_000,
            ..ResourceLimits::default()
        };
        let Ok(mut engine) = Engine::with_limits(puzzle, limits) else {
            return;
        };

        if engine.add_clue(s, 1).is_ok() {
            let _ = engine.solve();
        }
    }
});
