/// Resource limits that keep setup and search bounded
///
/// Search is exhaustive and grows as `(N!)^(C-1)`, so the defaults are
/// generous for hand-written puzzles (N ≤ 6, C ≤ 4) and stop runaway input.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum clue text length in bytes
    pub max_clue_length_bytes: usize,

    /// Maximum number of comma-separated sub-tests in one clue
    pub max_tests_per_clue: usize,

    /// Maximum number of categories in a puzzle
    pub max_categories: usize,

    /// Maximum number of items per category
    pub max_items_per_category: usize,

    /// Maximum search time in milliseconds
    pub max_search_time_ms: u64,

    /// Maximum number of full assignments to evaluate, unlimited when `None`
    pub max_assignments: Option<u64>,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_clue_length_bytes: 4096,
            max_tests_per_clue: 64,
            max_categories: 16,
            max_items_per_category: 16,
            max_search_time_ms: 60_000, // 1 minute
            max_assignments: None,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
