use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every abstraction built during a solve.
    pub abstractions: usize,

    /// A count of every iteration through a CEGAR loop, across all levels.
    pub iterations: usize,

    /// A count of every call to an oracle, whether to solve an abstraction or the innermost matrix.
    pub oracle_calls: usize,

    /// A count of every refinement of an abstraction.
    pub refinements: usize,

    /// The deepest level reached during a solve.
    pub max_depth: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
