//! Configuration for collation.

/// Configuration for [`collate`](crate::collate).
///
/// # Example
///
/// ```
/// use hemerai_collate::CollateConfig;
///
/// let config = CollateConfig::new()
///     .with_report_failures(true)
///     .with_max_combinations(10_000);
/// assert!(config.report_failures());
/// assert_eq!(config.max_combinations(), Some(10_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollateConfig {
    /// Keep rejected combinations in the result.
    report_failures: bool,
    /// Evaluate combinations on the rayon thread pool.
    parallel: bool,
    /// Refuse inputs whose cartesian product is larger than this.
    max_combinations: Option<usize>,
}

impl CollateConfig {
    /// Creates a configuration with the defaults: rejected combinations
    /// discarded, sequential evaluation, no combination limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps rejected combinations in the result.
    pub fn with_report_failures(mut self, report_failures: bool) -> Self {
        self.report_failures = report_failures;
        self
    }

    /// Evaluates combinations in parallel. Output order is unchanged.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the largest cartesian product that will be evaluated.
    pub fn with_max_combinations(mut self, limit: usize) -> Self {
        self.max_combinations = Some(limit);
        self
    }

    /// Returns whether rejected combinations are kept.
    pub fn report_failures(&self) -> bool {
        self.report_failures
    }

    /// Returns whether evaluation is parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the combination limit, if any.
    pub fn max_combinations(&self) -> Option<usize> {
        self.max_combinations
    }
}
