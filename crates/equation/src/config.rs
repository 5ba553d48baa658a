//! Configuration for solving equations.

use hemerai_calendar::{ConciliarConfig, FestivalConfig};

/// Festival and conciliar enumeration settings used by
/// [`solve_equation`](crate::solve_equation).
///
/// # Example
///
/// ```
/// use hemerai_equation::SolveConfig;
///
/// let config = SolveConfig::new()
///     .with_festival_max_diff(2)
///     .with_rule_of_aristotle(true);
/// assert_eq!(config.festival().max_diff(), 2);
/// assert!(config.conciliar().rule_of_aristotle());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveConfig {
    festival: FestivalConfig,
    conciliar: ConciliarConfig,
}

impl SolveConfig {
    /// Creates a configuration with festival `max_diff` 4 and each era's
    /// default conciliar bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the festival configuration.
    pub fn with_festival(mut self, festival: FestivalConfig) -> Self {
        self.festival = festival;
        self
    }

    /// Replaces the conciliar configuration.
    pub fn with_conciliar(mut self, conciliar: ConciliarConfig) -> Self {
        self.conciliar = conciliar;
        self
    }

    /// Sets the festival full/hollow difference bound.
    pub fn with_festival_max_diff(mut self, max_diff: u8) -> Self {
        self.festival = self.festival.with_max_diff(max_diff);
        self
    }

    /// Overrides the conciliar long-unit slack for every era.
    pub fn with_conciliar_max_diff(mut self, max_diff: u8) -> Self {
        self.conciliar = self.conciliar.with_max_diff(max_diff);
        self
    }

    /// Requires long prytanies to precede short ones.
    pub fn with_rule_of_aristotle(mut self, enabled: bool) -> Self {
        self.conciliar = self.conciliar.with_rule_of_aristotle(enabled);
        self
    }

    /// Returns the festival configuration.
    pub fn festival(&self) -> &FestivalConfig {
        &self.festival
    }

    /// Returns the conciliar configuration.
    pub fn conciliar(&self) -> &ConciliarConfig {
        &self.conciliar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SolveConfig::default();
        assert_eq!(cfg.festival().max_diff(), 4);
        assert_eq!(cfg.conciliar().max_diff(), None);
        assert!(!cfg.conciliar().rule_of_aristotle());
    }

    #[test]
    fn builder_chaining() {
        let cfg = SolveConfig::new()
            .with_festival_max_diff(3)
            .with_conciliar_max_diff(1);
        assert_eq!(cfg.festival().max_diff(), 3);
        assert_eq!(cfg.conciliar().max_diff(), Some(1));
    }

    #[test]
    fn replace_sub_configs() {
        let cfg = SolveConfig::new()
            .with_festival(FestivalConfig::new().with_max_diff(0))
            .with_conciliar(ConciliarConfig::new().with_rule_of_aristotle(true));
        assert_eq!(cfg.festival().max_diff(), 0);
        assert!(cfg.conciliar().rule_of_aristotle());
    }
}
