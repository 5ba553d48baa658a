//! Configuration for festival and conciliar enumeration.

use crate::era::EraTable;
use crate::rules::LengthRules;

/// Configuration for [`festival_candidates`](crate::festival_candidates).
///
/// # Example
///
/// ```
/// use hemerai_calendar::FestivalConfig;
///
/// let config = FestivalConfig::new().with_max_diff(2);
/// assert_eq!(config.max_diff(), 2);
/// assert_eq!(config.full(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalConfig {
    /// Length of a full month.
    full: u16,
    /// Length of a hollow month.
    hollow: u16,
    /// Largest tolerated difference between full and hollow month counts.
    max_diff: u8,
}

impl FestivalConfig {
    /// Creates a configuration with the defaults: full = 30, hollow = 29,
    /// `max_diff` = 4.
    pub fn new() -> Self {
        Self {
            full: 30,
            hollow: 29,
            max_diff: 4,
        }
    }

    /// Sets the largest tolerated difference between full and hollow counts.
    pub fn with_max_diff(mut self, max_diff: u8) -> Self {
        self.max_diff = max_diff;
        self
    }

    /// Sets the full and hollow month lengths.
    pub fn with_lengths(mut self, full: u16, hollow: u16) -> Self {
        self.full = full;
        self.hollow = hollow;
        self
    }

    /// Returns the full month length.
    pub fn full(&self) -> u16 {
        self.full
    }

    /// Returns the hollow month length.
    pub fn hollow(&self) -> u16 {
        self.hollow
    }

    /// Returns the full/hollow difference bound.
    pub fn max_diff(&self) -> u8 {
        self.max_diff
    }
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`prytany_candidates`](crate::prytany_candidates).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConciliarConfig {
    rules: LengthRules,
    eras: EraTable,
    /// `None` uses the era's own `max_diff`.
    max_diff: Option<u8>,
    rule_of_aristotle: bool,
}

impl ConciliarConfig {
    /// Creates a configuration with the default rule and era tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the length rules.
    pub fn with_rules(mut self, rules: LengthRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replaces the era table used to resolve `PrytanyType::Auto`.
    pub fn with_eras(mut self, eras: EraTable) -> Self {
        self.eras = eras;
        self
    }

    /// Overrides the extra long units tolerated beyond each era's bound.
    pub fn with_max_diff(mut self, max_diff: u8) -> Self {
        self.max_diff = Some(max_diff);
        self
    }

    /// Requires long prytanies to precede short ones.
    pub fn with_rule_of_aristotle(mut self, enabled: bool) -> Self {
        self.rule_of_aristotle = enabled;
        self
    }

    /// Returns the length rules.
    pub fn rules(&self) -> &LengthRules {
        &self.rules
    }

    /// Returns the era table.
    pub fn eras(&self) -> &EraTable {
        &self.eras
    }

    /// Returns the caller's `max_diff` override, if any.
    pub fn max_diff(&self) -> Option<u8> {
        self.max_diff
    }

    /// Returns whether the rule of Aristotle is enforced.
    pub fn rule_of_aristotle(&self) -> bool {
        self.rule_of_aristotle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festival_defaults() {
        let cfg = FestivalConfig::default();
        assert_eq!(cfg.full(), 30);
        assert_eq!(cfg.hollow(), 29);
        assert_eq!(cfg.max_diff(), 4);
    }

    #[test]
    fn festival_builder() {
        let cfg = FestivalConfig::new().with_max_diff(1).with_lengths(31, 28);
        assert_eq!(cfg.full(), 31);
        assert_eq!(cfg.hollow(), 28);
        assert_eq!(cfg.max_diff(), 1);
    }

    #[test]
    fn conciliar_defaults() {
        let cfg = ConciliarConfig::new();
        assert_eq!(cfg.max_diff(), None);
        assert!(!cfg.rule_of_aristotle());
        assert_eq!(cfg.rules(), &LengthRules::default());
        assert_eq!(cfg.eras(), &EraTable::default());
    }

    #[test]
    fn conciliar_builder() {
        let cfg = ConciliarConfig::new()
            .with_max_diff(2)
            .with_rule_of_aristotle(true);
        assert_eq!(cfg.max_diff(), Some(2));
        assert!(cfg.rule_of_aristotle());
    }
}
