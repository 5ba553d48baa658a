//! Unit-length rules for each era of the conciliar calendar.

use serde::{Deserialize, Serialize};

use crate::era::Era;

/// How the units preceding a position may be sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitRule {
    /// Units are either `long` or `short` days, with at most `max_long`
    /// long units in the year.
    Split {
        /// Length of a long unit in days.
        long: u16,
        /// Length of a short unit in days.
        short: u16,
        /// Maximum number of long units.
        max_long: u8,
    },
    /// Every unit has the same length.
    Fixed {
        /// Length of every unit in days.
        fixed: u16,
    },
}

impl UnitRule {
    /// Length of the longest unit this rule allows.
    pub fn longest(self) -> u16 {
        match self {
            Self::Split { long, .. } => long,
            Self::Fixed { fixed } => fixed,
        }
    }
}

/// Length rules for one era: an ordinary branch and, where the era knows
/// intercalation, an intercalary branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthRule {
    /// Rule for an ordinary year.
    pub ordinary: UnitRule,
    /// Rule for an intercalary year; `None` when the era has no intercalation.
    #[serde(default)]
    pub intercalary: Option<UnitRule>,
    /// Extra long units tolerated beyond `max_long` when the caller does not
    /// choose a bound.
    #[serde(default)]
    pub max_diff: u8,
}

/// One [`LengthRule`] per era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthRules {
    /// Ten prytanies of 37 or 36 days.
    #[serde(default = "default_quasi_solar")]
    pub quasi_solar: LengthRule,
    /// Ten prytanies aligned with the festival year.
    #[serde(default = "default_aligned_10")]
    pub aligned_10: LengthRule,
    /// Twelve prytanies aligned with the festival year.
    #[serde(default = "default_aligned_12")]
    pub aligned_12: LengthRule,
    /// Thirteen prytanies aligned with the festival year.
    #[serde(default = "default_aligned_13")]
    pub aligned_13: LengthRule,
}

impl LengthRules {
    /// Returns the rule for `era`.
    pub fn for_era(&self, era: Era) -> &LengthRule {
        match era {
            Era::QuasiSolar => &self.quasi_solar,
            Era::Aligned10 => &self.aligned_10,
            Era::Aligned12 => &self.aligned_12,
            Era::Aligned13 => &self.aligned_13,
        }
    }
}

impl Default for LengthRules {
    fn default() -> Self {
        Self {
            quasi_solar: default_quasi_solar(),
            aligned_10: default_aligned_10(),
            aligned_12: default_aligned_12(),
            aligned_13: default_aligned_13(),
        }
    }
}

// A 366-day quasi-solar year has a sixth 37-day prytany, hence max_diff 1.
fn default_quasi_solar() -> LengthRule {
    LengthRule {
        ordinary: UnitRule::Split {
            long: 37,
            short: 36,
            max_long: 5,
        },
        intercalary: None,
        max_diff: 1,
    }
}

fn default_aligned_10() -> LengthRule {
    LengthRule {
        ordinary: UnitRule::Split {
            long: 36,
            short: 35,
            max_long: 4,
        },
        intercalary: Some(UnitRule::Split {
            long: 39,
            short: 38,
            max_long: 4,
        }),
        max_diff: 0,
    }
}

fn default_aligned_12() -> LengthRule {
    LengthRule {
        ordinary: UnitRule::Split {
            long: 30,
            short: 29,
            max_long: 7,
        },
        intercalary: Some(UnitRule::Fixed { fixed: 32 }),
        max_diff: 0,
    }
}

fn default_aligned_13() -> LengthRule {
    LengthRule {
        ordinary: UnitRule::Split {
            long: 28,
            short: 27,
            max_long: 3,
        },
        intercalary: Some(UnitRule::Split {
            long: 30,
            short: 29,
            max_long: 7,
        }),
        max_diff: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_per_era() {
        let rules = LengthRules::default();
        assert_eq!(rules.for_era(Era::QuasiSolar).ordinary.longest(), 37);
        assert!(rules.for_era(Era::QuasiSolar).intercalary.is_none());
        assert_eq!(rules.for_era(Era::Aligned10).ordinary.longest(), 36);
        assert_eq!(
            rules.for_era(Era::Aligned12).intercalary,
            Some(UnitRule::Fixed { fixed: 32 })
        );
        assert_eq!(rules.for_era(Era::Aligned13).ordinary.longest(), 28);
    }

    #[test]
    fn default_max_diff() {
        let rules = LengthRules::default();
        assert_eq!(rules.quasi_solar.max_diff, 1);
        assert_eq!(rules.aligned_10.max_diff, 0);
        assert_eq!(rules.aligned_12.max_diff, 0);
        assert_eq!(rules.aligned_13.max_diff, 0);
    }

    #[test]
    fn fixed_longest() {
        assert_eq!(UnitRule::Fixed { fixed: 32 }.longest(), 32);
    }
}
