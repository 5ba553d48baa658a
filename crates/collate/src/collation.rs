//! Output types of the collation engine.

use hemerai_calendar::{CalendarDay, unit_sequence};
use hemerai_equation::Equation;
use serde::Serialize;

/// A mutually consistent choice of one equation per attestation, together
/// with the unit lengths it reveals.
///
/// `festival_partitions[i]` holds the months first revealed by equation `i`,
/// i.e. the preceding months of equation `i` not already accounted for by
/// equation `i - 1`. The conciliar side works the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collation {
    festival_partitions: Vec<Vec<u16>>,
    conciliar_partitions: Vec<Vec<u16>>,
    equations: Vec<Equation>,
}

impl Collation {
    pub(crate) fn new(
        festival_partitions: Vec<Vec<u16>>,
        conciliar_partitions: Vec<Vec<u16>>,
        equations: Vec<Equation>,
    ) -> Self {
        Self {
            festival_partitions,
            conciliar_partitions,
            equations,
        }
    }

    /// Returns the festival month lengths revealed at each step.
    pub fn festival_partitions(&self) -> &[Vec<u16>] {
        &self.festival_partitions
    }

    /// Returns the prytany lengths revealed at each step.
    pub fn conciliar_partitions(&self) -> &[Vec<u16>] {
        &self.conciliar_partitions
    }

    /// Returns the chosen equations in chronological order.
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns the festival month lengths, in revealed order.
    pub fn festival_lengths(&self) -> Vec<u16> {
        self.festival_partitions.concat()
    }

    /// Returns the prytany lengths, in revealed order.
    pub fn conciliar_lengths(&self) -> Vec<u16> {
        self.conciliar_partitions.concat()
    }

    /// Lays the revealed festival months out day by day.
    pub fn festival_days(&self) -> Vec<CalendarDay> {
        unit_sequence(&self.festival_lengths())
    }

    /// Lays the revealed prytanies out day by day.
    pub fn conciliar_days(&self) -> Vec<CalendarDay> {
        unit_sequence(&self.conciliar_lengths())
    }
}

/// The first check a combination failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Conciliar candidates disagree on whether the year is intercalary.
    MixedConciliarIntercalation,
    /// A festival intercalation at an earlier step is absent at `step`.
    FestivalIntercalationReverted {
        /// Index of the equation that drops the intercalation.
        step: usize,
    },
    /// The festival preceding run at `step` does not contain the previous one.
    FestivalNesting {
        /// Index of the offending equation.
        step: usize,
    },
    /// The conciliar preceding run at `step` does not contain the previous one.
    ConciliarNesting {
        /// Index of the offending equation.
        step: usize,
    },
}

/// A combination of equations that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedCombination {
    equations: Vec<Equation>,
    reason: Rejection,
}

impl RejectedCombination {
    pub(crate) fn new(equations: Vec<Equation>, reason: Rejection) -> Self {
        Self { equations, reason }
    }

    /// Returns the chosen equations, as given.
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Returns the first check that failed.
    pub fn reason(&self) -> Rejection {
        self.reason
    }
}

/// Result of a [`collate`](crate::collate) call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollateResult {
    collations: Vec<Collation>,
    rejected: Vec<RejectedCombination>,
    n_combinations: usize,
}

impl CollateResult {
    pub(crate) fn new(
        collations: Vec<Collation>,
        rejected: Vec<RejectedCombination>,
        n_combinations: usize,
    ) -> Self {
        Self {
            collations,
            rejected,
            n_combinations,
        }
    }

    /// Returns the valid collations in enumeration order.
    pub fn collations(&self) -> &[Collation] {
        &self.collations
    }

    /// Returns the rejected combinations in enumeration order.
    ///
    /// Empty unless the configuration asked for failures.
    pub fn rejected(&self) -> &[RejectedCombination] {
        &self.rejected
    }

    /// Returns the number of combinations examined.
    pub fn n_combinations(&self) -> usize {
        self.n_combinations
    }

    /// Consumes the result, returning the valid collations.
    pub fn into_collations(self) -> Vec<Collation> {
        self.collations
    }
}
