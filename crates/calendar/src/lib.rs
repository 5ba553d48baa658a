//! # hemerai-calendar
//!
//! Day-of-year enumeration for the Athenian festival and conciliar calendars.
//!
//! Festival months are 29 (hollow) or 30 (full) days; prytanies vary by era.
//! Because the actual lengths in a given year are unknown, a date such as
//! "Metageitnion 10" maps to a set of possible days-of-year, one per
//! admissible arrangement of the preceding units.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarPosition"] -->|"festival_candidates()"| C["Vec of DoyCandidate"]
//!     A -->|"prytany_candidates()"| C
//!     P["PrytanyType"] -->|"resolve() via EraTable"| E["Era"]
//!     E -->|"LengthRules::for_era()"| R["LengthRule"]
//!     R --> C
//!     L["unit lengths"] -->|"unit_sequence()"| D["Vec of CalendarDay"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hemerai_calendar::{
//!     CalendarPosition, ConciliarConfig, FestivalConfig, PrytanyType, festival_candidates,
//!     prytany_candidates,
//! };
//!
//! let festival = festival_candidates(
//!     CalendarPosition::new(2, 10).unwrap(),
//!     &FestivalConfig::default(),
//! );
//! assert_eq!(festival.first().unwrap().doy(), 39);
//!
//! let conciliar = prytany_candidates(
//!     CalendarPosition::new(2, 10).unwrap(),
//!     PrytanyType::Aligned10,
//!     None,
//!     &ConciliarConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(conciliar.len(), 4);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `position` | Calendar positions and nested alternative readings |
//! | `month` | Attic month names |
//! | `era` | Era classification by year |
//! | `rules` | Unit-length rules per era |
//! | `doy` | Day-of-year candidates |
//! | `enumerate` | Festival and prytany enumeration |
//! | `sequence` | Day-by-day layout of unit lengths |
//! | `config` | Enumeration configuration |
//! | `error` | Error types |

mod config;
mod doy;
mod enumerate;
mod era;
mod error;
mod month;
mod position;
mod rules;
mod sequence;

pub use config::{ConciliarConfig, FestivalConfig};
pub use doy::{DoyCandidate, Intercalation};
pub use enumerate::{festival_candidates, prytany_candidates};
pub use era::{Era, EraTable, PrytanyType, bce, era_for_year};
pub use error::CalendarError;
pub use month::Month;
pub use position::{CalendarPosition, MAX_DAY, MAX_UNIT, Reading};
pub use rules::{LengthRule, LengthRules, UnitRule};
pub use sequence::{CalendarDay, DoyCursor, unit_sequence, unit_starts};
