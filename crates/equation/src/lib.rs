//! # hemerai-equation
//!
//! Equations between the festival and conciliar calendars.
//!
//! An inscription dated by both calendars states that a festival date and a
//! prytany date were the same day. This crate enumerates the possible
//! days-of-year of each side and keeps the days they share.
//!
//! ## Pipeline
//!
//! ```text
//! solve_equation()
//!   ├─ Reading::flatten()          (hemerai-calendar)
//!   ├─ festival_candidates()       (hemerai-calendar)
//!   ├─ prytany_candidates()        (hemerai-calendar)
//!   └─ pair_candidates()           (solve.rs)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use hemerai_calendar::{CalendarPosition, PrytanyType, Reading};
//! use hemerai_equation::{SolveConfig, solve_equation};
//!
//! // Metageitnion 10 = prytany II, day 4
//! let festival = Reading::from(CalendarPosition::new(2, 10).unwrap());
//! let conciliar = Reading::from(CalendarPosition::new(2, 4).unwrap());
//!
//! let equations = solve_equation(
//!     &festival,
//!     &conciliar,
//!     PrytanyType::Aligned10,
//!     None,
//!     &SolveConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(equations[0].doy(), 39);
//! assert_eq!(equations[0].festival().preceding(), &[29]);
//! assert_eq!(equations[0].conciliar().preceding(), &[35]);
//! ```

mod config;
mod equation;
mod error;
mod solve;

pub use config::SolveConfig;
pub use equation::{Equation, is_misaligned};
pub use error::EquationError;
pub use solve::{pair_candidates, solve_equation};
