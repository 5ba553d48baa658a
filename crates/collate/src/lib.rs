//! # hemerai-collate
//!
//! Collation of several calendar equations from the same year.
//!
//! Each attestation of a year yields a set of candidate equations (see
//! `hemerai-equation`). Choosing one equation per attestation fixes how many
//! full and hollow months, and long and short prytanies, precede each date.
//! A choice is only possible if those counts grow consistently from one
//! attestation to the next. This crate enumerates every choice and keeps the
//! consistent ones.
//!
//! ## Architecture
//!
//! ```mermaid
//! flowchart LR
//!     A[equation sets] --> B[combination index]
//!     B --> C{conciliar intercalation uniform?}
//!     C -->|no| R[rejected]
//!     C -->|yes| D{festival intercalation kept?}
//!     D -->|no| R
//!     D -->|yes| E{preceding runs nest?}
//!     E -->|no| R
//!     E -->|yes| F[Collation]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `collate` | Cartesian product search |
//! | `collation` | Collation and rejection types |
//! | `nesting` | Subsequence removal over preceding runs |
//! | `config` | Search configuration |
//! | `error` | Error types |

mod collate;
mod collation;
mod config;
mod error;
mod nesting;

pub use collate::collate;
pub use collation::{CollateResult, Collation, RejectedCombination, Rejection};
pub use config::CollateConfig;
pub use error::CollateError;
pub use nesting::remove_subsequence;
