//! # scheduler-core
//!
//! Builds and solves the mixed-integer linear program behind a conference's
//! talk schedule: which slot and venue each talk lands in, and who attends.
//!
//! ## Modules
//!
//! - [`time`] - the slot grid (wall clock <-> 5-minute slots)
//! - [`domain`] - descriptor parsing and the derived, solve-ready model
//! - [`variables`] - the lazily-cached MILP variable factory
//! - [`constraints`] - the hard constraint set
//! - [`objective`] - the weighted objective
//! - [`solve`] - the external MILP oracle boundary and solver driver
//! - [`project`] - reads a solved valuation back onto talk records
//! - [`diagnose`] - infeasibility diagnostics
//! - [`session`] - [`Session`], the single-use entry point tying it together
//!
//! ## Quick start
//!
//! ```no_run
//! use scheduler_core::{Descriptor, Session, SolverConfig};
//!
//! fn schedule(descriptor: Descriptor) -> scheduler_core::Result<Vec<scheduler_core::TalkRecord>> {
//!     let mut talks = descriptor.talks.clone();
//!     let mut session = Session::new(&descriptor)?;
//!     session.schedule(&mut talks, &SolverConfig::default())?;
//!     Ok(talks)
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod constraints;
pub mod diagnose;
pub mod domain;
pub mod objective;
pub mod project;
pub mod session;
pub mod solve;
pub mod time;
pub mod variables;

mod error;
mod types;

pub use domain::{Descriptor, TalkRecord};
pub use error::{Error, Result};
pub use session::Session;
pub use types::{SolverConfig, SolverStatus};

/// Common imports for callers building against this crate directly.
pub mod prelude {
    pub use crate::domain::{Descriptor, Domain, PersonRecord, TalkRecord, VenueRecord};
    pub use crate::session::Session;
    pub use crate::solve::{HighsOracle, MilpOracle};
    pub use crate::types::{SolverConfig, SolverStatus};
    pub use crate::Error;
    pub use crate::Result;
}
