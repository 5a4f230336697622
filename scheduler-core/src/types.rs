//! Shared scalar types and the solver configuration surface.

use serde::{Deserialize, Serialize};

/// Terminal status an oracle run can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// A provably optimal solution was found.
    Optimal,
    /// The problem has no feasible solution.
    Infeasible,
    /// The objective is unbounded.
    Unbounded,
    /// The solver stopped (e.g. time limit) without a feasible solution.
    NotSolved,
    /// The backend returned something this driver does not recognize.
    Undefined,
}

impl SolverStatus {
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Optimal)
    }
}

/// Tunables passed down to the external MILP oracle. Plain data; the only
/// knob this crate exposes (see SPEC_FULL.md §4.10 - no env/config-file
/// reading happens here, that belongs to the CLI layer). Only
/// `time_limit_seconds` is currently wired into [`crate::solve::HighsOracle`];
/// the rest are accepted and round-tripped through the CLI but the `good_lp`
/// HiGHS binding this crate builds against does not expose a stable setter
/// for them yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock budget for the solve. 0 = unlimited.
    pub time_limit_seconds: f64,
    /// Worker thread hint passed to the backend. 0 = backend default.
    pub threads: usize,
    /// Determinism seed, passed through where the backend honors it.
    pub seed: u64,
    /// Relative optimality gap the backend may stop at. 0.0 asks for a
    /// proof of optimality where supported.
    pub mip_gap: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_seconds: 0.0,
            threads: 0,
            seed: 0,
            mip_gap: 0.0,
        }
    }
}

impl SolverConfig {
    pub fn with_time_limit(seconds: f64) -> Self {
        Self {
            time_limit_seconds: seconds,
            ..Default::default()
        }
    }

    pub fn has_time_limit(&self) -> bool {
        self.time_limit_seconds > 0.0
    }
}
