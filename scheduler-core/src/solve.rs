//! The solver driver (SPEC_FULL.md §4.6): submits the assembled problem to
//! an external MILP oracle and maps its terminal status back onto
//! [`SolverStatus`]. The oracle boundary is a trait so the driver itself
//! never depends on a particular backend; [`HighsOracle`] is the one this
//! crate ships.

use std::collections::HashMap;
use std::time::Instant;

use good_lp::{Expression, ProblemVariables, Solution, SolverModel, Variable};
use tracing::{info, instrument, warn};

use crate::constraints::NamedConstraint;
use crate::diagnose;
use crate::error::{Error, Result};
use crate::types::{SolverConfig, SolverStatus};

/// What the oracle handed back: a status plus, if optimal, the variable
/// valuation needed by the result projector.
pub struct OracleOutcome {
    pub status: SolverStatus,
    pub values: Option<HashMap<Variable, f64>>,
    pub wall_time_seconds: f64,
}

/// The boundary between this crate's model-building code and an external
/// MILP solver. `scheduler-core` ships one implementation ([`HighsOracle`])
/// but callers may supply their own.
pub trait MilpOracle {
    fn id(&self) -> &str;

    fn solve(
        &self,
        pool: ProblemVariables,
        objective: Expression,
        constraints: &[NamedConstraint],
        config: &SolverConfig,
    ) -> OracleOutcome;
}

/// A `good_lp`-backed oracle using the HiGHS solver.
pub struct HighsOracle;

impl MilpOracle for HighsOracle {
    fn id(&self) -> &str {
        "highs"
    }

    fn solve(
        &self,
        pool: ProblemVariables,
        objective: Expression,
        constraints: &[NamedConstraint],
        config: &SolverConfig,
    ) -> OracleOutcome {
        let started = Instant::now();
        let mut model = pool
            .maximise(objective)
            .using(good_lp::solvers::highs::highs);

        if config.has_time_limit() {
            model = model.set_time_limit(config.time_limit_seconds);
        }

        for constraint in constraints {
            model = model.with(constraint.to_good_lp());
        }

        let outcome = match model.solve() {
            Ok(solution) => {
                let values = pool_values(constraints, &solution);
                OracleOutcome {
                    status: SolverStatus::Optimal,
                    values: Some(values),
                    wall_time_seconds: started.elapsed().as_secs_f64(),
                }
            }
            Err(good_lp::ResolutionError::Infeasible) => OracleOutcome {
                status: SolverStatus::Infeasible,
                values: None,
                wall_time_seconds: started.elapsed().as_secs_f64(),
            },
            Err(good_lp::ResolutionError::Unbounded) => OracleOutcome {
                status: SolverStatus::Unbounded,
                values: None,
                wall_time_seconds: started.elapsed().as_secs_f64(),
            },
            Err(_) => OracleOutcome {
                status: SolverStatus::Undefined,
                values: None,
                wall_time_seconds: started.elapsed().as_secs_f64(),
            },
        };
        outcome
    }
}

/// Pulls the valuation of every variable referenced by the constraint set
/// out of a solved model. We cannot enumerate `ProblemVariables` directly
/// after it has been consumed by `.maximise(...)`, so we collect the
/// variables actually used by the constraints instead - every variable this
/// crate creates appears in at least one constraint or the objective.
fn pool_values(constraints: &[NamedConstraint], solution: &impl Solution) -> HashMap<Variable, f64> {
    let mut values = HashMap::new();
    for constraint in constraints {
        for var in constraint.lhs.linear_coefficients() {
            values.entry(var.0).or_insert_with(|| solution.value(var.0));
        }
    }
    values
}

/// Runs the whole assemble-and-solve step, raising [`Error::Unsatisfiable`]
/// or [`Error::Timeout`] on non-optimal status with a diagnosis attached.
#[instrument(skip(oracle, pool, objective, constraints))]
pub fn drive(
    oracle: &dyn MilpOracle,
    pool: ProblemVariables,
    objective: Expression,
    constraints: Vec<NamedConstraint>,
    config: &SolverConfig,
) -> Result<HashMap<Variable, f64>> {
    let outcome = oracle.solve(pool, objective, &constraints, config);
    info!(
        status = ?outcome.status,
        wall_time_seconds = outcome.wall_time_seconds,
        "solve finished"
    );
    match outcome.status {
        SolverStatus::Optimal => Ok(outcome.values.unwrap_or_default()),
        SolverStatus::Infeasible | SolverStatus::Unbounded | SolverStatus::Undefined => {
            let diagnosis = diagnose::diagnose(oracle.id(), &constraints);
            warn!(violations = diagnosis.violated_constraints.len(), "solve did not produce an optimal solution");
            Err(Error::Unsatisfiable(diagnosis))
        }
        SolverStatus::NotSolved => {
            let diagnosis = diagnose::diagnose(oracle.id(), &constraints);
            Err(Error::Timeout(diagnosis))
        }
    }
}
